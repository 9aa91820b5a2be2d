//! Configuration schema definitions.

use serde::{Deserialize, Serialize};

use crate::project::{Marker, MarkerSet};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pathkit::config::Config;
/// use pathkit::project::Marker;
///
/// let config: Config = serde_yaml::from_str(
///     "markers:\n  - name: .git\nextra_markers:\n  - name: Cargo.toml\n    kind: file\n",
/// ).unwrap();
/// assert_eq!(config.marker_set().names(), vec![".git", "Cargo.toml"]);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Markers recognizing a project root. Replaces the built-in set.
    pub markers: Option<Vec<Marker>>,

    /// Markers added on top of whichever set is in effect.
    pub extra_markers: Option<Vec<Marker>>,
}

impl Config {
    /// The effective marker set: `markers` (or the built-in default) plus
    /// `extra_markers`.
    #[must_use]
    pub fn marker_set(&self) -> MarkerSet {
        let mut set = match &self.markers {
            Some(markers) => MarkerSet::new(markers.iter().cloned()),
            None => MarkerSet::default(),
        };
        if let Some(extra) = &self.extra_markers {
            set.extend(extra.iter().cloned());
        }
        set
    }
}
