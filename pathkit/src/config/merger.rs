//! Configuration merging and precedence handling.
//!
//! `markers` is replaced wholesale by a higher-precedence source, while
//! `extra_markers` accumulates across every source.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;
use crate::project::Marker;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigMerger};
/// use pathkit::project::Marker;
///
/// let low = Config { markers: Some(vec![Marker::any(".git")]), ..Default::default() };
/// let high = Config { markers: Some(vec![Marker::any(".hg")]), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.markers, Some(vec![Marker::any(".hg")]));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.markers.is_some() {
            target.markers.clone_from(&source.markers);
        }

        if let Some(ref extra) = source.extra_markers {
            let existing = target.extra_markers.get_or_insert_with(Vec::new);
            Self::append_markers(existing, extra.iter().cloned());
        }
    }

    /// Append markers whose names are not already in `target`.
    pub fn append_markers(target: &mut Vec<Marker>, source: impl IntoIterator<Item = Marker>) {
        for marker in source {
            if !target.iter().any(|m| m.name() == marker.name()) {
                target.push(marker);
            }
        }
    }
}
