//! Project markers.
//!
//! A marker is a file or directory whose presence identifies the top of a
//! project tree. Markers are grouped in a [`MarkerSet`], which is an
//! ordinary value: callers pick a set (or take the default) and hand it to
//! the locator.

use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Version-control metadata. A directory in a normal checkout, a file in a
/// git worktree.
pub const VCS_MARKER: &str = ".git";

/// Tool-specific hidden directory.
pub const TOOL_MARKER: &str = ".claude";

/// Top-level marker file.
pub const FILE_MARKER: &str = "CLAUDE.md";

/// What kind of filesystem entry a marker must be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerKind {
    /// Matches only a directory.
    Directory,
    /// Matches only a non-directory entry.
    File,
    /// Matches anything that exists.
    #[default]
    Any,
}

impl fmt::Display for MarkerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::File => write!(f, "file"),
            Self::Any => write!(f, "any"),
        }
    }
}

/// A named marker and the kind of entry it must be.
///
/// # Examples
///
/// ```
/// use pathkit::project::{Marker, MarkerKind};
///
/// let marker = Marker::file("Cargo.toml");
/// assert_eq!(marker.name(), "Cargo.toml");
/// assert_eq!(marker.kind(), MarkerKind::File);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Marker {
    name: String,
    #[serde(default)]
    kind: MarkerKind,
}

impl Marker {
    /// Create a marker of the given kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: MarkerKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// A marker that must be a directory.
    #[must_use]
    pub fn directory(name: impl Into<String>) -> Self {
        Self::new(name, MarkerKind::Directory)
    }

    /// A marker that must be a file.
    #[must_use]
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, MarkerKind::File)
    }

    /// A marker that matches any existing entry.
    #[must_use]
    pub fn any(name: impl Into<String>) -> Self {
        Self::new(name, MarkerKind::Any)
    }

    /// The entry name looked for in each directory.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The kind of entry required.
    #[must_use]
    pub fn kind(&self) -> MarkerKind {
        self.kind
    }

    /// Whether this marker is present in `dir`.
    ///
    /// Symlinks are followed. An entry that cannot be looked up for any
    /// reason other than permissions counts as absent.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` if `dir` cannot be searched.
    pub fn is_present_in(&self, dir: &Path) -> Result<bool> {
        let candidate = dir.join(&self.name);
        let is_dir = match fs::metadata(&candidate) {
            Ok(meta) => meta.is_dir(),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                return Err(Error::from_io(&candidate, e));
            }
            Err(_) => return Ok(false),
        };

        Ok(match self.kind {
            MarkerKind::Directory => is_dir,
            MarkerKind::File => !is_dir,
            MarkerKind::Any => true,
        })
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The set of markers a project root is recognized by.
///
/// Markers carry no precedence: any one present stops the search. Order is
/// kept only so reports are stable.
///
/// # Examples
///
/// ```
/// use pathkit::project::{Marker, MarkerSet};
///
/// let defaults = MarkerSet::default();
/// assert_eq!(defaults.names(), vec![".git", ".claude", "CLAUDE.md"]);
///
/// let custom = MarkerSet::new([Marker::file("package.json")]);
/// assert_eq!(custom.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerSet {
    markers: Vec<Marker>,
}

impl MarkerSet {
    /// Build a set from markers, dropping repeated names (first one wins).
    #[must_use]
    pub fn new(markers: impl IntoIterator<Item = Marker>) -> Self {
        let mut set = Self {
            markers: Vec::new(),
        };
        set.extend(markers);
        set
    }

    /// Add markers to the set, skipping names already present.
    pub fn extend(&mut self, markers: impl IntoIterator<Item = Marker>) {
        for marker in markers {
            if !self.contains(marker.name()) {
                self.markers.push(marker);
            }
        }
    }

    /// Whether a marker with this name is in the set.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.markers.iter().any(|m| m.name() == name)
    }

    /// Iterate over the markers.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter()
    }

    /// Marker names in set order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.markers.iter().map(Marker::name).collect()
    }

    /// Number of markers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Whether the set is empty. An empty set never matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// The first marker present in `dir`, if any.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` if `dir` cannot be searched.
    pub fn find_in(&self, dir: &Path) -> Result<Option<&Marker>> {
        for marker in &self.markers {
            if marker.is_present_in(dir)? {
                return Ok(Some(marker));
            }
        }
        Ok(None)
    }
}

impl Default for MarkerSet {
    fn default() -> Self {
        Self::new([
            Marker::any(VCS_MARKER),
            Marker::directory(TOOL_MARKER),
            Marker::file(FILE_MARKER),
        ])
    }
}

impl fmt::Display for MarkerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(", "))
    }
}

impl<'a> IntoIterator for &'a MarkerSet {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}
