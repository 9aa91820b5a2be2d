//! Core types for path handling.
//!
//! This module defines the typed forms a path string takes as it moves
//! through the library: a normalized path, the classification of a resolve
//! target, and a resolved path carrying how it was produced.

use std::fmt;

use serde::Serialize;

use crate::path::normalize;

/// A path string known to be in normalized form.
///
/// The only way to build one is through normalization, so holders can rely
/// on the normalized-form invariant without re-checking it.
///
/// # Examples
///
/// ```
/// use pathkit::path::NormalizedPath;
///
/// let path = NormalizedPath::new("/srv//app/./logs/..");
/// assert_eq!(path.as_str(), "/srv/app");
/// assert!(path.is_absolute());
/// assert_eq!(path.segments(), vec!["srv", "app"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NormalizedPath(String);

impl NormalizedPath {
    /// Normalize `path` and wrap the result.
    #[must_use]
    pub fn new(path: &str) -> Self {
        Self(normalize::normalize(path))
    }

    /// Get the normalized string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the path is absolute.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        normalize::is_absolute(&self.0)
    }

    /// The segment list of this path, root excluded.
    #[must_use]
    pub fn segments(&self) -> Vec<String> {
        normalize::segments(&self.0)
    }

    /// Convert into the underlying `String`.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NormalizedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NormalizedPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

/// What a resolve target turned out to be on the filesystem.
///
/// The resolver probes the filesystem once, classifies the target into one
/// of these, and then dispatches on the classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    /// The target is an existing directory.
    Directory,
    /// The target exists and is not a directory.
    File,
    /// The target does not exist, but its parent directory does.
    MissingLeaf,
    /// Neither the target nor its parent directory exists.
    Missing,
}

impl TargetKind {
    /// Whether resolving this kind of target goes through the filesystem.
    ///
    /// Only [`TargetKind::Missing`] falls back to purely lexical handling.
    #[must_use]
    pub fn is_canonical(self) -> bool {
        !matches!(self, Self::Missing)
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory => write!(f, "directory"),
            Self::File => write!(f, "file"),
            Self::MissingLeaf => write!(f, "missing-leaf"),
            Self::Missing => write!(f, "missing"),
        }
    }
}

/// A fully resolved path with metadata about the resolution process.
///
/// # Examples
///
/// ```
/// use pathkit::path::{ResolvedPath, TargetKind};
///
/// let resolved = ResolvedPath::new(
///     "/home/user/project".to_string(),
///     "project".to_string(),
///     TargetKind::Directory,
/// );
/// assert_eq!(resolved.path(), "/home/user/project");
/// assert!(resolved.was_canonicalized());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ResolvedPath {
    /// The resolved absolute path.
    path: String,
    /// The path as the caller gave it.
    original: String,
    /// How the target was classified.
    kind: TargetKind,
}

impl ResolvedPath {
    /// Create a new resolved path.
    #[must_use]
    pub fn new(path: String, original: String, kind: TargetKind) -> Self {
        Self {
            path,
            original,
            kind,
        }
    }

    /// Get the resolved path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Get the path as originally given.
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Get the target classification.
    #[must_use]
    pub fn kind(&self) -> TargetKind {
        self.kind
    }

    /// Whether the filesystem was consulted to canonicalize the path.
    #[must_use]
    pub fn was_canonicalized(&self) -> bool {
        self.kind.is_canonical()
    }

    /// Convert into the resolved path string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.path
    }
}

impl fmt::Display for ResolvedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
