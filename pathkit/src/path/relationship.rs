//! Path containment and relationship checking.
//!
//! This module answers whether one path lies inside another, and more
//! generally how two paths relate in the directory hierarchy. Everything
//! here is lexical: both sides are normalized, never resolved.

use std::fmt;

use crate::path::normalize::{self, SEPARATOR};

/// Check whether `child` is `parent` itself or lies beneath it.
///
/// Both paths are normalized, then compared with a trailing delimiter
/// appended to each, so that `/foo` does not claim `/foobar`.
///
/// # Examples
///
/// ```
/// use pathkit::path::relationship::is_subpath;
///
/// assert!(is_subpath("/foo", "/foo"));
/// assert!(is_subpath("/foo", "/foo/bar"));
/// assert!(is_subpath("/", "/etc"));
/// assert!(!is_subpath("/foo", "/foobar"));
/// assert!(!is_subpath("/foo/bar", "/foo"));
/// ```
#[must_use]
pub fn is_subpath(parent: &str, child: &str) -> bool {
    let parent = with_trailing_separator(normalize::normalize(parent));
    let child = with_trailing_separator(normalize::normalize(child));
    child.starts_with(&parent)
}

fn with_trailing_separator(mut path: String) -> String {
    if !path.ends_with(SEPARATOR) {
        path.push(SEPARATOR);
    }
    path
}

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use pathkit::path::PathRelationship;
///
/// assert_eq!(
///     PathRelationship::between("/home/user", "/home/user/project"),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same after normalization.
    Same,

    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::path::PathRelationship;
    ///
    /// assert_eq!(PathRelationship::between("/a", "/a/b"), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between("/a/b", "/a"), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between("/a/", "/a"), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between("/a", "/ab"), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &str, path2: &str) -> Self {
        match (is_subpath(path1, path2), is_subpath(path2, path1)) {
            (true, true) => Self::Same,
            (true, false) => Self::Ancestor,
            (false, true) => Self::Descendant,
            (false, false) => Self::Unrelated,
        }
    }

    /// Check if the relationship is hierarchical (not unrelated).
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::path::PathRelationship;
    ///
    /// assert!(PathRelationship::Ancestor.is_hierarchical());
    /// assert!(PathRelationship::Same.is_hierarchical());
    /// assert!(!PathRelationship::Unrelated.is_hierarchical());
    /// ```
    #[must_use]
    pub fn is_hierarchical(&self) -> bool {
        matches!(self, Self::Ancestor | Self::Descendant | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &str, path2: &str) -> String {
        match self {
            Self::Ancestor => format!("{path1} is an ancestor of {path2}"),
            Self::Descendant => format!("{path1} is a descendant of {path2}"),
            Self::Same => format!("{path1} and {path2} are the same path"),
            Self::Unrelated => format!("{path1} and {path2} are unrelated paths"),
        }
    }
}

impl fmt::Display for PathRelationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ancestor => write!(f, "ancestor"),
            Self::Descendant => write!(f, "descendant"),
            Self::Same => write!(f, "same"),
            Self::Unrelated => write!(f, "unrelated"),
        }
    }
}
