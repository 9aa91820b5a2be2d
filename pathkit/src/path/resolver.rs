//! Path resolution.
//!
//! This module provides the `PathResolver` type, which turns a possibly
//! relative, possibly nonexistent path into an absolute canonical path.
//!
//! Resolution probes the filesystem once to classify the target as a
//! [`TargetKind`] and then dispatches on it:
//!
//! | Kind          | Result                                           |
//! |---------------|--------------------------------------------------|
//! | `Directory`   | the canonical directory                          |
//! | `File`        | canonical parent + base name                     |
//! | `MissingLeaf` | canonical parent + base name                     |
//! | `Missing`     | lexical normalization of the absolute form       |
//!
//! The `Missing` case is best effort: nothing about the path is checked
//! against the filesystem, so symlinks in it are not resolved.

use crate::error::{Error, Result};
use crate::path::canonicalize;
use crate::path::cwd;
use crate::path::normalize;
use crate::path::types::{ResolvedPath, TargetKind};

/// Resolves paths to absolute canonical form.
///
/// Relative inputs are resolved against the configured base directory, or
/// the current working directory when no base is set. The resolver never
/// changes the working directory.
///
/// # Examples
///
/// ```no_run
/// use pathkit::path::{PathResolver, TargetKind};
///
/// let resolver = PathResolver::new();
///
/// let home = resolver.resolve("/tmp").unwrap();
/// assert_eq!(home.kind(), TargetKind::Directory);
///
/// let planned = resolver.resolve("/tmp/not-created-yet").unwrap();
/// assert_eq!(planned.kind(), TargetKind::MissingLeaf);
/// ```
#[derive(Debug, Clone, Default)]
pub struct PathResolver {
    /// Directory that relative inputs are joined onto.
    base: Option<String>,
}

impl PathResolver {
    /// Create a resolver that resolves relative paths against the CWD.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative paths against `base` instead of the CWD.
    ///
    /// `base` must be absolute; it is normalized but not canonicalized. A
    /// relative base is rejected when the resolver is used.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::path::PathResolver;
    ///
    /// let resolver = PathResolver::new().with_base("/definitely/not/here");
    /// let resolved = resolver.resolve("a/../b").unwrap();
    /// assert_eq!(resolved.path(), "/definitely/not/here/b");
    /// ```
    #[must_use]
    pub fn with_base(mut self, base: impl AsRef<str>) -> Self {
        self.base = Some(normalize::normalize(base.as_ref()));
        self
    }

    /// The configured base directory, if any.
    #[must_use]
    pub fn base(&self) -> Option<&str> {
        self.base.as_deref()
    }

    /// Resolve `path` to an absolute canonical path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the configured base is not absolute
    /// - the current directory is needed and cannot be read
    /// - a probe or canonicalization hits a permission failure
    /// - another I/O error occurs while canonicalizing
    pub fn resolve(&self, path: &str) -> Result<ResolvedPath> {
        match &self.base {
            Some(base) => self.resolve_from(path, base),
            None if normalize::is_absolute(path) => self.resolve_from(path, "/"),
            None => {
                let cwd = cwd::current_dir_string()?;
                self.resolve_from(path, &cwd)
            }
        }
    }

    /// Resolve `path`, joining relative input onto `base`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `base` is not absolute, otherwise the
    /// same as [`PathResolver::resolve`].
    pub fn resolve_from(&self, path: &str, base: &str) -> Result<ResolvedPath> {
        if !normalize::is_absolute(base) {
            return Err(Error::InvalidArgument {
                path: base.to_string(),
                reason: "base directory must be absolute".to_string(),
            });
        }

        let absolute = normalize::to_absolute(path, base);
        let kind = Self::classify(&absolute)?;
        log::debug!("resolving {path} as {kind} ({absolute})");

        let resolved = match kind {
            TargetKind::Directory => canonicalize::canonical_dir(&absolute)?,
            TargetKind::File | TargetKind::MissingLeaf => {
                match normalize::split_leaf(&absolute) {
                    Some((parent, leaf)) => canonicalize::canonical_join(&parent, &leaf)?,
                    None => canonicalize::canonical_dir(&absolute)?,
                }
            }
            TargetKind::Missing => absolute,
        };

        Ok(ResolvedPath::new(resolved, path.to_string(), kind))
    }

    /// Classify an absolute, normalized path.
    ///
    /// # Errors
    ///
    /// Returns `PermissionDenied` if the target or its parent cannot be
    /// inspected.
    pub fn classify(absolute: &str) -> Result<TargetKind> {
        match canonicalize::probe(absolute)? {
            Some(true) => return Ok(TargetKind::Directory),
            Some(false) => return Ok(TargetKind::File),
            None => {}
        }

        let Some((parent, _)) = normalize::split_leaf(absolute) else {
            return Ok(TargetKind::Missing);
        };

        match canonicalize::probe(&parent)? {
            Some(true) => Ok(TargetKind::MissingLeaf),
            _ => Ok(TargetKind::Missing),
        }
    }
}

/// Resolve `path` against the current working directory.
///
/// Convenience for `PathResolver::new().resolve(path)` returning only the
/// resolved string.
///
/// # Errors
///
/// Same as [`PathResolver::resolve`].
pub fn resolve(path: &str) -> Result<String> {
    PathResolver::new().resolve(path).map(ResolvedPath::into_string)
}
