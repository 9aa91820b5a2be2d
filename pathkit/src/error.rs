//! Error types for the pathkit library.
//!
//! This module provides the error hierarchy for all fallible operations in
//! the library, using `thiserror` for ergonomic error handling. Lexical
//! normalization never fails and so never produces one of these.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathkit error.
///
/// # Examples
///
/// ```
/// use pathkit::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("/tmp".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathkit library.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-facing contract was violated, such as passing a relative
    /// path where an absolute one is required.
    #[error("invalid argument {path}: {reason}")]
    InvalidArgument {
        /// The offending path, as given.
        path: String,
        /// Why the argument was rejected.
        reason: String,
    },

    /// No project root marker was found walking up from `start`.
    #[error("no project root found above {start} (looked for {markers})")]
    NotFound {
        /// The resolved directory the walk started from.
        start: String,
        /// The marker names that were searched for, comma-separated.
        markers: String,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration value failed validation.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates that no project root was found.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    ///
    /// let err = Error::NotFound {
    ///     start: "/tmp/x".to_string(),
    ///     markers: ".git".to_string(),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is a rejected argument.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }

    /// Map an I/O error raised while touching `path` onto the library error.
    pub(crate) fn from_io(path: &std::path::Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            _ => Self::Io(err),
        }
    }
}
