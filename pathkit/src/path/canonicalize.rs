//! Path canonicalization functions.
//!
//! Canonicalization asks the filesystem for the real, symlink-free location
//! of an existing directory. None of these functions change the process
//! working directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::normalize::{self, SEPARATOR};

/// Canonicalize an existing path by following every symlink in it.
///
/// # Errors
///
/// Returns `PermissionDenied` if a component cannot be traversed, and an
/// I/O error for anything else, including a path that does not exist.
///
/// # Examples
///
/// ```no_run
/// use pathkit::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| Error::from_io(path, e))
}

/// Canonicalize an existing directory and return it as a path string.
///
/// # Errors
///
/// Returns an error if canonicalization fails or the canonical path is not
/// valid UTF-8.
pub fn canonical_dir(dir: &str) -> Result<String> {
    let canonical = canonicalize(Path::new(dir))?;
    path_to_string(&canonical)
}

/// Canonicalize `parent` and append `leaf` to the result.
///
/// `leaf` itself need not exist, which is what lets callers resolve a path
/// they are about to create.
///
/// # Errors
///
/// Returns an error if `parent` cannot be canonicalized.
pub fn canonical_join(parent: &str, leaf: &str) -> Result<String> {
    let base = canonical_dir(parent)?;
    if base.ends_with(SEPARATOR) {
        Ok(format!("{base}{leaf}"))
    } else {
        Ok(format!("{base}{SEPARATOR}{leaf}"))
    }
}

/// Convert a filesystem path into a `/`-delimited string.
///
/// # Errors
///
/// Returns `InvalidArgument` if the path is not valid UTF-8.
pub fn path_to_string(path: &Path) -> Result<String> {
    path.to_str()
        .map(normalize::normalize)
        .ok_or_else(|| Error::InvalidArgument {
            path: path.to_string_lossy().into_owned(),
            reason: "path contains invalid UTF-8".to_string(),
        })
}

/// Probe a path, following symlinks.
///
/// Returns `Ok(Some(is_dir))` when the path exists and `Ok(None)` when it
/// cannot be found. Only a permission failure is reported as an error;
/// other lookup failures (a file used as a directory, a symlink loop) mean
/// the path does not name anything usable and count as absent.
pub(crate) fn probe(path: &str) -> Result<Option<bool>> {
    match fs::metadata(path) {
        Ok(meta) => Ok(Some(meta.is_dir())),
        Err(e) if e.kind() == ErrorKind::PermissionDenied => Err(Error::PermissionDenied {
            path: PathBuf::from(path),
        }),
        Err(e) => {
            log::debug!("treating {path} as absent: {e}");
            Ok(None)
        }
    }
}
