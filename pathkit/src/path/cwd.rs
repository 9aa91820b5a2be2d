//! Scoped changes to the process working directory.
//!
//! The working directory is process-wide state. Code that needs to run
//! "inside" another directory acquires a [`CurrentDirGuard`], does its
//! work, and lets the guard put the original directory back when it is
//! dropped, whether the scope ends normally, through `?`, or by unwinding.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::canonicalize;

/// Restores the previous working directory when dropped.
///
/// # Examples
///
/// ```no_run
/// use pathkit::path::CurrentDirGuard;
///
/// let before = std::env::current_dir().unwrap();
/// {
///     let _guard = CurrentDirGuard::enter("/tmp").unwrap();
///     // relative paths now resolve against /tmp
/// }
/// assert_eq!(std::env::current_dir().unwrap(), before);
/// ```
#[derive(Debug)]
pub struct CurrentDirGuard {
    previous: PathBuf,
}

impl CurrentDirGuard {
    /// Change into `dir`, remembering the current directory.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `dir` is not an existing directory, or an
    /// I/O error if the current directory cannot be read or changed.
    pub fn enter(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::InvalidArgument {
                path: dir.to_string_lossy().into_owned(),
                reason: "not an existing directory".to_string(),
            });
        }

        let previous = env::current_dir()?;
        env::set_current_dir(dir).map_err(|e| Error::from_io(dir, e))?;
        log::debug!(
            "entered {} (was {})",
            dir.display(),
            previous.display()
        );
        Ok(Self { previous })
    }

    /// The directory that will be restored on drop.
    #[must_use]
    pub fn previous(&self) -> &Path {
        &self.previous
    }
}

impl Drop for CurrentDirGuard {
    fn drop(&mut self) {
        if let Err(e) = env::set_current_dir(&self.previous) {
            log::warn!(
                "failed to restore working directory {}: {e}",
                self.previous.display()
            );
        }
    }
}

/// Run `f` with the working directory temporarily set to `dir`.
///
/// # Errors
///
/// Returns any error from entering `dir`, or the error returned by `f`.
/// The original directory is restored in every case.
pub fn with_current_dir<T, F>(dir: impl AsRef<Path>, f: F) -> Result<T>
where
    F: FnOnce() -> Result<T>,
{
    let _guard = CurrentDirGuard::enter(dir)?;
    f()
}

/// The current working directory as a canonical path string.
///
/// # Errors
///
/// Returns an error if the working directory cannot be read (for example,
/// it was deleted) or is not valid UTF-8.
pub fn current_dir_string() -> Result<String> {
    let cwd = env::current_dir()?;
    let canonical = canonicalize::canonicalize(&cwd)?;
    canonicalize::path_to_string(&canonical)
}
