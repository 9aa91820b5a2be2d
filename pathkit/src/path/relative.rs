//! Relative path computation.
//!
//! Computes the shortest relative path between two absolute paths by
//! eliminating their common leading segments. The computation is purely
//! lexical; resolve both inputs first if symlinks matter.

use crate::error::{Error, Result};
use crate::path::normalize::{self, CURRENT_DIR, PARENT_DIR};

/// Compute the relative path that leads from `from` to `to`.
///
/// Both inputs are normalized first. The result is one `..` for every
/// segment of `from` past the common prefix, followed by the segments of
/// `to` past the common prefix. Identical paths give `.`.
///
/// # Errors
///
/// Returns `InvalidArgument` if either input is not absolute after
/// normalization. The base a relative input was meant against is not
/// guessed.
///
/// # Examples
///
/// ```
/// use pathkit::path::relative::relative;
///
/// assert_eq!(relative("/a/b/c", "/a/d").unwrap(), "../../d");
/// assert_eq!(relative("/a", "/a/b/c").unwrap(), "b/c");
/// assert_eq!(relative("/a/b", "/a/b/").unwrap(), ".");
/// assert!(relative("rel/path", "/abs/path").is_err());
/// ```
pub fn relative(from: &str, to: &str) -> Result<String> {
    let from_segments = absolute_segments(from)?;
    let to_segments = absolute_segments(to)?;

    let common = common_prefix_len(&from_segments, &to_segments);

    let parts: Vec<&str> = std::iter::repeat(PARENT_DIR)
        .take(from_segments.len() - common)
        .chain(to_segments[common..].iter().map(String::as_str))
        .collect();

    if parts.is_empty() {
        Ok(CURRENT_DIR.to_string())
    } else {
        Ok(parts.join("/"))
    }
}

/// Length of the longest shared leading run of segments.
///
/// # Examples
///
/// ```
/// use pathkit::path::relative::common_prefix_len;
///
/// let a = ["usr", "lib", "x"];
/// let b = ["usr", "lib", "y"];
/// assert_eq!(common_prefix_len(&a, &b), 2);
/// ```
#[must_use]
pub fn common_prefix_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}

/// The longest common ancestor of two absolute paths.
///
/// # Errors
///
/// Returns `InvalidArgument` if either input is not absolute.
///
/// # Examples
///
/// ```
/// use pathkit::path::relative::common_ancestor;
///
/// assert_eq!(common_ancestor("/srv/app/logs", "/srv/app/bin").unwrap(), "/srv/app");
/// assert_eq!(common_ancestor("/etc", "/usr").unwrap(), "/");
/// ```
pub fn common_ancestor(a: &str, b: &str) -> Result<String> {
    let a_segments = absolute_segments(a)?;
    let b_segments = absolute_segments(b)?;
    let common = common_prefix_len(&a_segments, &b_segments);
    Ok(format!("/{}", a_segments[..common].join("/")))
}

fn absolute_segments(path: &str) -> Result<Vec<String>> {
    let normalized = normalize::normalize(path);
    if !normalize::is_absolute(&normalized) {
        return Err(Error::InvalidArgument {
            path: path.to_string(),
            reason: "path must be absolute".to_string(),
        });
    }
    Ok(normalize::segments(&normalized))
}
