//! Lexical path normalization.
//!
//! Everything in this module works on `/`-delimited path strings and never
//! touches the filesystem. Normalization is total: every input string,
//! including the empty string, has a defined normalized form.
//!
//! A normalized path:
//! - contains no empty segments and no `.` segments
//! - contains `..` only as a leading run in a relative path
//! - starts with `/` if and only if the input did

/// The path delimiter.
pub const SEPARATOR: char = '/';

/// The normalized form of an empty relative path.
pub const CURRENT_DIR: &str = ".";

/// The parent directory segment.
pub const PARENT_DIR: &str = "..";

/// Check whether a path string is absolute (starts with the delimiter).
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::is_absolute;
///
/// assert!(is_absolute("/usr/lib"));
/// assert!(!is_absolute("usr/lib"));
/// assert!(!is_absolute(""));
/// ```
#[must_use]
pub fn is_absolute(path: &str) -> bool {
    path.starts_with(SEPARATOR)
}

/// Collapse `.` and `..` segments and redundant separators.
///
/// `..` cancels the segment before it when there is one. A `..` that has
/// nothing concrete to cancel is kept in a relative path and dropped in an
/// absolute one, since the root has no parent.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::normalize;
///
/// assert_eq!(normalize("/a/./b/../c"), "/a/c");
/// assert_eq!(normalize("a//b/"), "a/b");
/// assert_eq!(normalize("/a/../.."), "/");
/// assert_eq!(normalize("../../a"), "../../a");
/// assert_eq!(normalize("a/.."), ".");
/// assert_eq!(normalize(""), ".");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    if path.is_empty() {
        return CURRENT_DIR.to_string();
    }

    let absolute = is_absolute(path);
    let stack = collapse(path, absolute);

    if absolute {
        format!("{SEPARATOR}{}", stack.join("/"))
    } else if stack.is_empty() {
        CURRENT_DIR.to_string()
    } else {
        stack.join("/")
    }
}

/// Run the segment stack machine and return the surviving segments.
fn collapse(path: &str, absolute: bool) -> Vec<&str> {
    let mut stack: Vec<&str> = Vec::new();

    for segment in path.split(SEPARATOR) {
        match segment {
            "" | CURRENT_DIR => {}
            PARENT_DIR => match stack.last() {
                Some(&top) if top != PARENT_DIR => {
                    stack.pop();
                }
                _ if !absolute => stack.push(PARENT_DIR),
                // Above the root.
                _ => {}
            },
            other => stack.push(other),
        }
    }

    stack
}

/// Split a path into the segment list of its normalized form.
///
/// The root of an absolute path is not a segment, so `segments("/")` is
/// empty, as is `segments(".")`.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::segments;
///
/// assert_eq!(segments("/a//b/./c"), vec!["a", "b", "c"]);
/// assert_eq!(segments("../x/.."), vec![".."]);
/// assert!(segments("/").is_empty());
/// ```
#[must_use]
pub fn segments(path: &str) -> Vec<String> {
    collapse(path, is_absolute(path))
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Join `child` onto `base` and normalize the result.
///
/// An absolute `child` replaces `base` entirely.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::join;
///
/// assert_eq!(join("/srv/app", "../logs"), "/srv/logs");
/// assert_eq!(join("/srv/app", "/etc"), "/etc");
/// assert_eq!(join("a", "b"), "a/b");
/// ```
#[must_use]
pub fn join(base: &str, child: &str) -> String {
    if is_absolute(child) || base.is_empty() {
        normalize(child)
    } else {
        normalize(&format!("{base}{SEPARATOR}{child}"))
    }
}

/// Make `path` absolute against the absolute directory `base`.
///
/// Absolute input is only normalized; relative input is joined onto `base`
/// first. When `base` is itself relative, the result is relative too.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::to_absolute;
///
/// assert_eq!(to_absolute("src/../lib", "/work"), "/work/lib");
/// assert_eq!(to_absolute("/etc//hosts", "/work"), "/etc/hosts");
/// ```
#[must_use]
pub fn to_absolute(path: &str, base: &str) -> String {
    join(base, path)
}

/// Split a normalized path into its parent and final segment.
///
/// Returns `None` when there is no final segment to split off: the root,
/// `.`, or a path ending in `..`.
///
/// # Examples
///
/// ```
/// use pathkit::path::normalize::split_leaf;
///
/// assert_eq!(split_leaf("/a/b"), Some(("/a".to_string(), "b".to_string())));
/// assert_eq!(split_leaf("/a"), Some(("/".to_string(), "a".to_string())));
/// assert_eq!(split_leaf("a"), Some((".".to_string(), "a".to_string())));
/// assert_eq!(split_leaf("/"), None);
/// ```
#[must_use]
pub fn split_leaf(path: &str) -> Option<(String, String)> {
    let normalized = normalize(path);
    let absolute = is_absolute(&normalized);
    let mut parts = collapse(&normalized, absolute);

    let leaf = match parts.pop() {
        Some(leaf) if leaf != PARENT_DIR => leaf.to_string(),
        _ => return None,
    };

    let parent = if absolute {
        format!("{SEPARATOR}{}", parts.join("/"))
    } else if parts.is_empty() {
        CURRENT_DIR.to_string()
    } else {
        parts.join("/")
    };

    Some((parent, leaf))
}
