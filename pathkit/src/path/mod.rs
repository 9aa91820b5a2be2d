//! Path handling: normalization, resolution, and relationships.
//!
//! All functions take and return `/`-delimited path strings.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Lexical cleanup only: `.` segments and redundant separators disappear,
//! `..` cancels the segment before it. The filesystem is never consulted
//! and normalization never fails.
//!
//! ## Resolution
//!
//! Resolution produces an absolute path with symlinks followed, wherever
//! the filesystem can vouch for it. A target that does not exist yet is
//! resolved through its parent; when the parent is missing as well, the
//! resolver falls back to normalization.
//!
//! ## Relationships
//!
//! [`relative`](relative::relative) computes the path from one absolute
//! path to another, and [`is_subpath`](relationship::is_subpath) tests
//! containment.
//!
//! # Examples
//!
//! ```
//! use pathkit::path::{normalize, relative, relationship};
//!
//! assert_eq!(normalize::normalize("/a/./b/../c"), "/a/c");
//! assert_eq!(relative::relative("/a/b", "/a/c/d").unwrap(), "../c/d");
//! assert!(relationship::is_subpath("/a", "/a/b"));
//! ```

pub mod canonicalize;
pub mod cwd;
pub mod normalize;
pub mod relationship;
pub mod relative;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use cwd::{with_current_dir, CurrentDirGuard};
pub use relationship::PathRelationship;
pub use resolver::PathResolver;
pub use types::{NormalizedPath, ResolvedPath, TargetKind};
