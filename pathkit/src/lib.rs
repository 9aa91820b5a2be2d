#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathkit
//!
//! A library for resolving and comparing filesystem paths.
//!
//! Paths are plain `/`-delimited strings. Normalization is purely lexical;
//! resolution consults the filesystem to follow symlinks while still
//! accepting targets that do not exist yet.
//!
//! ## Core Operations
//!
//! - [`normalize`]: lexical cleanup of `.`, `..`, and repeated separators
//! - [`resolve`]: absolute canonical form, tolerant of missing targets
//! - [`relative`]: the path leading from one absolute path to another
//! - [`is_subpath`]: segment-wise containment test
//! - [`find_project_root`]: walk upward to the nearest marker directory
//!
//! ## Examples
//!
//! ```
//! use pathkit::{is_subpath, normalize, relative};
//!
//! assert_eq!(normalize("/srv//app/./logs/../data"), "/srv/app/data");
//! assert_eq!(relative("/srv/app", "/srv/lib/util").unwrap(), "../lib/util");
//! assert!(is_subpath("/srv/app", "/srv/app/data"));
//! assert!(!is_subpath("/srv/app", "/srv/application"));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod path;
pub mod project;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::normalize::normalize;
pub use path::relationship::is_subpath;
pub use path::relative::relative;
pub use path::resolver::resolve;
pub use path::{
    CurrentDirGuard, NormalizedPath, PathRelationship, PathResolver, ResolvedPath, TargetKind,
};
pub use project::{find_project_root, Marker, MarkerKind, MarkerSet, ProjectRoot, ProjectRootLocator};
