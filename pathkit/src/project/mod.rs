//! Project root discovery.
//!
//! Starting from a directory, walk up one level at a time until a directory
//! containing one of the configured markers is found. The walk includes the
//! filesystem root; passing it without a match is an error, never a guess.
//!
//! ```no_run
//! use pathkit::project::find_project_root;
//!
//! let root = find_project_root(None).unwrap();
//! println!("{root}");
//! ```

mod locator;
mod marker;

pub use locator::{find_project_root, ProjectRoot, ProjectRootLocator};
pub use marker::{Marker, MarkerKind, MarkerSet, FILE_MARKER, TOOL_MARKER, VCS_MARKER};
