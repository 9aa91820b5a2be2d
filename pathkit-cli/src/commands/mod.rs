//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `normalize`: Lexical normalization
//! - `resolve`: Canonical resolution, tolerant of missing targets
//! - `relative`: Relative path between two absolute paths
//! - `is_subpath`: Containment test reported through the exit status
//! - `relationship`: Ancestor/descendant/same/unrelated classification
//! - `project_root`: Nearest directory holding a project marker
//! - `completions`: Shell completion scripts

pub mod completions;
pub mod is_subpath;
pub mod normalize;
pub mod project_root;
pub mod relationship;
pub mod relative;
pub mod resolve;

pub use completions::CompletionsCommand;
pub use is_subpath::IsSubpathCommand;
pub use normalize::NormalizeCommand;
pub use project_root::ProjectRootCommand;
pub use relationship::RelationshipCommand;
pub use relative::RelativeCommand;
pub use resolve::ResolveCommand;
