//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, IsSubpathCommand, NormalizeCommand, ProjectRootCommand,
    RelationshipCommand, RelativeCommand, ResolveCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for normalizing, resolving and comparing paths.
#[derive(Parser)]
#[command(name = "pathkit")]
#[command(
    version,
    about = "Normalize, resolve and compare filesystem paths",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Run as if started in DIR
    #[arg(short = 'C', long, value_name = "DIR", global = true)]
    pub directory: Option<PathBuf>,

    /// Load an additional configuration file
    #[arg(long, value_name = "FILE", global = true, env = "PATHKIT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Lexically normalize a path
    Normalize(NormalizeCommand),

    /// Resolve a path to its absolute canonical form
    Resolve(ResolveCommand),

    /// Print the relative path between two absolute paths
    Relative(RelativeCommand),

    /// Test whether one path lies inside another
    IsSubpath(IsSubpathCommand),

    /// Describe how two paths relate
    Relationship(RelationshipCommand),

    /// Find the nearest project root
    ProjectRoot(ProjectRootCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
