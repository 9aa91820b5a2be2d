//! Library exports for pathkit-cli.
//!
//! This module exports the CLI structure for use by documentation tooling
//! such as man page and completion generators.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

// Re-export CLI for documentation tooling
pub use cli::Cli;
