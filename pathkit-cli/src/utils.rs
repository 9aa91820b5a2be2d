//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: global options,
//! tilde expansion of path arguments, and configuration loading.

use crate::error::CliError;
use pathkit::project::Marker;
use pathkit::{Config, ConfigBuilder};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // Verbosity is consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Directory to run in instead of the inherited working directory.
    pub directory: Option<PathBuf>,

    /// Additional configuration file.
    pub config: Option<PathBuf>,
}

/// Expand a leading `~` to the home directory.
///
/// Only `~` and `~/...` are expanded; `~user` forms and every other argument
/// are returned unchanged.
pub fn expand_tilde(arg: &str) -> Result<String, CliError> {
    let rest = match arg.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => return Ok(arg.to_string()),
    };

    let home = home::home_dir().ok_or_else(|| {
        CliError::InvalidArguments(format!("cannot expand {arg}: no home directory"))
    })?;
    let home = home.to_str().ok_or_else(|| {
        CliError::InvalidArguments("home directory is not valid UTF-8".to_string())
    })?;

    Ok(format!("{home}{rest}"))
}

/// Expand an optional path argument.
pub fn expand_optional(arg: Option<&str>) -> Result<Option<String>, CliError> {
    arg.map(expand_tilde).transpose()
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. `--marker` names given on the command line (highest priority)
/// 2. Environment variables
/// 3. `--config` file, then the user configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, markers: &[String]) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref path) = global.config {
        let expanded = expand_tilde(&path.to_string_lossy())?;
        builder = builder.with_config_file(expanded);
    }

    if !markers.is_empty() {
        builder = builder.with_markers(markers.iter().map(Marker::any));
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}
