//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PATHKIT_*` environment variables that
//! override configuration file values. Only the configuration layer reads
//! the environment; the path functions themselves never do.

use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use crate::project::Marker;
use std::env;

/// Replaces the configured marker list (comma-separated names).
pub const MARKERS_ENV: &str = "PATHKIT_MARKERS";

/// Appends to the extra marker list (comma-separated names).
pub const EXTRA_MARKERS_ENV: &str = "PATHKIT_EXTRA_MARKERS";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathkit::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Markers named in the environment match any kind of entry.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but holds no usable names, or
    /// a name fails validation.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(value) = env::var(MARKERS_ENV) {
            config.markers = Some(Self::parse_marker_list(MARKERS_ENV, &value)?);
        }

        if let Ok(value) = env::var(EXTRA_MARKERS_ENV) {
            let extra = Self::parse_marker_list(EXTRA_MARKERS_ENV, &value)?;
            let target = config.extra_markers.get_or_insert_with(Vec::new);
            ConfigMerger::append_markers(target, extra);
        }

        Ok(())
    }

    /// Parse a comma-separated list of marker names.
    ///
    /// Whitespace around names is trimmed and empty entries are skipped.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if no names remain or one is invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathkit::config::EnvironmentConfig;
    /// use pathkit::project::Marker;
    ///
    /// let markers = EnvironmentConfig::parse_marker_list("X", ".git, Cargo.toml,").unwrap();
    /// assert_eq!(markers, vec![Marker::any(".git"), Marker::any("Cargo.toml")]);
    /// ```
    pub fn parse_marker_list(var: &str, value: &str) -> Result<Vec<Marker>> {
        let markers: Vec<Marker> = value
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Marker::any)
            .collect();

        if markers.is_empty() {
            return Err(Error::Validation {
                field: var.into(),
                message: "must list at least one marker name".into(),
            });
        }

        for marker in &markers {
            ConfigValidator::validate_marker_name(var, marker.name())?;
        }

        Ok(markers)
    }
}
