//! Builder assembling the final configuration from every source.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::project::Marker;

/// Builds a [`Config`] with the standard precedence.
///
/// # Examples
///
/// ```
/// use pathkit::config::ConfigBuilder;
/// use pathkit::project::Marker;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_extra_markers([Marker::file("go.mod")])
///     .build()
///     .unwrap();
///
/// assert!(config.marker_set().contains("go.mod"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_file: Option<PathBuf>,
    config_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that reads files and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an explicit configuration file on top of the user config.
    #[must_use]
    pub fn with_config_file(mut self, path: impl AsRef<Path>) -> Self {
        self.config_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Look for the user config in `dir` instead of `~/.pathkit`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.config_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Ignore configuration files entirely.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `PATHKIT_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply a programmatic configuration with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        let overrides = self.overrides.get_or_insert_with(Config::default);
        ConfigMerger::merge_into(overrides, &config);
        self
    }

    /// Replace the marker list.
    #[must_use]
    pub fn with_markers(self, markers: impl IntoIterator<Item = Marker>) -> Self {
        self.with_config(Config {
            markers: Some(markers.into_iter().collect()),
            ..Default::default()
        })
    }

    /// Add markers on top of the effective list.
    #[must_use]
    pub fn with_extra_markers(self, markers: impl IntoIterator<Item = Marker>) -> Self {
        self.with_config(Config {
            extra_markers: Some(markers.into_iter().collect()),
            ..Default::default()
        })
    }

    /// Build the final configuration.
    ///
    /// Sources are applied lowest first: built-in defaults, the user file,
    /// the explicit file, the environment, then programmatic overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an environment variable
    /// is malformed, or the merged result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let sources =
                ConfigLoader::load_all(self.config_file.as_deref(), self.config_dir.as_deref())?;
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        log::debug!("effective markers: {}", config.marker_set());

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::{EXTRA_MARKERS_ENV, MARKERS_ENV};
    use crate::config::loader::CONFIG_FILE_NAME;
    use crate::error::Error;
    use serial_test::serial;
    use std::{env, fs};
    use tempfile::tempdir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_with_markers_replaces() {
        let config = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_markers([Marker::directory(".hg")])
            .build()
            .unwrap();
        assert_eq!(config.marker_set().names(), vec![".hg"]);
    }

    #[test]
    fn test_empty_override_fails_validation() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_markers([])
            .build();
        assert!(matches!(result, Err(Error::Validation { .. })));
    }

    #[test]
    #[serial]
    fn test_precedence_file_env_override() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "markers:\n  - name: .hg\nextra_markers:\n  - name: go.mod\n",
        )
        .unwrap();

        let old_markers = env::var(MARKERS_ENV).ok();
        let old_extra = env::var(EXTRA_MARKERS_ENV).ok();
        env::remove_var(MARKERS_ENV);
        env::set_var(EXTRA_MARKERS_ENV, "Makefile");

        let result = ConfigBuilder::new()
            .with_config_dir(dir.path())
            .with_extra_markers([Marker::file("pyproject.toml")])
            .build();

        match old_markers {
            Some(v) => env::set_var(MARKERS_ENV, v),
            None => env::remove_var(MARKERS_ENV),
        }
        match old_extra {
            Some(v) => env::set_var(EXTRA_MARKERS_ENV, v),
            None => env::remove_var(EXTRA_MARKERS_ENV),
        }

        let config = result.unwrap();
        assert_eq!(
            config.marker_set().names(),
            vec![".hg", "go.mod", "Makefile", "pyproject.toml"]
        );
    }
}
