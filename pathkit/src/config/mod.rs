//! Configuration system for pathkit.
//!
//! Configuration only decides which markers identify a project root. The
//! path functions take their inputs explicitly and never consult it.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PATHKIT_MARKERS`, `PATHKIT_EXTRA_MARKERS`)
//! 3. An explicit configuration file (`ConfigBuilder::with_config_file`)
//! 4. User config (`~/.pathkit/config.yaml`)
//! 5. Built-in defaults
//!
//! `markers` replaces the list from lower sources; `extra_markers`
//! accumulates.
//!
//! # Examples
//!
//! ```
//! use pathkit::config::{Config, ConfigBuilder};
//! use pathkit::project::Marker;
//!
//! let custom = Config {
//!     markers: Some(vec![Marker::file("Cargo.toml")]),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.marker_set().names(), vec!["Cargo.toml"]);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
