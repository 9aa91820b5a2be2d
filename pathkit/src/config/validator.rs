//! Configuration validation.

use std::collections::HashSet;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::normalize::{CURRENT_DIR, PARENT_DIR, SEPARATOR};
use crate::project::{Marker, MarkerSet};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathkit::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref markers) = config.markers {
            if markers.is_empty() {
                return Err(Error::Validation {
                    field: "markers".into(),
                    message: "marker list must not be empty".into(),
                });
            }
            Self::validate_marker_list("markers", markers)?;
        }

        if let Some(ref extra) = config.extra_markers {
            Self::validate_marker_list("extra_markers", extra)?;
        }

        Self::validate_marker_set(&config.marker_set())
    }

    /// Validate a marker set that is about to be used for a search.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error if the set is empty or a name is invalid.
    pub fn validate_marker_set(set: &MarkerSet) -> Result<()> {
        if set.is_empty() {
            return Err(Error::Validation {
                field: "markers".into(),
                message: "at least one marker is required".into(),
            });
        }
        for marker in set {
            Self::validate_marker_name("markers", marker.name())?;
        }
        Ok(())
    }

    fn validate_marker_list(field: &str, markers: &[Marker]) -> Result<()> {
        let mut seen = HashSet::new();
        for marker in markers {
            Self::validate_marker_name(field, marker.name())?;
            if !seen.insert(marker.name()) {
                return Err(Error::Validation {
                    field: field.into(),
                    message: format!("duplicate marker '{}'", marker.name()),
                });
            }
        }
        Ok(())
    }

    /// Validate a single marker name.
    ///
    /// A marker names one directory entry, so it must be a single non-empty
    /// segment other than `.` and `..`.
    ///
    /// # Errors
    ///
    /// Returns a `Validation` error describing the problem.
    pub fn validate_marker_name(field: &str, name: &str) -> Result<()> {
        let problem = if name.trim().is_empty() {
            Some("marker name must not be empty".to_string())
        } else if name.contains(SEPARATOR) {
            Some(format!("marker '{name}' must not contain '{SEPARATOR}'"))
        } else if name == CURRENT_DIR || name == PARENT_DIR {
            Some(format!("marker '{name}' does not name an entry"))
        } else if name.contains('\0') {
            Some("marker name must not contain NUL".to_string())
        } else {
            None
        };

        match problem {
            Some(message) => Err(Error::Validation {
                field: field.into(),
                message,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with(markers: Vec<Marker>) -> Config {
        Config {
            markers: Some(markers),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_empty_marker_list_rejected() {
        let err = ConfigValidator::validate(&config_with(vec![])).unwrap_err();
        assert!(err.to_string().contains("markers"));
    }

    #[test]
    fn test_invalid_names_rejected() {
        for name in ["", "  ", "a/b", ".", "..", "nul\0"] {
            let result = ConfigValidator::validate(&config_with(vec![Marker::any(name)]));
            assert!(result.is_err(), "{name:?} should be rejected");
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let result = ConfigValidator::validate(&config_with(vec![
            Marker::directory(".git"),
            Marker::file(".git"),
        ]));
        assert!(result.unwrap_err().to_string().contains("duplicate"));
    }

    #[test]
    fn test_extra_markers_validated() {
        let config = Config {
            extra_markers: Some(vec![Marker::file("../escape")]),
            ..Default::default()
        };
        let err = ConfigValidator::validate(&config).unwrap_err();
        assert!(err.to_string().contains("extra_markers"));
    }

    #[test]
    fn test_empty_marker_set_rejected() {
        assert!(ConfigValidator::validate_marker_set(&MarkerSet::new([])).is_err());
    }
}
