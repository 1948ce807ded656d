//! Error types for the settings crate.
//!
//! Reading and writing a config file can fail on I/O, on the file's
//! syntax, or on a value the importer cannot work with.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or saving a [`Config`](crate::Config).
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The config file could not be read.
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file could not be written.
    #[error("Failed to write config file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Cannot encode config as TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// The file parsed but holds an unusable value.
    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

/// A config value or file name the importer cannot use.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Only `.toml` and `.json` files are understood.
    #[error("Unsupported config file extension '{extension}' (expected .toml or .json)")]
    UnsupportedFormat { extension: String },

    #[error("'{key}' must be {expected}, got {value}")]
    OutOfRange {
        key: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::UnsupportedFormat {
            extension: "yaml".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported config file extension 'yaml' (expected .toml or .json)"
        );

        let err = ConfigError::OutOfRange {
            key: "tessellation.arc_resolution",
            value: 0.0,
            expected: "a positive finite number",
        };
        assert_eq!(
            err.to_string(),
            "'tessellation.arc_resolution' must be a positive finite number, got 0"
        );
    }

    #[test]
    fn test_error_conversion() {
        let settings_err: SettingsError = ConfigError::UnsupportedFormat {
            extension: "ini".to_string(),
        }
        .into();
        assert!(matches!(settings_err, SettingsError::Invalid(_)));

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let settings_err: SettingsError = json_err.into();
        assert!(matches!(settings_err, SettingsError::Json(_)));
    }

    #[test]
    fn test_read_error_display_includes_path() {
        let err = SettingsError::Read {
            path: PathBuf::from("/tmp/missing.toml"),
            source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read config file /tmp/missing.toml: file not found"
        );
    }
}
