//! Configuration for gcodeview
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats; the default location is
//! platform-specific (`<config dir>/gcodeview/config.toml`).
//!
//! Configuration is organized into sections:
//! - Tessellation settings (arc chord length, full-circle tolerance)
//! - Output settings (JSON formatting)

use crate::error::{ConfigError, SettingsError, SettingsResult};
use gcodeview_core::constants::{ARC_RESOLUTION, FULL_CIRCLE_TOLERANCE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Arc tessellation settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TessellationSettings {
    /// Maximum chord length between tessellated arc points, in machine units
    pub arc_resolution: f64,
    /// Per-axis distance under which an arc is treated as a full circle
    pub full_circle_tolerance: f64,
}

impl TessellationSettings {
    /// Reject a chord length the tessellator cannot step with, or a
    /// tolerance that is negative or not finite
    pub fn validate(&self) -> Result<(), ConfigError> {
        let resolution = self.arc_resolution;
        if !resolution.is_finite() || resolution <= 0.0 {
            return Err(ConfigError::OutOfRange {
                key: "tessellation.arc_resolution",
                value: resolution,
                expected: "a positive finite number",
            });
        }

        let tolerance = self.full_circle_tolerance;
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::OutOfRange {
                key: "tessellation.full_circle_tolerance",
                value: tolerance,
                expected: "a non-negative finite number",
            });
        }

        Ok(())
    }
}

impl Default for TessellationSettings {
    fn default() -> Self {
        Self {
            arc_resolution: ARC_RESOLUTION,
            full_circle_tolerance: FULL_CIRCLE_TOLERANCE,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Pretty-print JSON output
    pub pretty: bool,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Arc tessellation
    pub tessellation: TessellationSettings,
    /// Output formatting
    pub output: OutputSettings,
}

/// Supported on-disk formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat {
                extension: other.unwrap_or("").to_string(),
            }
            .into()),
        }
    }
}

/// Default configuration file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("gcodeview").join("config.toml"))
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` when given, otherwise the default location when it
    /// exists, otherwise the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }
        match default_config_path() {
            Some(default_path) if default_path.is_file() => Self::load_from_file(&default_path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match ConfigFormat::from_path(path)? {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        std::fs::write(path, content).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.tessellation.validate()
    }
}
