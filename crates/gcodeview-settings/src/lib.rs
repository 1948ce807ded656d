//! gcodeview Settings Crate
//!
//! Handles import configuration: tessellation parameters and output
//! preferences, persisted as TOML or JSON.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, OutputSettings, TessellationSettings};
pub use error::{ConfigError, SettingsError, SettingsResult};
