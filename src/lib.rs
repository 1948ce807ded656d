//! # gcodeview
//!
//! Turns G-Code toolpaths into 2D display polylines normalized to `[-1, 1]`.
//!
//! ## Architecture
//!
//! gcodeview is organized as a workspace with multiple crates:
//!
//! 1. **gcodeview-core** - Geometry types, motion events, errors
//! 2. **gcodeview-settings** - Configuration loading and validation
//! 3. **gcodeview-visualizer** - G-Code reading, arc tessellation, path
//!    accumulation, bounds normalization
//! 4. **gcodeview** - Command line binary that prints the result as JSON

use anyhow::Context;
use std::path::Path;
use tracing::debug;

pub use gcodeview_core::{
    Error, GcodeError, MotionEvent, MotionMode, PathError, Result, Vector2, Vertex,
};
pub use gcodeview_settings::{Config, OutputSettings, SettingsError, TessellationSettings};
pub use gcodeview_visualizer::{
    accumulate, normalize, transform, Bounds, GcodeImport, GcodeImporter, NormalizedPath,
    PathStats,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Log lines go to stderr so stdout carries only the JSON result.
/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .context("failed to install the tracing subscriber")?;

    Ok(())
}

/// Read and import the G-Code file at `path`
pub fn import_file(path: &Path, config: &Config) -> anyhow::Result<GcodeImport> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    debug!("Importing {} with {:?}", path.display(), config.tessellation);

    let import = GcodeImporter::new(file_name)
        .with_settings(&config.tessellation)
        .context("invalid tessellation settings")?
        .import(&text)
        .with_context(|| format!("failed to import {}", path.display()))?;
    Ok(import)
}

/// Serialize an import as JSON
pub fn render_json(import: &GcodeImport, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(import)
    } else {
        serde_json::to_string(import)
    }
}
