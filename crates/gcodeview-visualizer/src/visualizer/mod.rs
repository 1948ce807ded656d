//! Display path construction
//!
//! This module provides:
//! - Bounding box computation and per-axis normalization
//! - The G-Code importer tying reader, tessellation and normalization together

pub mod importer;
pub mod viewport;

pub use importer::{transform, GcodeImport, GcodeImporter};
pub use viewport::{normalize, Bounds, BoundsNormalizer, NormalizedPath};
