//! G-Code importer
//!
//! Turns G-Code text into a normalized display polyline:
//! reader → path accumulator (arc tessellation) → bounds normalizer.
//! Also reports the program's leading comments.

use super::viewport::{Bounds, BoundsNormalizer, NormalizedPath};
use crate::gcode::{leading_comments, GcodeReader, MotionCounts};
use crate::toolpath::{ArcTessellator, PathAccumulator, PathStats};
use gcodeview_core::constants::GCODE_IMPORTER_LABEL;
use gcodeview_core::{MotionEvent, PathError, Result, Vector2};
use gcodeview_settings::{ConfigError, TessellationSettings};
use serde::Serialize;
use tracing::{debug, info};

/// Result of importing one G-Code program
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GcodeImport {
    pub file_name: String,
    pub label: String,
    /// Comment lines that precede the first code line
    pub comments: Vec<String>,
    /// Toolpath vertices in `[-1, 1]` per axis
    pub vertices: Vec<Vector2>,
    pub original_aspect_ratio: f64,
    /// Bounding box of the toolpath in machine units
    pub bounds: Bounds,
    pub stats: PathStats,
    pub motion: MotionCounts,
}

/// Imports G-Code programs into normalized display paths
#[derive(Debug, Clone)]
pub struct GcodeImporter {
    file_name: String,
    tessellator: ArcTessellator,
    normalizer: BoundsNormalizer,
}

impl GcodeImporter {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            tessellator: ArcTessellator::default(),
            normalizer: BoundsNormalizer::new(),
        }
    }

    /// Use the arc resolution and full-circle tolerance from `settings`.
    ///
    /// Fails when the settings do not pass [`TessellationSettings::validate`].
    pub fn with_settings(
        mut self,
        settings: &TessellationSettings,
    ) -> std::result::Result<Self, ConfigError> {
        self.tessellator = ArcTessellator::from_settings(settings)?;
        Ok(self)
    }

    pub fn with_tessellator(mut self, tessellator: ArcTessellator) -> Self {
        self.tessellator = tessellator;
        self
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn label(&self) -> &'static str {
        GCODE_IMPORTER_LABEL
    }

    /// Build the normalized path for already-decoded motion events
    pub fn transform<I>(&self, events: I) -> std::result::Result<NormalizedPath, PathError>
    where
        I: IntoIterator<Item = MotionEvent>,
    {
        self.transform_with_stats(events).map(|(normalized, _)| normalized)
    }

    fn transform_with_stats<I>(
        &self,
        events: I,
    ) -> std::result::Result<(NormalizedPath, PathStats), PathError>
    where
        I: IntoIterator<Item = MotionEvent>,
    {
        let mut accumulator = PathAccumulator::new(self.tessellator);
        accumulator.extend(events);
        let path = accumulator.finish();
        let normalized = self.normalizer.normalize(path.vertices())?;
        Ok((normalized, path.stats()))
    }

    /// Import a whole program
    pub fn import(&self, text: &str) -> Result<GcodeImport> {
        debug!("Importing '{}' ({} bytes)", self.file_name, text.len());

        let comments = leading_comments(text);
        let mut reader = GcodeReader::new();
        let events = reader.read(text)?;
        let (normalized, stats) = self.transform_with_stats(events)?;

        info!(
            "Imported '{}': {} vertices, {} leading comments, aspect ratio {:.4}",
            self.file_name,
            normalized.vertices.len(),
            comments.len(),
            normalized.original_aspect_ratio
        );

        Ok(GcodeImport {
            file_name: self.file_name.clone(),
            label: GCODE_IMPORTER_LABEL.to_string(),
            comments,
            vertices: normalized.vertices,
            original_aspect_ratio: normalized.original_aspect_ratio,
            bounds: normalized.bounds,
            stats,
            motion: reader.counts(),
        })
    }
}

/// Accumulate and normalize motion events at the default arc resolution
pub fn transform<I>(events: I) -> std::result::Result<NormalizedPath, PathError>
where
    I: IntoIterator<Item = MotionEvent>,
{
    GcodeImporter::new("").transform(events)
}
