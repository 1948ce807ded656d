//! # gcodeview Visualizer
//!
//! Builds display polylines from G-Code toolpaths.
//! Includes the motion reader, arc tessellation, path accumulation, and
//! bounding-box normalization into a `[-1, 1]` display space.

pub mod gcode;
pub mod toolpath;
pub mod visualizer;

pub use gcode::{leading_comments, DistanceMode, GcodeReader, ModalState, MotionCounts, Units};

pub use toolpath::{
    accumulate, accumulate_with, tessellate_arc, ArcOutcome, ArcPoints, ArcSweep,
    ArcTessellator, Path, PathAccumulator, PathStats,
};

pub use visualizer::{
    normalize, transform, Bounds, BoundsNormalizer, GcodeImport, GcodeImporter, NormalizedPath,
};
