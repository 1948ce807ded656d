//! Toolpath construction
//!
//! This module provides:
//! - Arc tessellation at a fixed maximum chord length
//! - Path accumulation from motion events

pub mod accumulator;
pub mod arc;

pub use accumulator::{accumulate, accumulate_with, Path, PathAccumulator, PathStats};
pub use arc::{tessellate_arc, ArcOutcome, ArcPoints, ArcSweep, ArcTessellator};
