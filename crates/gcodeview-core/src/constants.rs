//! Shared numeric constants.

/// Maximum chord length, in machine units, used when tessellating arcs.
pub const ARC_RESOLUTION: f64 = 0.5;

/// Per-axis distance under which an arc's start and end are considered the
/// same point (a full-circle command).
pub const FULL_CIRCLE_TOLERANCE: f64 = 1e-9;

/// Label reported by the G-code importer.
pub const GCODE_IMPORTER_LABEL: &str = "Gcode";
