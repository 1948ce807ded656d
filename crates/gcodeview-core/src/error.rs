//! Error handling for gcodeview
//!
//! Provides error types for each layer of the import pipeline:
//! - Path errors (bounding box and normalization)
//! - G-Code errors (reading motion words from text)
//!
//! All error types use `thiserror` for ergonomic error handling.
//! Numeric degeneracies that only affect a single arc or a single axis
//! are recovered where they occur and never reach these types.

use thiserror::Error;

/// Path error type
///
/// Represents failures of the path as a whole, which prevent a
/// normalized path from being produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PathError {
    /// The path has no vertices, so it has no bounding box
    #[error("Cannot normalize an empty path")]
    EmptyPath,

    /// A vertex carries a NaN or infinite coordinate
    #[error("Vertex {index} has a non-finite coordinate ({x}, {y})")]
    NonFiniteVertex {
        /// Position of the vertex in the path.
        index: usize,
        /// The X coordinate.
        x: f64,
        /// The Y coordinate.
        y: f64,
    },
}

/// G-Code error type
///
/// Represents errors met while turning G-Code text into motion events.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GcodeError {
    /// Invalid parameter value
    #[error("Invalid parameter '{param}' at line {line_number}: {reason}")]
    InvalidParameter {
        /// The line number (1-based) where the invalid parameter was found.
        line_number: u32,
        /// The parameter word, e.g. `X` or `G`.
        param: String,
        /// The reason the parameter is invalid.
        reason: String,
    },
}

/// Main error type for gcodeview
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Path error
    #[error(transparent)]
    Path(#[from] PathError),

    /// G-Code error
    #[error(transparent)]
    Gcode(#[from] GcodeError),
}

impl Error {
    /// Check if this is a path error
    pub fn is_path_error(&self) -> bool {
        matches!(self, Error::Path(_))
    }

    /// Check if this is a G-Code error
    pub fn is_gcode_error(&self) -> bool {
        matches!(self, Error::Gcode(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
