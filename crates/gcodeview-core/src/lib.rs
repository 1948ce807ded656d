//! # gcodeview Core
//!
//! Core types and error handling shared by the gcodeview crates.
//! Provides the 2D geometry primitives, the motion event model handed
//! to the toolpath builder, and the unified error type.

pub mod constants;
pub mod data;
pub mod error;

pub use data::{MotionEvent, MotionMode, Vector2, Vertex};

pub use error::{Error, GcodeError, PathError, Result};
