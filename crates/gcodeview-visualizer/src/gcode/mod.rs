//! G-Code reading
//!
//! This module provides:
//! - Leading comment extraction
//! - Modal state tracking (motion, units, and distance modes)
//! - Motion event reading from G-Code text

pub mod comments;
pub mod parser;

pub use comments::{is_comment, leading_comments};
pub use parser::{DistanceMode, GcodeReader, ModalState, MotionCounts, Units};
