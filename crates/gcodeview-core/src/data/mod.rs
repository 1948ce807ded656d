//! Data models for toolpath geometry
//!
//! This module provides:
//! - 2D coordinates in machine units
//! - Motion modes (linear, clockwise arc, counter-clockwise arc)
//! - Motion events as produced by a G-code reader

pub mod motion;

pub use motion::{MotionEvent, MotionMode};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// 2D coordinate in machine units (e.g. millimeters)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    /// X-axis position
    pub x: f64,
    /// Y-axis position
    pub y: f64,
}

/// A point of the display polyline. Its position in the path encodes
/// traversal order.
pub type Vertex = Vector2;

impl Vector2 {
    /// Origin (0, 0)
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new vector
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: Vector2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Angle of this vector measured from the positive X axis, in radians
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// True when both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// True when both axes differ from `other` by at most `tolerance`
    pub fn approx_eq(&self, other: Vector2, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}
