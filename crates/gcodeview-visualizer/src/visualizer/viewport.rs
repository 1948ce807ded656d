//! Bounding box and normalization of display paths.
//!
//! Normalization centers the path on its bounding box and scales each axis
//! independently so that its half-extent becomes exactly 1. A non-square
//! box therefore comes out square; the ratio of the two scales is kept in
//! [`NormalizedPath::original_aspect_ratio`] so a renderer can undo the
//! distortion.

use gcodeview_core::{PathError, Vector2, Vertex};
use serde::Serialize;
use tracing::debug;

/// Axis-aligned bounding box of a path, in machine units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Zero-size box around a single point
    pub fn from_point(point: Vector2) -> Self {
        Self {
            min_x: point.x,
            max_x: point.x,
            min_y: point.y,
            max_y: point.y,
        }
    }

    /// Grow the box to contain `point`
    pub fn include(self, point: Vector2) -> Self {
        Self {
            min_x: self.min_x.min(point.x),
            max_x: self.max_x.max(point.x),
            min_y: self.min_y.min(point.y),
            max_y: self.max_y.max(point.y),
        }
    }

    /// Bounding box of `vertices`, or `None` when there are none
    pub fn from_vertices(vertices: &[Vertex]) -> Option<Self> {
        let (first, rest) = vertices.split_first()?;
        Some(
            rest.iter()
                .fold(Self::from_point(*first), |bounds, vertex| bounds.include(*vertex)),
        )
    }

    pub fn center(&self) -> Vector2 {
        Vector2::new(
            midpoint(self.min_x, self.max_x),
            midpoint(self.min_y, self.max_y),
        )
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// Half of `max - min`, finite for any finite `min <= max`
fn half_extent(min: f64, max: f64) -> f64 {
    max / 2.0 - min / 2.0
}

/// Midpoint of `min` and `max` without overflowing near `f64::MAX`
fn midpoint(min: f64, max: f64) -> f64 {
    min + half_extent(min, max)
}

/// Centering and scaling of one axis
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisTransform {
    offset: f64,
    /// `1 / half_extent`, or `None` when the axis has no usable extent
    scale: Option<f64>,
}

impl AxisTransform {
    fn new(min: f64, max: f64) -> Self {
        let half = half_extent(min, max);
        let scale = (half > 0.0)
            .then(|| half.recip())
            .filter(|scale| scale.is_finite());
        Self {
            offset: midpoint(min, max),
            scale,
        }
    }

    fn apply(&self, value: f64) -> f64 {
        match self.scale {
            // Rounding in the product may land one ulp outside the unit range.
            Some(scale) => (scale * (value - self.offset)).clamp(-1.0, 1.0),
            None => 0.0,
        }
    }
}

/// Path mapped into `[-1, 1]` on both axes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedPath {
    pub vertices: Vec<Vector2>,
    /// `scale_x / scale_y` of the applied transform; `1.0` when an axis is flat
    pub original_aspect_ratio: f64,
    /// Bounding box of the source path
    pub bounds: Bounds,
}

/// Maps a completed path into the normalized display space
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsNormalizer;

impl BoundsNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Normalize `vertices`.
    ///
    /// Fails on an empty path or on any non-finite coordinate. A flat axis
    /// (zero width or height) maps every vertex to `0.0` on that axis.
    pub fn normalize(&self, vertices: &[Vertex]) -> Result<NormalizedPath, PathError> {
        if let Some((index, vertex)) = vertices.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(PathError::NonFiniteVertex {
                index,
                x: vertex.x,
                y: vertex.y,
            });
        }

        let bounds = Bounds::from_vertices(vertices).ok_or(PathError::EmptyPath)?;
        let x_axis = AxisTransform::new(bounds.min_x, bounds.max_x);
        let y_axis = AxisTransform::new(bounds.min_y, bounds.max_y);

        let original_aspect_ratio = match (x_axis.scale, y_axis.scale) {
            (Some(scale_x), Some(scale_y)) => scale_x / scale_y,
            (x, y) => {
                debug!(
                    "Degenerate bounding box (flat x: {}, flat y: {}), clamping flat axes to 0",
                    x.is_none(),
                    y.is_none()
                );
                1.0
            }
        };

        let vertices = vertices
            .iter()
            .map(|v| Vector2::new(x_axis.apply(v.x), y_axis.apply(v.y)))
            .collect::<Vec<_>>();

        debug!(
            "Normalized {} vertices: x=[{:.3}, {:.3}], y=[{:.3}, {:.3}], aspect={:.4}",
            vertices.len(),
            bounds.min_x,
            bounds.max_x,
            bounds.min_y,
            bounds.max_y,
            original_aspect_ratio
        );

        Ok(NormalizedPath {
            vertices,
            original_aspect_ratio,
            bounds,
        })
    }
}

/// Normalize `vertices` with the default [`BoundsNormalizer`]
pub fn normalize(vertices: &[Vertex]) -> Result<NormalizedPath, PathError> {
    BoundsNormalizer::new().normalize(vertices)
}
