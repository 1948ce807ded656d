//! Arc tessellation
//!
//! Approximates a circular arc by chords no longer than a fixed
//! resolution. The sweep always follows the commanded rotation (G2
//! clockwise, G3 counter-clockwise), never the geometrically shorter way.

use gcodeview_core::constants::{ARC_RESOLUTION, FULL_CIRCLE_TOLERANCE};
use gcodeview_core::{MotionMode, Vector2};
use gcodeview_settings::{ConfigError, TessellationSettings};
use std::f64::consts::TAU;
use std::iter::FusedIterator;
use tracing::trace;

/// Start and end angles of an arc, adjusted to the commanded direction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSweep {
    pub start_theta: f64,
    pub end_theta: f64,
    /// Signed sweep: negative for clockwise, positive for counter-clockwise
    pub delta_theta: f64,
    /// `-1.0` when stepping clockwise, `1.0` otherwise
    pub direction: f64,
}

impl ArcSweep {
    /// Resolve the sweep of an arc from `start` to `end` around `center`.
    ///
    /// A `Linear` mode is not an arc direction; the raw `atan2`
    /// difference is kept and stepping goes counter-clockwise.
    pub fn resolve(mode: MotionMode, start: Vector2, end: Vector2, center: Vector2) -> Self {
        let start_theta = (start - center).angle();
        let mut end_theta = (end - center).angle();
        let mut delta_theta = end_theta - start_theta;
        let mut direction = 1.0;

        match mode {
            MotionMode::ArcClockwise => {
                if delta_theta > 0.0 {
                    end_theta -= TAU;
                    delta_theta -= TAU;
                }
                direction = -1.0;
            }
            MotionMode::ArcCounterClockwise => {
                if delta_theta < 0.0 {
                    end_theta += TAU;
                    delta_theta += TAU;
                }
            }
            MotionMode::Linear => {}
        }

        Self {
            start_theta,
            end_theta,
            delta_theta,
            direction,
        }
    }
}

/// How an arc was turned into points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcOutcome {
    /// Stepped along the sweep, followed by the exact end point
    Stepped,
    /// Start and end coincide; no points at all
    FullCircle,
    /// The center sits on an endpoint; only the end point
    ZeroRadius,
    /// Zero or non-finite sweep length; only the end point
    ZeroSweep,
}

impl ArcOutcome {
    /// True when the arc could not be stepped and fell back to its end point
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Self::ZeroRadius | Self::ZeroSweep)
    }
}

/// Single-pass iterator over the points of one tessellated arc
#[derive(Debug, Clone)]
pub struct ArcPoints {
    center: Vector2,
    radius: f64,
    sweep: ArcSweep,
    theta_step: f64,
    index: u64,
    stepping: bool,
    end: Option<Vector2>,
    outcome: ArcOutcome,
}

impl ArcPoints {
    fn fallback(outcome: ArcOutcome, end: Option<Vector2>) -> Self {
        Self {
            center: Vector2::ZERO,
            radius: 0.0,
            sweep: ArcSweep {
                start_theta: 0.0,
                end_theta: 0.0,
                delta_theta: 0.0,
                direction: 1.0,
            },
            theta_step: 0.0,
            index: 0,
            stepping: false,
            end,
            outcome,
        }
    }

    pub fn outcome(&self) -> ArcOutcome {
        self.outcome
    }
}

impl Iterator for ArcPoints {
    type Item = Vector2;

    fn next(&mut self) -> Option<Vector2> {
        if self.stepping {
            // Multiply rather than accumulate so rounding does not drift.
            let theta = self.sweep.start_theta + self.index as f64 * self.theta_step;
            if self.sweep.direction * theta <= self.sweep.direction * self.sweep.end_theta {
                self.index += 1;
                return Some(Vector2::new(
                    self.center.x + self.radius * theta.cos(),
                    self.center.y + self.radius * theta.sin(),
                ));
            }
            self.stepping = false;
        }
        self.end.take()
    }
}

impl FusedIterator for ArcPoints {}

/// Turns arc moves into chord endpoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcTessellator {
    resolution: f64,
    full_circle_tolerance: f64,
}

impl Default for ArcTessellator {
    fn default() -> Self {
        Self {
            resolution: ARC_RESOLUTION,
            full_circle_tolerance: FULL_CIRCLE_TOLERANCE,
        }
    }
}

impl ArcTessellator {
    /// Create a tessellator with a maximum chord length of `resolution`.
    ///
    /// Fails unless `resolution` is positive and finite and
    /// `full_circle_tolerance` is non-negative and finite; a zero or
    /// negative step would never reach the end of the sweep.
    pub fn new(resolution: f64, full_circle_tolerance: f64) -> Result<Self, ConfigError> {
        Self::from_settings(&TessellationSettings {
            arc_resolution: resolution,
            full_circle_tolerance,
        })
    }

    pub fn from_settings(settings: &TessellationSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            resolution: settings.arc_resolution,
            full_circle_tolerance: settings.full_circle_tolerance,
        })
    }

    pub fn resolution(&self) -> f64 {
        self.resolution
    }

    pub fn full_circle_tolerance(&self) -> f64 {
        self.full_circle_tolerance
    }

    /// Lazily tessellate one arc.
    ///
    /// The radius is taken from `end`. The last point yielded is always
    /// `end` itself, except for a full circle which yields nothing.
    pub fn points(
        &self,
        mode: MotionMode,
        start: Vector2,
        end: Vector2,
        center: Vector2,
    ) -> ArcPoints {
        if start.approx_eq(end, self.full_circle_tolerance) {
            trace!("Arc {} -> {}: full circle, skipped", start, end);
            return ArcPoints::fallback(ArcOutcome::FullCircle, None);
        }

        let radius = end.distance(center);
        if radius == 0.0 || start == center {
            trace!("Arc {} -> {}: zero radius around {}", start, end, center);
            return ArcPoints::fallback(ArcOutcome::ZeroRadius, Some(end));
        }

        let sweep = ArcSweep::resolve(mode, start, end, center);
        let arc_length = sweep.delta_theta.abs() * radius;
        if !(arc_length.is_finite() && arc_length > 0.0) {
            trace!(
                "Arc {} -> {}: unusable sweep length {}",
                start,
                end,
                arc_length
            );
            return ArcPoints::fallback(ArcOutcome::ZeroSweep, Some(end));
        }

        let theta_step = sweep.delta_theta * self.resolution / arc_length;
        trace!(
            "Arc {} -> {} around {}: radius={:.4}, sweep={:.4} rad, step={:.6} rad",
            start,
            end,
            center,
            radius,
            sweep.delta_theta,
            theta_step
        );

        ArcPoints {
            center,
            radius,
            sweep,
            theta_step,
            index: 0,
            stepping: true,
            end: Some(end),
            outcome: ArcOutcome::Stepped,
        }
    }

    /// Tessellate one arc into an owned point list
    pub fn tessellate(
        &self,
        mode: MotionMode,
        start: Vector2,
        end: Vector2,
        center: Vector2,
    ) -> Vec<Vector2> {
        self.points(mode, start, end, center).collect()
    }
}

/// Tessellate one arc at the default [`ARC_RESOLUTION`]
pub fn tessellate_arc(
    mode: MotionMode,
    start: Vector2,
    end: Vector2,
    center: Vector2,
) -> Vec<Vector2> {
    ArcTessellator::default().tessellate(mode, start, end, center)
}
