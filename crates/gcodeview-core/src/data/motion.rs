//! Motion modes and motion events

use super::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Motion mode in effect for a move (modal group 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionMode {
    /// Straight move (G0 rapid or G1 feed)
    Linear,
    /// Clockwise arc (G2)
    ArcClockwise,
    /// Counter-clockwise arc (G3)
    ArcCounterClockwise,
}

impl MotionMode {
    /// Map a G-code motion number to a motion mode.
    ///
    /// `G0` and `G1` both map to [`MotionMode::Linear`]; anything outside
    /// `0..=3` is not a motion command.
    pub fn from_motion_code(code: u8) -> Option<Self> {
        match code {
            0 | 1 => Some(Self::Linear),
            2 => Some(Self::ArcClockwise),
            3 => Some(Self::ArcCounterClockwise),
            _ => None,
        }
    }

    /// True for either arc direction
    pub fn is_arc(&self) -> bool {
        matches!(self, Self::ArcClockwise | Self::ArcCounterClockwise)
    }
}

impl fmt::Display for MotionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::ArcClockwise => write!(f, "arc_cw"),
            Self::ArcCounterClockwise => write!(f, "arc_ccw"),
        }
    }
}

/// One decoded machine move
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MotionEvent {
    /// Straight move from `start` to `end`
    Line {
        mode: MotionMode,
        start: Vector2,
        end: Vector2,
    },
    /// Circular arc from `start` to `end` around `center`
    Arc {
        mode: MotionMode,
        start: Vector2,
        end: Vector2,
        center: Vector2,
    },
}

impl MotionEvent {
    /// Create a straight move
    pub fn line(start: Vector2, end: Vector2) -> Self {
        Self::Line {
            mode: MotionMode::Linear,
            start,
            end,
        }
    }

    /// Create an arc move
    pub fn arc(mode: MotionMode, start: Vector2, end: Vector2, center: Vector2) -> Self {
        Self::Arc {
            mode,
            start,
            end,
            center,
        }
    }

    pub fn mode(&self) -> MotionMode {
        match self {
            Self::Line { mode, .. } | Self::Arc { mode, .. } => *mode,
        }
    }

    pub fn start(&self) -> Vector2 {
        match self {
            Self::Line { start, .. } | Self::Arc { start, .. } => *start,
        }
    }

    pub fn end(&self) -> Vector2 {
        match self {
            Self::Line { end, .. } | Self::Arc { end, .. } => *end,
        }
    }

    /// True when the move does not displace the tool in the XY plane.
    ///
    /// Uses exact coordinate equality.
    pub fn is_zero_length(&self) -> bool {
        let (start, end) = (self.start(), self.end());
        start.x == end.x && start.y == end.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_motion_code_mapping() {
        assert_eq!(MotionMode::from_motion_code(0), Some(MotionMode::Linear));
        assert_eq!(MotionMode::from_motion_code(1), Some(MotionMode::Linear));
        assert_eq!(
            MotionMode::from_motion_code(2),
            Some(MotionMode::ArcClockwise)
        );
        assert_eq!(
            MotionMode::from_motion_code(3),
            Some(MotionMode::ArcCounterClockwise)
        );
        assert_eq!(MotionMode::from_motion_code(4), None);
        assert!(MotionMode::ArcClockwise.is_arc());
        assert!(!MotionMode::Linear.is_arc());
    }

    #[test]
    fn test_zero_length_is_exact() {
        let a = Vector2::new(1.0, 1.0);
        assert!(MotionEvent::line(a, a).is_zero_length());
        assert!(!MotionEvent::line(a, Vector2::new(1.0, 1.0 + f64::EPSILON)).is_zero_length());
    }

    #[test]
    fn test_accessors() {
        let event = MotionEvent::arc(
            MotionMode::ArcCounterClockwise,
            Vector2::new(1.0, 0.0),
            Vector2::new(0.0, 1.0),
            Vector2::ZERO,
        );
        assert_eq!(event.mode(), MotionMode::ArcCounterClockwise);
        assert_eq!(event.start(), Vector2::new(1.0, 0.0));
        assert_eq!(event.end(), Vector2::new(0.0, 1.0));
    }

    #[test]
    fn test_event_serialization_is_tagged() {
        let json = serde_json::to_value(MotionEvent::line(Vector2::ZERO, Vector2::new(1.0, 0.0)))
            .unwrap();
        assert_eq!(json["kind"], "line");
        assert_eq!(json["mode"], "linear");
    }
}
