//! Path accumulation
//!
//! Walks motion events in order and concatenates their display vertices
//! into a single polyline. Straight moves contribute their end point, arcs
//! contribute their tessellation. Moves that do not displace the tool are
//! dropped; nothing else is deduplicated or simplified.

use super::arc::{ArcOutcome, ArcTessellator};
use gcodeview_core::{MotionEvent, Vertex};
use serde::Serialize;
use tracing::{debug, trace};

/// Counters collected while accumulating a path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PathStats {
    /// Straight moves that contributed a vertex
    pub lines: usize,
    /// Arc moves that were tessellated
    pub arcs: usize,
    /// Moves dropped because start and end are identical
    pub dropped_moves: usize,
    /// Arcs that fell back to their end point (zero radius or sweep)
    pub degenerate_arcs: usize,
    /// Arcs treated as full circles and skipped by the tessellator
    pub full_circles: usize,
}

/// Ordered display vertices of a toolpath
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    vertices: Vec<Vertex>,
    stats: PathStats,
}

impl Path {
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }

    pub fn stats(&self) -> PathStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// Builds a [`Path`] from motion events, one event at a time
#[derive(Debug, Clone, Default)]
pub struct PathAccumulator {
    tessellator: ArcTessellator,
    vertices: Vec<Vertex>,
    stats: PathStats,
}

impl PathAccumulator {
    pub fn new(tessellator: ArcTessellator) -> Self {
        Self {
            tessellator,
            vertices: Vec::new(),
            stats: PathStats::default(),
        }
    }

    /// Append the vertices of one motion event
    pub fn push(&mut self, event: &MotionEvent) {
        if event.is_zero_length() {
            trace!("Dropping zero-length {} move at {}", event.mode(), event.end());
            self.stats.dropped_moves += 1;
            return;
        }

        match *event {
            MotionEvent::Line { end, .. } => {
                self.stats.lines += 1;
                self.vertices.push(end);
            }
            MotionEvent::Arc {
                mode,
                start,
                end,
                center,
            } => {
                self.stats.arcs += 1;
                let points = self.tessellator.points(mode, start, end, center);
                match points.outcome() {
                    ArcOutcome::FullCircle => self.stats.full_circles += 1,
                    outcome if outcome.is_degenerate() => self.stats.degenerate_arcs += 1,
                    _ => {}
                }
                self.vertices.extend(points);
            }
        }
    }

    /// Number of vertices collected so far
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Finish accumulation and hand over the path
    pub fn finish(self) -> Path {
        debug!(
            "Path accumulated: {} vertices, lines={}, arcs={}, dropped={}, degenerate={}, full={}",
            self.vertices.len(),
            self.stats.lines,
            self.stats.arcs,
            self.stats.dropped_moves,
            self.stats.degenerate_arcs,
            self.stats.full_circles
        );
        Path {
            vertices: self.vertices,
            stats: self.stats,
        }
    }
}

impl Extend<MotionEvent> for PathAccumulator {
    fn extend<I: IntoIterator<Item = MotionEvent>>(&mut self, events: I) {
        for event in events {
            self.push(&event);
        }
    }
}

impl<'a> Extend<&'a MotionEvent> for PathAccumulator {
    fn extend<I: IntoIterator<Item = &'a MotionEvent>>(&mut self, events: I) {
        for event in events {
            self.push(event);
        }
    }
}

/// Accumulate `events` into a path using `tessellator` for arcs
pub fn accumulate_with<I>(events: I, tessellator: ArcTessellator) -> Path
where
    I: IntoIterator<Item = MotionEvent>,
{
    let mut accumulator = PathAccumulator::new(tessellator);
    accumulator.extend(events);
    accumulator.finish()
}

/// Accumulate `events` into a path at the default arc resolution
pub fn accumulate<I>(events: I) -> Path
where
    I: IntoIterator<Item = MotionEvent>,
{
    accumulate_with(events, ArcTessellator::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcodeview_core::{MotionMode, Vector2};

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    #[test]
    fn test_line_contributes_end_only() {
        let path = accumulate([
            MotionEvent::line(v(0.0, 0.0), v(10.0, 0.0)),
            MotionEvent::line(v(10.0, 0.0), v(10.0, 5.0)),
        ]);
        assert_eq!(path.vertices(), &[v(10.0, 0.0), v(10.0, 5.0)]);
        assert_eq!(path.stats().lines, 2);
    }

    #[test]
    fn test_zero_length_line_is_dropped() {
        let path = accumulate([
            MotionEvent::line(v(1.0, 1.0), v(1.0, 1.0)),
            MotionEvent::line(v(1.0, 1.0), v(2.0, 1.0)),
        ]);
        assert_eq!(path.vertices(), &[v(2.0, 1.0)]);
        assert_eq!(path.stats().dropped_moves, 1);
    }

    #[test]
    fn test_zero_length_arc_is_dropped() {
        let path = accumulate([MotionEvent::arc(
            MotionMode::ArcClockwise,
            v(1.0, 0.0),
            v(1.0, 0.0),
            v(0.0, 0.0),
        )]);
        assert!(path.is_empty());
        assert_eq!(path.stats().dropped_moves, 1);
        assert_eq!(path.stats().arcs, 0);
    }

    #[test]
    fn test_arc_appends_tessellation_in_order() {
        let arc = MotionEvent::arc(
            MotionMode::ArcClockwise,
            v(1.0, 0.0),
            v(0.0, -1.0),
            v(0.0, 0.0),
        );
        let expected = ArcTessellator::default().tessellate(
            MotionMode::ArcClockwise,
            v(1.0, 0.0),
            v(0.0, -1.0),
            v(0.0, 0.0),
        );

        let path = accumulate([MotionEvent::line(v(0.0, 0.0), v(1.0, 0.0)), arc]);
        assert_eq!(path.vertices()[0], v(1.0, 0.0));
        assert_eq!(&path.vertices()[1..], expected.as_slice());
        assert_eq!(path.stats().arcs, 1);
    }

    #[test]
    fn test_degenerate_arcs_are_counted() {
        let path = accumulate([
            // Center on the start point.
            MotionEvent::arc(MotionMode::ArcClockwise, v(0.0, 0.0), v(2.0, 0.0), v(0.0, 0.0)),
            // Start and end on the same ray.
            MotionEvent::arc(
                MotionMode::ArcCounterClockwise,
                v(2.0, 0.0),
                v(4.0, 0.0),
                v(0.0, 0.0),
            ),
        ]);
        assert_eq!(path.vertices(), &[v(2.0, 0.0), v(4.0, 0.0)]);
        assert_eq!(path.stats().degenerate_arcs, 2);
    }

    #[test]
    fn test_near_full_circle_is_counted() {
        let path = accumulate([MotionEvent::arc(
            MotionMode::ArcCounterClockwise,
            v(1.0, 0.0),
            v(1.0, 1e-12),
            v(0.0, 0.0),
        )]);
        assert!(path.is_empty());
        assert_eq!(path.stats().full_circles, 1);
    }

    #[test]
    fn test_incremental_push() {
        let mut accumulator = PathAccumulator::default();
        assert!(accumulator.is_empty());
        accumulator.push(&MotionEvent::line(v(0.0, 0.0), v(1.0, 0.0)));
        let events = vec![MotionEvent::line(v(1.0, 0.0), v(1.0, 1.0))];
        accumulator.extend(&events);
        assert_eq!(accumulator.len(), 2);
        assert_eq!(accumulator.finish().into_vertices(), vec![v(1.0, 0.0), v(1.0, 1.0)]);
    }
}
