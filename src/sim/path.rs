//! The snake's body as a rectilinear poly-line
//!
//! Waypoints run from the tail end (first) to the head (last). Interior
//! waypoints are turns; every segment is horizontal or vertical.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Segment, unit};
use super::state::Direction;

/// Ordered waypoints of the body, tail end first, head last
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnakePath {
    points: Vec<DVec2>,
}

impl SnakePath {
    /// Build a path from waypoints. Needs at least two.
    pub fn new(points: Vec<DVec2>) -> Option<Self> {
        (points.len() >= 2).then_some(Self { points })
    }

    /// Straight body ending at `head`, trailing `length` units behind it
    pub fn straight(head: DVec2, direction: Direction, length: f64) -> Self {
        let tail = head - direction.vector() * length;
        Self {
            points: vec![tail, head],
        }
    }

    #[inline]
    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Current head position (last waypoint)
    #[inline]
    pub fn head(&self) -> DVec2 {
        self.points[self.points.len() - 1]
    }

    /// Tail tip (first waypoint)
    #[inline]
    pub fn tail_end(&self) -> DVec2 {
        self.points[0]
    }

    /// Segments from the tail end toward the head
    pub fn segments(&self) -> impl DoubleEndedIterator<Item = Segment> + ExactSizeIterator + '_ {
        self.points.windows(2).map(|w| Segment::new(w[0], w[1]))
    }

    /// Segment ending at the head
    pub fn head_segment(&self) -> Segment {
        let n = self.points.len();
        Segment::new(self.points[n - 2], self.points[n - 1])
    }

    /// Total length of the poly-line
    pub fn arc_length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }

    /// Check if any body segment contains `point`
    pub fn covers(&self, point: DVec2) -> bool {
        self.segments().any(|s| s.contains_point(point))
    }

    /// True when every segment is horizontal or vertical
    pub fn is_rectilinear(&self) -> bool {
        self.segments()
            .all(|s| s.start.x == s.end.x || s.start.y == s.end.y)
    }

    /// Body with `distance` removed from the tail end, head excluded.
    ///
    /// Walks from the tail, dropping whole segments until the remaining
    /// distance falls inside one, where a new tail tip is placed. Waypoints
    /// past that point are kept untouched. The head itself is not returned:
    /// the mover appends whatever the head becomes.
    ///
    /// Returns `None` if `distance` consumes the whole body.
    pub fn shrink_tail(&self, distance: f64) -> Option<Vec<DVec2>> {
        let body = &self.points[..self.points.len() - 1];
        if distance <= 0.0 {
            return Some(body.to_vec());
        }

        let mut remaining = distance;
        for (i, segment) in self.segments().enumerate() {
            let length = segment.length();
            if length > remaining {
                let mut tail = Vec::with_capacity(body.len() - i + 1);
                let tip = segment.point_at(remaining);
                // Float rounding can land the tip on the next waypoint
                if tip != segment.end {
                    tail.push(tip);
                }
                tail.extend_from_slice(&body[(i + 1).min(body.len())..]);
                return Some(tail);
            }
            remaining -= length;
        }
        None
    }

    /// Push the tail tip `amount` units further out along its own segment.
    ///
    /// Returns false (path untouched) if the tail segment is degenerate.
    pub fn extend_tail(&mut self, amount: f64) -> bool {
        let outward = Segment::new(self.points[1], self.points[0]);
        if outward.is_degenerate() {
            log::warn!("Cannot grow: degenerate tail segment at {:?}", self.points[0]);
            return false;
        }
        self.points[0] += unit(outward.vector()) * amount;
        true
    }
}

impl From<SnakePath> for Vec<DVec2> {
    fn from(path: SnakePath) -> Self {
        path.points
    }
}
