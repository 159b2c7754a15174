//! Vector helpers and straight segments
//!
//! Points and displacements are `glam::DVec2` in grid units. A segment is
//! directed: `start` is the end nearer the tail, `end` the end nearer the head.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::CONTAINMENT_EPSILON;

/// Unit vector of `v`.
///
/// A zero-length vector has no direction. Callers keep segments
/// non-degenerate, so this trips a debug assertion; release builds log and
/// return `DVec2::ZERO`, which turns the dependent step into a no-op.
pub fn unit(v: DVec2) -> DVec2 {
    match v.try_normalize() {
        Some(n) => n,
        None => {
            debug_assert!(false, "normalize of degenerate vector {v:?}");
            log::warn!("Degenerate geometry: cannot normalize {:?}", v);
            DVec2::ZERO
        }
    }
}

/// True when `a` and `b` point in exactly opposite directions
/// (colinear with a negative dot product).
#[inline]
pub fn is_opposite(a: DVec2, b: DVec2) -> bool {
    a.perp_dot(b) == 0.0 && a.dot(b) < 0.0
}

/// A directed straight segment of the snake's body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: DVec2,
    pub end: DVec2,
}

impl Segment {
    pub fn new(start: DVec2, end: DVec2) -> Self {
        Self { start, end }
    }

    /// Displacement from start to end
    #[inline]
    pub fn vector(&self) -> DVec2 {
        self.end - self.start
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.vector().length()
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Unit direction from start to end, `None` for a zero-length segment
    pub fn direction(&self) -> Option<DVec2> {
        self.vector().try_normalize()
    }

    /// Check if a point lies on the segment (endpoints included).
    ///
    /// Uses `|start-p| + |p-end| == |start-end|` within `CONTAINMENT_EPSILON`.
    pub fn contains_point(&self, point: DVec2) -> bool {
        let via_point = self.start.distance(point) + point.distance(self.end);
        (via_point - self.length()).abs() <= CONTAINMENT_EPSILON
    }

    /// Foot of the perpendicular from `point` onto the infinite line through
    /// the segment. Not clamped; pair with `contains_point` for a bounded test.
    /// `None` when the segment is degenerate.
    pub fn projected_point(&self, point: DVec2) -> Option<DVec2> {
        let v = self.vector();
        let len_sq = v.length_squared();
        if len_sq == 0.0 {
            return None;
        }
        let u = (point - self.start).dot(v) / len_sq;
        Some(self.start + v * u)
    }

    /// Point at `distance` from start, measured along the segment
    pub fn point_at(&self, distance: f64) -> DVec2 {
        self.start + unit(self.vector()) * distance
    }
}
