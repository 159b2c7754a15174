//! Wall and self-collision detection
//!
//! The body is a line of thickness 1, so the head hits its own body when it
//! comes within half a unit of a segment it can legitimately reach.

use glam::DVec2;

use super::geometry::Segment;
use super::path::SnakePath;
use crate::consts::{BODY_HALF_WIDTH, SELF_COLLISION_MIN_WAYPOINTS, SELF_COLLISION_SKIP_SEGMENTS};

/// Check if the head left the `[0, width] x [0, height]` board
pub fn is_out_of_bounds(head: DVec2, width: u32, height: u32) -> bool {
    head.x < 0.0 || head.x > f64::from(width) || head.y < 0.0 || head.y > f64::from(height)
}

/// Distance from `point` to the segment, if its perpendicular foot lands on it
fn perpendicular_distance(segment: &Segment, point: DVec2) -> Option<f64> {
    let foot = segment.projected_point(point)?;
    segment
        .contains_point(foot)
        .then(|| point.distance(foot))
}

/// Check if the head runs into its own body.
///
/// Bodies with fewer than five waypoints cannot fold onto themselves. The
/// head segment and the two segments behind it are never tested: they meet
/// the head at corners by construction.
pub fn is_self_colliding(snake: &SnakePath) -> bool {
    if snake.len() < SELF_COLLISION_MIN_WAYPOINTS {
        return false;
    }

    let head = snake.head();
    let reachable = snake.segments().len() - SELF_COLLISION_SKIP_SEGMENTS;
    snake
        .segments()
        .take(reachable)
        .rev()
        .filter_map(|segment| perpendicular_distance(&segment, head))
        .any(|distance| distance < BODY_HALF_WIDTH)
}

/// Check if the round is over for this body on a `width x height` board
pub fn is_terminal(snake: &SnakePath, width: u32, height: u32) -> bool {
    is_out_of_bounds(snake.head(), width, height) || is_self_colliding(snake)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Five-waypoint hook whose head comes back up toward the first segment
    /// (the row y = 2.5), stopping `gap` units below it
    fn hook(gap: f64) -> SnakePath {
        SnakePath::new(vec![
            DVec2::new(2.5, 2.5),
            DVec2::new(6.5, 2.5),
            DVec2::new(6.5, 4.5),
            DVec2::new(4.5, 4.5),
            DVec2::new(4.5, 2.5 + gap),
        ])
        .unwrap()
    }

    #[test]
    fn test_bounds() {
        assert!(!is_out_of_bounds(DVec2::new(0.0, 0.0), 17, 15));
        assert!(!is_out_of_bounds(DVec2::new(17.0, 15.0), 17, 15));
        assert!(!is_out_of_bounds(DVec2::new(8.5, 7.5), 17, 15));
        assert!(is_out_of_bounds(DVec2::new(17.3, 7.5), 17, 15));
        assert!(is_out_of_bounds(DVec2::new(-0.1, 7.5), 17, 15));
        assert!(is_out_of_bounds(DVec2::new(8.5, 15.2), 17, 15));
        assert!(is_out_of_bounds(DVec2::new(8.5, -0.2), 17, 15));
    }

    #[test]
    fn test_head_close_to_body_collides() {
        assert!(is_self_colliding(&hook(0.3)));
        assert!(is_terminal(&hook(0.3), 17, 15));
    }

    #[test]
    fn test_head_clear_of_body_survives() {
        assert!(!is_self_colliding(&hook(0.7)));
        assert!(!is_terminal(&hook(0.7), 17, 15));
    }

    #[test]
    fn test_short_bodies_never_self_collide() {
        // Four waypoints: head right next to the tail end, still no collision
        let snake = SnakePath::new(vec![
            DVec2::new(2.5, 2.5),
            DVec2::new(4.5, 2.5),
            DVec2::new(4.5, 3.5),
            DVec2::new(2.5, 3.5),
        ])
        .unwrap();
        assert!(!is_self_colliding(&snake));
    }

    #[test]
    fn test_projection_outside_segment_is_ignored() {
        // Head is level with the first segment's line but past its end
        let snake = SnakePath::new(vec![
            DVec2::new(2.5, 2.5),
            DVec2::new(4.5, 2.5),
            DVec2::new(4.5, 4.5),
            DVec2::new(7.5, 4.5),
            DVec2::new(7.5, 2.7),
        ])
        .unwrap();
        assert!(!is_self_colliding(&snake));
    }

    #[test]
    fn test_segments_near_head_are_skipped() {
        // Head segment and its two predecessors touch the head at corners
        let snake = SnakePath::new(vec![
            DVec2::new(0.5, 9.5),
            DVec2::new(0.5, 8.5),
            DVec2::new(2.5, 8.5),
            DVec2::new(2.5, 7.5),
            DVec2::new(2.2, 7.5),
        ])
        .unwrap();
        assert!(!is_self_colliding(&snake));
    }
}
