//! Head advance, tail trim and turning
//!
//! The head moves a distance along the current heading and the tail is
//! trimmed by the same amount, so arc length is conserved. A turn never
//! happens at the head's raw position: it is placed on the first cell
//! center the head crosses (the breakpoint), and the rest of the distance is
//! spent in the new heading from there. Without a crossing the turn stays
//! pending.

use glam::DVec2;

use super::path::SnakePath;
use super::state::Direction;

/// Result of advancing the body by one step
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    pub snake: SnakePath,
    pub direction: Direction,
    /// Turn still waiting for a cell-center crossing
    pub pending_turn: Option<Direction>,
    /// Breakpoint inserted this step, if the heading changed
    pub turned_at: Option<DVec2>,
}

/// Heading after a request: a cardinal request that does not reverse the
/// current heading is adopted, anything else keeps the current heading.
pub fn resolve_direction(current: Direction, requested: Option<Direction>) -> Direction {
    match requested {
        Some(next) if next != current.opposite() => next,
        _ => current,
    }
}

/// Fold a new request into the pending turn.
///
/// - no request: keep what is pending
/// - reversal: ignored, keep what is pending
/// - current heading: cancels the pending turn
/// - any other heading: replaces the pending turn
pub fn queue_turn(
    current: Direction,
    pending: Option<Direction>,
    requested: Option<Direction>,
) -> Option<Direction> {
    let Some(next) = requested else {
        return pending;
    };
    if resolve_direction(current, requested) != next {
        return pending;
    }
    (next != current).then_some(next)
}

/// First cell center crossed moving from `from` to `to` along `direction`.
///
/// A crossing is detected when the coordinate on the travel axis rounds to a
/// different integer; the center sits half a unit from the old rounded value
/// toward the new one.
fn breakpoint(from: DVec2, to: DVec2, direction: Direction) -> Option<DVec2> {
    let (old, new) = if direction.is_horizontal() {
        (from.x, to.x)
    } else {
        (from.y, to.y)
    };
    let (old_rounded, new_rounded) = (old.round(), new.round());
    if old_rounded == new_rounded {
        return None;
    }
    let center = old_rounded + if new_rounded > old_rounded { 0.5 } else { -0.5 };
    Some(if direction.is_horizontal() {
        DVec2::new(center, from.y)
    } else {
        DVec2::new(from.x, center)
    })
}

fn push_distinct(points: &mut Vec<DVec2>, point: DVec2) {
    if points.last() != Some(&point) {
        points.push(point);
    }
}

/// Advance the snake by `distance` grid units.
///
/// `turn` is the pending turn (already filtered by `queue_turn`). If the
/// head crosses a cell center during this step the turn is taken there;
/// otherwise the body moves straight and the turn stays pending.
pub fn advance(
    snake: &SnakePath,
    direction: Direction,
    turn: Option<Direction>,
    distance: f64,
) -> StepOutcome {
    let old_head = snake.head();

    let mut points = snake.shrink_tail(distance).unwrap_or_else(|| {
        log::warn!(
            "Step of {} exceeds body length {}; tail collapsed to head",
            distance,
            snake.arc_length()
        );
        Vec::new()
    });

    // A head that is still sitting on its breakpoint is a corner and must
    // survive as a waypoint
    let heading = direction.vector();
    let head_vector = snake.head_segment().vector();
    let head_is_corner = head_vector.perp_dot(heading) != 0.0 || head_vector.dot(heading) < 0.0;
    if head_is_corner || points.is_empty() {
        push_distinct(&mut points, old_head);
    }

    let naive_head = old_head + heading * distance;
    let turn = turn.filter(|&t| t != direction && t != direction.opposite());

    // Leaving the center the last turn was taken on is not a new crossing;
    // turning there again would fold the body back onto itself
    let crossing = turn.and_then(|t| {
        breakpoint(old_head, naive_head, direction)
            .filter(|&bp| !(head_is_corner && bp == old_head))
            .map(|bp| (t, bp))
    });
    let outcome = match crossing {
        Some((next, bp)) => {
            let travelled = old_head.distance(bp);
            let leftover = (distance - travelled).max(0.0);
            push_distinct(&mut points, bp);
            push_distinct(&mut points, bp + next.vector() * leftover);
            log::debug!("Turned {:?} -> {:?} at {:?}", direction, next, bp);
            (next, None, Some(bp))
        }
        None => {
            push_distinct(&mut points, naive_head);
            (direction, turn, None)
        }
    };

    let snake = SnakePath::new(points).unwrap_or_else(|| {
        log::warn!("Step collapsed the body; keeping previous path");
        snake.clone()
    });
    let (direction, pending_turn, turned_at) = outcome;
    StepOutcome {
        snake,
        direction,
        pending_turn,
        turned_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::geometry::is_opposite;
    use proptest::prelude::*;

    const EPS: f64 = 1e-9;

    fn close(a: DVec2, b: DVec2) -> bool {
        (a - b).length() < EPS
    }

    /// Straight body of length 3 with its head at (5.5, 5.5), heading right
    fn body_heading_right() -> SnakePath {
        SnakePath::straight(DVec2::new(5.5, 5.5), Direction::Right, 3.0)
    }

    #[test]
    fn test_resolve_direction_rejects_reversal() {
        for current in Direction::ALL {
            assert_eq!(resolve_direction(current, Some(current.opposite())), current);
            assert_eq!(resolve_direction(current, None), current);
            assert_eq!(resolve_direction(current, Some(current)), current);
        }
        assert_eq!(
            resolve_direction(Direction::Right, Some(Direction::Up)),
            Direction::Up
        );
    }

    #[test]
    fn test_queue_turn() {
        let right = Direction::Right;
        assert_eq!(queue_turn(right, None, Some(Direction::Up)), Some(Direction::Up));
        assert_eq!(queue_turn(right, Some(Direction::Up), None), Some(Direction::Up));
        assert_eq!(
            queue_turn(right, Some(Direction::Up), Some(Direction::Left)),
            Some(Direction::Up)
        );
        assert_eq!(
            queue_turn(right, Some(Direction::Up), Some(Direction::Down)),
            Some(Direction::Down)
        );
        assert_eq!(queue_turn(right, Some(Direction::Up), Some(right)), None);
    }

    #[test]
    fn test_straight_move_conserves_length() {
        let step = advance(&body_heading_right(), Direction::Right, None, 0.4);
        let points = step.snake.points();
        assert_eq!(points.len(), 2);
        assert!(close(points[0], DVec2::new(2.9, 5.5)));
        assert!(close(points[1], DVec2::new(5.9, 5.5)));
        assert!((step.snake.arc_length() - 3.0).abs() < EPS);
        assert_eq!(step.direction, Direction::Right);
        assert_eq!(step.turned_at, None);
    }

    #[test]
    fn test_turn_lands_on_cell_center() {
        // Head at (5.5, 5.5) heading right, turning down. Moving 1.2 units
        // crosses the boundary at x = 6.0 and reaches the next center at
        // x = 6.5, where the turn happens; 0.2 units are spent going down.
        let step = advance(&body_heading_right(), Direction::Right, Some(Direction::Down), 1.2);

        assert_eq!(step.direction, Direction::Down);
        assert_eq!(step.pending_turn, None);
        assert_eq!(step.turned_at, Some(DVec2::new(6.5, 5.5)));

        let points = step.snake.points();
        assert_eq!(points.len(), 3);
        assert!(close(points[0], DVec2::new(3.7, 5.5)));
        assert_eq!(points[1], DVec2::new(6.5, 5.5));
        assert!(close(points[2], DVec2::new(6.5, 5.7)));
        // No diagonal segment around the breakpoint
        assert_eq!(points[0].y, points[1].y);
        assert_eq!(points[1].x, points[2].x);
        assert!(step.snake.is_rectilinear());
        assert!((step.snake.arc_length() - 3.0).abs() < EPS);
    }

    #[test]
    fn test_turn_without_crossing_stays_pending() {
        // 5.5 -> 5.9 stays in the same rounded cell
        let step = advance(&body_heading_right(), Direction::Right, Some(Direction::Up), 0.4);
        assert_eq!(step.direction, Direction::Right);
        assert_eq!(step.pending_turn, Some(Direction::Up));
        assert_eq!(step.turned_at, None);
        assert_eq!(step.snake.len(), 2);

        // Next step crosses 6.5 and takes the pending turn there
        let next = advance(&step.snake, step.direction, step.pending_turn, 0.7);
        assert_eq!(next.direction, Direction::Up);
        assert_eq!(next.turned_at, Some(DVec2::new(6.5, 5.5)));
        assert!(close(next.snake.head(), DVec2::new(6.5, 5.4)));
        assert!(next.snake.is_rectilinear());
    }

    #[test]
    fn test_turn_moving_left_takes_current_center() {
        // Leaving x = 5.5 leftward changes the rounded value immediately
        let snake = SnakePath::straight(DVec2::new(5.5, 5.5), Direction::Left, 3.0);
        let step = advance(&snake, Direction::Left, Some(Direction::Down), 0.25);
        assert_eq!(step.turned_at, Some(DVec2::new(5.5, 5.5)));
        assert_eq!(step.snake.head(), DVec2::new(5.5, 5.75));
    }

    #[test]
    fn test_turn_with_zero_leftover_keeps_corner() {
        // 5.3 -> 5.5 reaches the center exactly; the head stops on the corner
        let snake = SnakePath::straight(DVec2::new(5.3, 5.5), Direction::Right, 3.0);
        let step = advance(&snake, Direction::Right, Some(Direction::Down), 0.2);
        assert_eq!(step.direction, Direction::Down);
        assert_eq!(step.snake.head(), DVec2::new(5.5, 5.5));
        assert_eq!(step.snake.len(), 2);

        // The corner stays a waypoint once the head moves off it
        let next = advance(&step.snake, step.direction, None, 0.5);
        let points = next.snake.points();
        assert_eq!(points.len(), 3);
        assert_eq!(points[1], DVec2::new(5.5, 5.5));
        assert_eq!(points[2], DVec2::new(5.5, 6.0));
        assert!(next.snake.is_rectilinear());
        assert!((next.snake.arc_length() - 3.0).abs() < EPS);
    }

    #[test]
    fn test_no_second_turn_on_the_same_center() {
        // Turned up with zero leftover at (5.5, 5.5); asking for left right
        // away must not fold the body back along the row it came from
        let snake = SnakePath::new(vec![DVec2::new(2.5, 5.5), DVec2::new(5.5, 5.5)]).unwrap();
        let step = advance(&snake, Direction::Up, Some(Direction::Left), 0.25);
        assert_eq!(step.direction, Direction::Up);
        assert_eq!(step.pending_turn, Some(Direction::Left));
        let points = step.snake.points();
        assert_eq!(points[points.len() - 2], DVec2::new(5.5, 5.5));
        assert_eq!(step.snake.head(), DVec2::new(5.5, 5.25));
    }

    #[test]
    fn test_reversal_request_is_ignored() {
        let step = advance(&body_heading_right(), Direction::Right, Some(Direction::Left), 1.2);
        assert_eq!(step.direction, Direction::Right);
        assert_eq!(step.pending_turn, None);
        assert_eq!(step.snake.len(), 2);
    }

    #[test]
    fn test_overlength_step_does_not_produce_nan() {
        let step = advance(&body_heading_right(), Direction::Right, None, 10.0);
        assert!(step.snake.points().iter().all(|p| p.is_finite()));
        assert!(step.snake.len() >= 2);
    }

    proptest! {
        #[test]
        fn prop_steps_conserve_arc_length(
            steps in proptest::collection::vec((0.0f64..0.5, proptest::option::of(0u32..4)), 1..60)
        ) {
            let mut snake = SnakePath::straight(DVec2::new(50.5, 50.5), Direction::Right, 4.0);
            let mut direction = Direction::Right;
            let mut pending = None;
            for (distance, request) in steps {
                let request = request.and_then(Direction::from_code);
                pending = queue_turn(direction, pending, request);
                let step = advance(&snake, direction, pending, distance);
                snake = step.snake;
                direction = step.direction;
                pending = step.pending_turn;
                prop_assert!((snake.arc_length() - 4.0).abs() < 1e-9);
                prop_assert!(snake.is_rectilinear());
                let segments: Vec<_> = snake.segments().collect();
                for pair in segments.windows(2) {
                    prop_assert!(!is_opposite(pair[0].vector(), pair[1].vector()));
                }
            }
        }
    }
}
