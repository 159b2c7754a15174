//! Per-tick state transition
//!
//! Core game loop step: move, eat, collide. The distance covered by one
//! host tick is split into substeps no longer than `MAX_STEP_DISTANCE`, so
//! arbitrary elapsed times keep turns exact and never exhaust the tail.

use super::collision::is_terminal;
use super::food::place_food;
use super::movement::{advance, queue_turn};
use super::state::{Direction, GameEvent, GameState};
use crate::consts::*;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Milliseconds since the previous tick
    pub elapsed_ms: f64,
    /// Heading the player is asking for; `None` keeps the current one
    pub movement: Option<Direction>,
}

impl TickInput {
    pub fn new(elapsed_ms: f64, movement: Option<Direction>) -> Self {
        Self {
            elapsed_ms,
            movement,
        }
    }
}

/// Compute the state after one tick.
///
/// Returns the advanced state, or a freshly initialised round (flagged with
/// `GameEvent::Restarted`) if the snake hit a wall or itself. Deterministic
/// given `(state, input)`: the only randomness is the state's own RNG.
pub fn transition(state: &GameState, input: &TickInput) -> GameState {
    let mut next = state.clone();
    next.events.clear();
    next.time_ticks += 1;

    let distance = state.speed() * input.elapsed_ms;
    if !distance.is_finite() || distance < 0.0 {
        log::warn!("Ignoring tick with elapsed time {} ms", input.elapsed_ms);
        return next;
    }

    next.pending_turn = queue_turn(next.direction, next.pending_turn, input.movement);

    let mut remaining = distance;
    let mut substeps = 0;
    loop {
        let step = remaining.min(MAX_STEP_DISTANCE.min(next.snake.arc_length() / 2.0));
        if step <= 0.0 && remaining > 0.0 {
            log::warn!("Body too short to advance; dropping {} units", remaining);
            break;
        }

        if !step_once(&mut next, step) {
            return next.restarted();
        }

        remaining -= step;
        substeps += 1;
        if remaining <= 0.0 {
            break;
        }
        if substeps >= MAX_SUBSTEPS {
            log::warn!("Substep limit reached; dropping {} units", remaining);
            break;
        }
    }

    next
}

/// Advance the state in place by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    *state = transition(state, input);
}

/// One substep: move, eat, collide. Returns false if the round is over.
fn step_once(state: &mut GameState, distance: f64) -> bool {
    let step = advance(&state.snake, state.direction, state.pending_turn, distance);
    state.snake = step.snake;
    state.direction = step.direction;
    state.pending_turn = step.pending_turn;
    if let Some(at) = step.turned_at {
        state.events.push(GameEvent::Turned {
            at,
            direction: state.direction,
        });
    }

    eat_food(state);

    !is_terminal(&state.snake, state.width(), state.height())
}

/// Grow and respawn food if the head segment passes over it
fn eat_food(state: &mut GameState) {
    let Some(food) = state.food else {
        return;
    };
    if !state.snake.head_segment().contains_point(food) {
        return;
    }

    if !state.snake.extend_tail(GROWTH_PER_FOOD) {
        return;
    }
    state.score += 1;
    let (width, height) = (state.width(), state.height());
    let snake = state.snake.clone();
    state.food = place_food(width, height, &snake, state.rng_mut());
    state.events.push(GameEvent::FoodEaten {
        at: food,
        score: state.score,
    });
    log::debug!("Food eaten at {:?}, score {}", food, state.score);
}
