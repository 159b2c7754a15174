//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time is an input, never read from a clock
//! - Seeded RNG only (food placement is the single random draw)
//! - Every transition returns a new state; nothing is mutated in place
//! - No rendering or platform dependencies

pub mod collision;
pub mod food;
pub mod geometry;
pub mod movement;
pub mod path;
pub mod state;
pub mod tick;

pub use collision::{is_out_of_bounds, is_self_colliding, is_terminal};
pub use food::{free_cells, place_food};
pub use geometry::{Segment, is_opposite, unit};
pub use movement::{StepOutcome, advance, resolve_direction};
pub use path::SnakePath;
pub use state::{Direction, GameEvent, GameState};
pub use tick::{TickInput, tick, transition};
