//! Polysnake - Snake on a continuous plane
//!
//! The snake's body is a poly-line that glides at constant speed and turns
//! only at cell centers, so motion stays rectilinear no matter how the host
//! slices time.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, movement, food, collisions)
//! - `game`: Orchestrator owning the live round (pause, best score)
//! - `settings`: Data-driven round configuration
//! - `wasm`: Browser bindings (wasm32 only)

pub mod game;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use game::Game;
pub use settings::{RoundConfig, Settings, SettingsError};
pub use sim::{Direction, GameEvent, GameState, TickInput, transition};

/// Engine constants
pub mod consts {
    use crate::sim::Direction;

    /// Absolute tolerance for the sum-of-distances containment test
    pub const CONTAINMENT_EPSILON: f64 = 1e-11;
    /// Half the body thickness; the head closer than this to its own body dies
    pub const BODY_HALF_WIDTH: f64 = 0.5;
    /// Minimum waypoint count before the body can reach the head
    pub const SELF_COLLISION_MIN_WAYPOINTS: usize = 5;
    /// Segments nearest the head that are never tested for self-collision
    /// (the head segment plus the two behind it)
    pub const SELF_COLLISION_SKIP_SEGMENTS: usize = 3;
    /// Growth per food eaten (grid units)
    pub const GROWTH_PER_FOOD: f64 = 1.0;

    /// Largest distance advanced in one substep. Shorter than a cell, so a
    /// substep crosses at most one cell center.
    pub const MAX_STEP_DISTANCE: f64 = 0.5;
    /// Maximum substeps per transition to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 10_000;

    /// Default round: 17x15 grid
    pub const DEFAULT_WIDTH: u32 = 17;
    pub const DEFAULT_HEIGHT: u32 = 15;
    /// Grid units per millisecond
    pub const DEFAULT_SPEED: f64 = 0.006;
    pub const DEFAULT_SNAKE_LENGTH: f64 = 3.0;
    pub const DEFAULT_DIRECTION: Direction = Direction::Right;
    /// Host tick cadence
    pub const DEFAULT_TICKS_PER_SECOND: u32 = 60;
}
