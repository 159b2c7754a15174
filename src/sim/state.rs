//! Game state and core simulation types
//!
//! A `GameState` is one complete snapshot of a round. Transitions never
//! mutate a state in place; they produce the next value.

use glam::DVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::food::place_food;
use super::path::SnakePath;
use crate::settings::RoundConfig;

/// One of the four cardinal headings. Screen coordinates: y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Unit vector for this heading
    pub fn vector(self) -> DVec2 {
        match self {
            Direction::Up => DVec2::new(0.0, -1.0),
            Direction::Right => DVec2::new(1.0, 0.0),
            Direction::Down => DVec2::new(0.0, 1.0),
            Direction::Left => DVec2::new(-1.0, 0.0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Heading for an exact cardinal unit vector; anything else is `None`
    pub fn from_vector(v: DVec2) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.vector() == v)
    }

    /// Host-facing numeric code (0 = Up, 1 = Right, 2 = Down, 3 = Left)
    pub fn from_code(code: u32) -> Option<Direction> {
        Direction::ALL.get(code as usize).copied()
    }

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Something notable that happened during the last transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// Heading changed at a breakpoint
    Turned { at: DVec2, direction: Direction },
    /// Food eaten at `at`; `score` is the new score
    FoodEaten { at: DVec2, score: u32 },
    /// Wall or self hit; the round restarted from its configuration
    Restarted { final_score: u32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Configuration the round was created from (kept for restart)
    pub config: RoundConfig,
    /// Current heading
    pub direction: Direction,
    /// Accepted turn waiting for the next cell-center crossing
    pub pending_turn: Option<Direction>,
    /// Body poly-line, tail end first, head last
    pub snake: SnakePath,
    /// Current food; `None` only when the body covers every cell
    pub food: Option<DVec2>,
    /// Food eaten this round
    pub score: u32,
    /// Transitions applied this round
    pub time_ticks: u64,
    /// Events from the most recent transition
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    /// Food RNG; the stream continues across restarts
    rng: Pcg32,
}

impl GameState {
    /// Create a new round with the given seed
    pub fn new(config: RoundConfig, seed: u64) -> Self {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }

    /// Create a new round drawing food from an existing RNG stream.
    ///
    /// The head sits on the cell center nearest the middle of the grid, the
    /// tail runs `initial_length` units behind it.
    pub fn with_rng(config: RoundConfig, mut rng: Pcg32) -> Self {
        let head = DVec2::new(
            (f64::from(config.width) / 2.0).round() - 0.5,
            (f64::from(config.height) / 2.0).round() - 0.5,
        );
        let snake = SnakePath::straight(head, config.initial_direction, config.initial_length);
        let food = place_food(config.width, config.height, &snake, &mut rng);

        Self {
            config,
            direction: config.initial_direction,
            pending_turn: None,
            snake,
            food,
            score: 0,
            time_ticks: 0,
            events: Vec::new(),
            rng,
        }
    }

    /// Fresh round from this state's configuration, continuing its RNG
    pub fn restarted(&self) -> Self {
        let mut state = Self::with_rng(self.config, self.rng.clone());
        state.events.push(GameEvent::Restarted {
            final_score: self.score,
        });
        state
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.config.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.config.height
    }

    /// Grid units per millisecond
    #[inline]
    pub fn speed(&self) -> f64 {
        self.config.speed
    }

    /// Current head position
    #[inline]
    pub fn head(&self) -> DVec2 {
        self.snake.head()
    }

    /// True if the last transition ended the round
    pub fn is_over(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, GameEvent::Restarted { .. }))
    }

    pub(crate) fn rng_mut(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }
}
