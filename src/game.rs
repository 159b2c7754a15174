//! Live round orchestration
//!
//! `Game` owns the current `GameState` and threads it through `transition`
//! once per host tick. Everything stateful that is not simulation lives here:
//! pause and the best score of the session.

use glam::DVec2;

use crate::settings::{Settings, SettingsError};
use crate::sim::{Direction, GameEvent, GameState, TickInput, transition};

/// A running session of rounds
#[derive(Debug, Clone)]
pub struct Game {
    settings: Settings,
    state: GameState,
    paused: bool,
    best_score: u32,
    rounds: u32,
}

impl Game {
    /// Start a session; settings are validated first
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        let state = GameState::new(settings.round, seed);
        log::info!(
            "New game {}x{} (seed {}), food at {:?}",
            settings.round.width,
            settings.round.height,
            seed,
            state.food
        );
        Ok(Self {
            settings,
            state,
            paused: false,
            best_score: 0,
            rounds: 1,
        })
    }

    /// Advance by `elapsed_ms` with the currently requested heading.
    /// Does nothing while paused.
    pub fn process(&mut self, elapsed_ms: f64, movement: Option<Direction>) {
        if self.paused {
            return;
        }
        self.state = transition(&self.state, &TickInput::new(elapsed_ms, movement));

        for event in &self.state.events {
            if let GameEvent::Restarted { final_score } = event {
                self.rounds += 1;
                log::info!("Round over with score {}; starting round {}", final_score, self.rounds);
            }
        }
        self.best_score = self.best_score.max(self.state.score);
    }

    /// Pause or resume; returns true if now paused
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        log::info!("{}", if self.paused { "Paused" } else { "Resumed" });
        self.paused
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Body waypoints, tail end first
    pub fn snake(&self) -> &[DVec2] {
        self.state.snake.points()
    }

    pub fn food(&self) -> Option<DVec2> {
        self.state.food
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    /// Highest score reached this session
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn direction(&self) -> Direction {
        self.state.direction
    }

    pub fn width(&self) -> u32 {
        self.state.width()
    }

    pub fn height(&self) -> u32 {
        self.state.height()
    }

    /// True if the last processed tick ended a round
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Rounds started this session, current one included
    pub fn rounds(&self) -> u32 {
        self.rounds
    }
}
