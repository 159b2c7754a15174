//! Round configuration
//!
//! Loaded from JSON (a file natively, LocalStorage on the web). Every field
//! is optional in the JSON; missing fields take the classic defaults.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Direction;

/// Configuration problems found while loading or validating settings
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("grid width must be at least 1")]
    ZeroWidth,
    #[error("grid height must be at least 1")]
    ZeroHeight,
    #[error("speed must be a positive number of grid units per ms, got {0}")]
    NonPositiveSpeed(f64),
    #[error("initial snake length must be positive, got {0}")]
    NonPositiveLength(f64),
    #[error("initial snake length {length} does not fit a {width}x{height} grid")]
    SnakeTooLong { length: f64, width: u32, height: u32 },
    #[error("tick rate must be at least 1 per second")]
    ZeroTickRate,
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything a round needs to (re)start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundConfig {
    /// Grid width in cells
    pub width: u32,
    /// Grid height in cells
    pub height: u32,
    /// Grid units per millisecond
    pub speed: f64,
    /// Body length at the start of a round (grid units)
    pub initial_length: f64,
    /// Heading at the start of a round
    pub initial_direction: Direction,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            speed: DEFAULT_SPEED,
            initial_length: DEFAULT_SNAKE_LENGTH,
            initial_direction: DEFAULT_DIRECTION,
        }
    }
}

impl RoundConfig {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.width == 0 {
            return Err(SettingsError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(SettingsError::ZeroHeight);
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return Err(SettingsError::NonPositiveSpeed(self.speed));
        }
        if !(self.initial_length.is_finite() && self.initial_length > 0.0) {
            return Err(SettingsError::NonPositiveLength(self.initial_length));
        }
        // Leave at least one free cell for the first food
        let cells = f64::from(self.width) * f64::from(self.height);
        if self.initial_length >= cells - 1.0 {
            return Err(SettingsError::SnakeTooLong {
                length: self.initial_length,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Round geometry and pacing
    pub round: RoundConfig,
    /// How often the host drives a tick
    pub ticks_per_second: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            round: RoundConfig::default(),
            ticks_per_second: DEFAULT_TICKS_PER_SECOND,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "polysnake_settings";

    pub fn validate(&self) -> Result<(), SettingsError> {
        self.round.validate()?;
        if self.ticks_per_second == 0 {
            return Err(SettingsError::ZeroTickRate);
        }
        Ok(())
    }

    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Host tick interval in milliseconds
    pub fn tick_interval_ms(&self) -> f64 {
        1000.0 / f64::from(self.ticks_per_second.max(1))
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_file(path: &std::path::Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("parsing settings from {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }
}
