//! Browser bindings
//!
//! The page owns the canvas, keyboard and timer; it calls `process` once per
//! interval with the measured elapsed time and the held arrow key.

use wasm_bindgen::prelude::*;

use crate::game::Game;
use crate::settings::Settings;
use crate::sim::Direction;

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Polysnake starting...");
}

/// Game handle exported to JavaScript
#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    /// Start a session from LocalStorage settings (or defaults)
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Result<WasmGame, JsValue> {
        let game = Game::new(Settings::load(), u64::from(seed))
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmGame { game })
    }

    /// Start a session from a JSON settings string
    #[wasm_bindgen(js_name = fromJson)]
    pub fn from_json(json: &str, seed: u32) -> Result<WasmGame, JsValue> {
        let settings = Settings::from_json(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        let game = Game::new(settings, u64::from(seed)).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Ok(WasmGame { game })
    }

    /// Advance the round. `movement`: 0 = up, 1 = right, 2 = down, 3 = left;
    /// anything else (or undefined) keeps the current heading.
    pub fn process(&mut self, elapsed_ms: f64, movement: Option<u32>) {
        self.game
            .process(elapsed_ms, movement.and_then(Direction::from_code));
    }

    #[wasm_bindgen(js_name = togglePause)]
    pub fn toggle_pause(&mut self) -> bool {
        self.game.toggle_pause()
    }

    /// Waypoints flattened as `[x0, y0, x1, y1, ...]`, tail end first
    pub fn snake(&self) -> Vec<f64> {
        self.game.snake().iter().flat_map(|p| [p.x, p.y]).collect()
    }

    /// Food as `[x, y]`, empty when the board is full
    pub fn food(&self) -> Vec<f64> {
        self.game.food().map(|f| vec![f.x, f.y]).unwrap_or_default()
    }

    #[wasm_bindgen(getter)]
    pub fn score(&self) -> u32 {
        self.game.score()
    }

    #[wasm_bindgen(getter, js_name = bestScore)]
    pub fn best_score(&self) -> u32 {
        self.game.best_score()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.game.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.game.height()
    }

    #[wasm_bindgen(js_name = isOver)]
    pub fn is_over(&self) -> bool {
        self.game.is_over()
    }

    #[wasm_bindgen(js_name = tickIntervalMs)]
    pub fn tick_interval_ms(&self) -> f64 {
        self.game.settings().tick_interval_ms()
    }
}
