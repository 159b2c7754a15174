//! Polysnake entry point
//!
//! Natively this runs a headless session driven by a greedy autopilot at
//! the configured tick rate and reports how it went. The browser build
//! starts from `polysnake::wasm` instead.

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;

    use anyhow::Result;
    use clap::Parser;
    use polysnake::{Direction, Game, Settings};

    /// Run a headless Polysnake session
    #[derive(Debug, Parser)]
    #[command(name = "polysnake", version, about)]
    pub struct Args {
        /// JSON settings file (defaults are used when omitted)
        #[arg(long)]
        pub config: Option<PathBuf>,
        /// Seed for food placement (random when omitted)
        #[arg(long)]
        pub seed: Option<u64>,
        /// Simulated seconds to play
        #[arg(long, default_value_t = 60.0)]
        pub seconds: f64,
    }

    /// Head for the food: close the horizontal gap first, then the vertical
    /// one, never asking for a reversal
    fn steer(game: &Game) -> Option<Direction> {
        let food = game.food()?;
        let head = *game.snake().last()?;
        let delta = food - head;

        let horizontal = if delta.x > 0.0 { Direction::Right } else { Direction::Left };
        let vertical = if delta.y > 0.0 { Direction::Down } else { Direction::Up };
        let mut wanted = Vec::with_capacity(2);
        if delta.x.abs() >= 0.5 {
            wanted.push(horizontal);
        }
        if delta.y.abs() >= 0.5 {
            wanted.push(vertical);
        }
        wanted
            .into_iter()
            .find(|&d| d != game.direction().opposite())
    }

    pub fn run(args: Args) -> Result<()> {
        let settings = match &args.config {
            Some(path) => Settings::load_file(path)?,
            None => Settings::default(),
        };
        let seed = args.seed.unwrap_or_else(rand::random);
        let interval = settings.tick_interval_ms();
        let mut game = Game::new(settings, seed)?;

        let ticks = (args.seconds * 1000.0 / interval).ceil() as u64;
        for _ in 0..ticks {
            let movement = steer(&game);
            game.process(interval, movement);
        }

        log::info!("Finished {} ticks", ticks);
        println!(
            "seed {}: {} rounds, best score {}, current score {}",
            seed,
            game.rounds(),
            game.best_score(),
            game.score()
        );
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();
    log::info!("Polysnake (native) starting...");
    headless::run(headless::Args::parse())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is polysnake::wasm::start, this is just to satisfy the compiler
}
