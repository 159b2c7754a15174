//! Food placement
//!
//! Food always sits on a cell center the body does not cover. Every spawn
//! enumerates the whole grid (O(width x height)) and picks uniformly among
//! the free centers.

use glam::DVec2;
use rand::Rng;
use rand::seq::IndexedRandom;

use super::path::SnakePath;

/// Cell centers not covered by any body segment, column by column
pub fn free_cells(width: u32, height: u32, snake: &SnakePath) -> Vec<DVec2> {
    (0..width)
        .flat_map(|x| (0..height).map(move |y| DVec2::new(f64::from(x) + 0.5, f64::from(y) + 0.5)))
        .filter(|&center| !snake.covers(center))
        .collect()
}

/// Pick a free cell center uniformly at random.
///
/// `None` when the body covers every cell; the caller keeps the round
/// running without food.
pub fn place_food<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    snake: &SnakePath,
    rng: &mut R,
) -> Option<DVec2> {
    let candidates = free_cells(width, height, snake);
    let food = candidates.choose(rng).copied();
    if food.is_none() {
        log::warn!("No free cell left for food on {}x{} grid", width, height);
    }
    food
}
