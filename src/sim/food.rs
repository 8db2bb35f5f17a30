//! Food placement

use glam::IVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, GridSize};
use super::state::Snake;
use crate::consts::FOOD_PLACEMENT_ATTEMPTS;

/// How a new food cell is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FoodPlacement {
    /// Rejection sampling with a fixed attempt budget. When the budget runs
    /// out the last sample is used even if the snake covers it.
    #[default]
    Sampling,
    /// Uniform pick among the free cells. Falls back to `Sampling` only when
    /// no free cell exists.
    FreeCells,
}

/// Choose the next food cell for `snake` on `grid`. Never loops forever.
pub fn place_food<R: Rng>(
    rng: &mut R,
    grid: GridSize,
    snake: &Snake,
    strategy: FoodPlacement,
) -> Cell {
    match strategy {
        FoodPlacement::Sampling => sample_free_cell(rng, grid, snake),
        FoodPlacement::FreeCells => {
            let free: Vec<Cell> = grid.cells().filter(|c| !snake.occupies(*c)).collect();
            if free.is_empty() {
                log::debug!("No free cell left for food, sampling instead");
                sample_free_cell(rng, grid, snake)
            } else {
                free[rng.random_range(0..free.len())]
            }
        }
    }
}

fn sample_free_cell<R: Rng>(rng: &mut R, grid: GridSize, snake: &Snake) -> Cell {
    first_unoccupied(snake, || random_cell(rng, grid))
}

/// Draw up to `FOOD_PLACEMENT_ATTEMPTS` cells, returning the first one the
/// snake does not cover, or the last draw once the budget is spent.
fn first_unoccupied(snake: &Snake, mut sample: impl FnMut() -> Cell) -> Cell {
    let mut candidate = sample();
    let mut attempts = 1;
    while snake.occupies(candidate) && attempts < FOOD_PLACEMENT_ATTEMPTS {
        candidate = sample();
        attempts += 1;
    }
    if snake.occupies(candidate) {
        log::debug!(
            "Food placement gave up after {} attempts, using occupied cell {}",
            attempts,
            candidate
        );
    }
    candidate
}

fn random_cell<R: Rng>(rng: &mut R, grid: GridSize) -> Cell {
    IVec2::new(
        rng.random_range(0..grid.columns) as i32,
        rng.random_range(0..grid.rows) as i32,
    )
}
