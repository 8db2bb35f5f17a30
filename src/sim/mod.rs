//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Discrete ticks only, no clocks
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;

pub use engine::{Engine, ScoreSink, TickOutcome};
pub use food::{FoodPlacement, place_food};
pub use grid::{Cell, Direction, GridSize};
pub use state::{Collision, GamePhase, Snake, Snapshot};
