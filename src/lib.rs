//! Grid Snake - a fixed-timestep snake game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (snake, food, collisions, phases)
//! - `driver`: Fixed timestep loop turning frame timestamps into ticks
//! - `renderer`: Snapshot consumers (JSON for the web host, ASCII)
//! - `platform`: Input mapping, storage and browser bindings
//! - `config`: Grid size, speed and food placement settings

pub mod config;
pub mod driver;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{GameConfig, SpeedPreset};
pub use driver::{LoopDriver, Renderer};
pub use highscores::HighScore;
pub use sim::{Direction, Engine, GamePhase, Snapshot};

/// Game configuration constants
pub mod consts {
    /// Default grid size
    pub const DEFAULT_COLUMNS: u32 = 28;
    pub const DEFAULT_ROWS: u32 = 20;
    pub const DEFAULT_INITIAL_LENGTH: u32 = 4;

    /// Slowest effective tick rate; lower requests are clamped up to this
    pub const MIN_STEPS_PER_SECOND: f64 = 2.0;

    /// Random samples tried before food is allowed onto the snake
    pub const FOOD_PLACEMENT_ATTEMPTS: u32 = 500;

    /// Points per food eaten
    pub const SCORE_PER_FOOD: u32 = 1;

    /// Drag distance (pixels) before a touch counts as a swipe
    pub const SWIPE_THRESHOLD_PX: f32 = 24.0;
}
