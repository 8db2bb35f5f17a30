//! Game configuration
//!
//! Set once when an engine is built. Persisted in LocalStorage on the web and
//! as a JSON file natively.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::platform::storage;
use crate::sim::FoodPlacement;

/// Speed choices offered to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedPreset {
    Slow,
    #[default]
    Normal,
    Fast,
    Insane,
}

impl SpeedPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedPreset::Slow => "Slow",
            SpeedPreset::Normal => "Normal",
            SpeedPreset::Fast => "Fast",
            SpeedPreset::Insane => "Insane",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "slow" => Some(SpeedPreset::Slow),
            "normal" | "norm" => Some(SpeedPreset::Normal),
            "fast" => Some(SpeedPreset::Fast),
            "insane" => Some(SpeedPreset::Insane),
            _ => None,
        }
    }

    /// Simulation steps per second for this preset
    pub fn steps_per_second(&self) -> f64 {
        match self {
            SpeedPreset::Slow => 6.0,
            SpeedPreset::Normal => 10.0,
            SpeedPreset::Fast => 14.0,
            SpeedPreset::Insane => 20.0,
        }
    }
}

/// Engine and loop configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid width in cells
    pub columns: u32,
    /// Grid height in cells
    pub rows: u32,
    /// Snake length at the start of every game
    pub initial_length: u32,
    /// Requested tick rate. The loop never runs slower than
    /// `MIN_STEPS_PER_SECOND`.
    pub steps_per_second: f64,
    /// Food placement strategy
    pub food_placement: FoodPlacement,
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            initial_length: DEFAULT_INITIAL_LENGTH,
            steps_per_second: SpeedPreset::default().steps_per_second(),
            food_placement: FoodPlacement::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Grid of the given size with every other field at its default
    pub fn with_grid(columns: u32, rows: u32) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    /// Config tuned to a speed preset
    pub fn from_preset(preset: SpeedPreset) -> Self {
        let mut config = Self::default();
        config.steps_per_second = preset.steps_per_second();
        config
    }

    /// Clamp values the engine cannot work with: empty grids, a snake longer
    /// than the grid is wide, and non-finite or non-positive rates.
    pub fn sanitized(mut self) -> Self {
        self.columns = self.columns.max(1);
        self.rows = self.rows.max(1);
        self.initial_length = self.initial_length.clamp(1, self.columns);
        if !self.steps_per_second.is_finite() || self.steps_per_second <= 0.0 {
            log::warn!(
                "Invalid steps_per_second {}, using default",
                self.steps_per_second
            );
            self.steps_per_second = SpeedPreset::default().steps_per_second();
        }
        self
    }

    /// Storage key
    const STORAGE_KEY: &'static str = "grid_snake_config";

    /// Load the persisted config, falling back to defaults
    pub fn load() -> Self {
        if let Some(json) = storage::load(Self::STORAGE_KEY) {
            match serde_json::from_str::<GameConfig>(&json) {
                Ok(config) => {
                    log::info!("Loaded config");
                    return config.sanitized();
                }
                Err(e) => log::warn!("Ignoring unreadable config: {}", e),
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Persist the config
    pub fn save(&self) {
        match serde_json::to_string(self) {
            Ok(json) => {
                if storage::save(Self::STORAGE_KEY, &json) {
                    log::info!("Config saved");
                }
            }
            Err(e) => log::warn!("Could not serialize config: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_parse() {
        assert_eq!(SpeedPreset::parse("FAST"), Some(SpeedPreset::Fast));
        assert_eq!(SpeedPreset::parse("norm"), Some(SpeedPreset::Normal));
        assert_eq!(SpeedPreset::parse("warp"), None);
        for preset in [
            SpeedPreset::Slow,
            SpeedPreset::Normal,
            SpeedPreset::Fast,
            SpeedPreset::Insane,
        ] {
            assert_eq!(SpeedPreset::parse(preset.as_str()), Some(preset));
        }
    }

    #[test]
    fn test_sanitized_clamps_degenerate_values() {
        let config = GameConfig {
            columns: 0,
            rows: 0,
            initial_length: 50,
            steps_per_second: f64::NAN,
            ..GameConfig::default()
        }
        .sanitized();
        assert_eq!(config.columns, 1);
        assert_eq!(config.rows, 1);
        assert_eq!(config.initial_length, 1);
        assert_eq!(config.steps_per_second, SpeedPreset::Normal.steps_per_second());
    }

    #[test]
    fn test_sanitized_keeps_valid_config() {
        let config = GameConfig::with_grid(8, 8);
        assert_eq!(config.clone().sanitized(), config);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"columns": 12, "seed": 9}"#).unwrap();
        assert_eq!(config.columns, 12);
        assert_eq!(config.rows, DEFAULT_ROWS);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.food_placement, FoodPlacement::Sampling);
    }
}
