//! Best score tracking
//!
//! Keeps the running maximum across games and persists it whenever it
//! improves. Stored as a bare JSON number so older saves stay readable.

use crate::platform::storage;
use crate::sim::ScoreSink;

/// Running maximum of all scores seen
#[derive(Debug, Clone, Default)]
pub struct HighScore {
    best: u32,
    /// Write through to storage on every new best
    persistent: bool,
}

impl HighScore {
    /// Storage key
    const STORAGE_KEY: &'static str = "snake_high_score_v1";

    /// In-memory tracker starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Record a score. Returns true if it is a new best.
    pub fn record(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        self.best = score;
        true
    }

    /// Parse a stored value; anything unreadable counts as no record
    fn parse(json: &str) -> Option<u32> {
        serde_json::from_str::<u32>(json.trim()).ok()
    }

    /// Load the stored best and keep it up to date from now on
    pub fn load() -> Self {
        let best = match storage::load(Self::STORAGE_KEY) {
            Some(json) => Self::parse(&json).unwrap_or_else(|| {
                log::warn!("Ignoring unreadable high score {:?}", json);
                0
            }),
            None => 0,
        };
        log::info!("High score: {}", best);
        Self {
            best,
            persistent: true,
        }
    }

    pub fn save(&self) {
        match serde_json::to_string(&self.best) {
            Ok(json) => {
                if storage::save(Self::STORAGE_KEY, &json) {
                    log::debug!("High score saved ({})", self.best);
                }
            }
            Err(e) => log::warn!("Could not serialize high score: {}", e),
        }
    }
}

impl ScoreSink for HighScore {
    fn score_changed(&mut self, score: u32) {
        if self.record(score) {
            log::info!("New high score: {}", score);
            if self.persistent {
                self.save();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::{Direction, Engine, Snake};
    use glam::IVec2;

    #[test]
    fn test_keeps_maximum() {
        let mut high = HighScore::new();
        assert!(high.record(3));
        assert!(!high.record(2));
        assert!(!high.record(3));
        assert!(high.record(5));
        high.score_changed(0);
        assert_eq!(high.best(), 5);
    }

    #[test]
    fn test_parse_stored_values() {
        assert_eq!(HighScore::parse("17"), Some(17));
        assert_eq!(HighScore::parse(" 8\n"), Some(8));
        assert_eq!(HighScore::parse("-1"), None);
        assert_eq!(HighScore::parse("lots"), None);
    }

    #[test]
    fn test_survives_restart() {
        let mut engine = Engine::with_sink(GameConfig::with_grid(10, 10), HighScore::new());
        engine.place_snake(
            Snake::straight(IVec2::new(2, 2), Direction::Right, 2),
            Direction::Right,
        );
        engine.place_food_at(IVec2::new(3, 2));
        engine.start();
        engine.advance();
        assert_eq!(engine.score(), 1);

        engine.reset();
        assert_eq!(engine.score(), 0);
        assert_eq!(engine.sink().best(), 1);
    }
}
