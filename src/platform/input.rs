//! Player input mapping
//!
//! Keyboard keys and touch swipes become discrete commands; the engine never
//! sees raw device events.

use glam::Vec2;

use crate::consts::SWIPE_THRESHOLD_PX;
use crate::sim::{Direction, Engine, GamePhase, ScoreSink};

/// A discrete player intent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Steer(Direction),
    /// Start, pause or resume
    TogglePause,
    /// Abandon the current game and lay out a new one
    Restart,
    /// Click or tap on the board: starts or resumes, never pauses
    Tap,
}

impl InputCommand {
    /// Apply the command to `engine`
    pub fn apply<S: ScoreSink>(self, engine: &mut Engine<S>) {
        match self {
            InputCommand::Steer(direction) => {
                engine.steer(direction);
            }
            InputCommand::TogglePause => engine.toggle_pause(),
            InputCommand::Restart => {
                log::info!("Restart requested");
                engine.reset();
            }
            InputCommand::Tap => {
                if matches!(engine.phase(), GamePhase::Idle | GamePhase::Paused) {
                    engine.toggle_pause();
                }
            }
        }
    }
}

/// Map a key name (as in `KeyboardEvent.key`) to a command
pub fn command_for_key(key: &str) -> Option<InputCommand> {
    let command = match key.to_lowercase().as_str() {
        "arrowup" | "w" => InputCommand::Steer(Direction::Up),
        "arrowdown" | "s" => InputCommand::Steer(Direction::Down),
        "arrowleft" | "a" => InputCommand::Steer(Direction::Left),
        "arrowright" | "d" => InputCommand::Steer(Direction::Right),
        " " | "spacebar" => InputCommand::TogglePause,
        "enter" => InputCommand::Restart,
        _ => return None,
    };
    Some(command)
}

/// Turns a touch drag into at most one heading
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    start: Option<Vec2>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some(Vec2::new(x, y));
    }

    /// Feed a touch move. Once the drag passes the threshold on either axis
    /// the dominant axis decides the heading and the gesture is consumed.
    pub fn moved(&mut self, x: f32, y: f32) -> Option<Direction> {
        let start = self.start?;
        let delta = Vec2::new(x, y) - start;
        let abs = delta.abs();
        if abs.x < SWIPE_THRESHOLD_PX && abs.y < SWIPE_THRESHOLD_PX {
            return None;
        }
        self.start = None;

        let direction = if abs.x > abs.y {
            if delta.x > 0.0 { Direction::Right } else { Direction::Left }
        } else if delta.y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        };
        Some(direction)
    }

    pub fn end(&mut self) {
        self.start = None;
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_key_bindings() {
        assert_eq!(command_for_key("ArrowUp"), Some(InputCommand::Steer(Direction::Up)));
        assert_eq!(command_for_key("W"), Some(InputCommand::Steer(Direction::Up)));
        assert_eq!(command_for_key("s"), Some(InputCommand::Steer(Direction::Down)));
        assert_eq!(command_for_key("a"), Some(InputCommand::Steer(Direction::Left)));
        assert_eq!(command_for_key("ArrowRight"), Some(InputCommand::Steer(Direction::Right)));
        assert_eq!(command_for_key(" "), Some(InputCommand::TogglePause));
        assert_eq!(command_for_key("Enter"), Some(InputCommand::Restart));
        assert_eq!(command_for_key("x"), None);
    }

    #[test]
    fn test_swipe_needs_threshold() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.moved(100.0, 100.0), None);
        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.moved(110.0, 90.0), None);
        assert!(swipe.is_tracking());
        assert_eq!(swipe.moved(130.0, 95.0), Some(Direction::Right));
        assert!(!swipe.is_tracking());
        assert_eq!(swipe.moved(200.0, 100.0), None);
    }

    #[test]
    fn test_swipe_dominant_axis() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(0.0, 0.0);
        assert_eq!(swipe.moved(-40.0, 10.0), Some(Direction::Left));
        swipe.begin(0.0, 0.0);
        assert_eq!(swipe.moved(10.0, -30.0), Some(Direction::Up));
        swipe.begin(0.0, 0.0);
        assert_eq!(swipe.moved(30.0, 30.0), Some(Direction::Down));
        swipe.begin(0.0, 0.0);
        swipe.end();
        assert_eq!(swipe.moved(50.0, 0.0), None);
    }

    #[test]
    fn test_commands_drive_phases() {
        let mut engine = Engine::new(GameConfig::with_grid(10, 10));
        InputCommand::Tap.apply(&mut engine);
        assert_eq!(engine.phase(), GamePhase::Running);
        InputCommand::Tap.apply(&mut engine);
        assert_eq!(engine.phase(), GamePhase::Running);
        InputCommand::TogglePause.apply(&mut engine);
        assert_eq!(engine.phase(), GamePhase::Paused);
        InputCommand::Tap.apply(&mut engine);
        assert_eq!(engine.phase(), GamePhase::Running);
        InputCommand::Steer(Direction::Down).apply(&mut engine);
        assert_eq!(engine.pending_direction(), Direction::Down);
        InputCommand::Restart.apply(&mut engine);
        assert_eq!(engine.phase(), GamePhase::Idle);
        assert_eq!(engine.pending_direction(), Direction::Right);
    }
}
