//! Browser host bindings
//!
//! JavaScript owns the canvas and the `requestAnimationFrame` loop. Each
//! callback hands its timestamp to `WebGame::frame` and draws the JSON frame
//! that comes back.

use wasm_bindgen::prelude::*;

use crate::config::{GameConfig, SpeedPreset};
use crate::driver::LoopDriver;
use crate::highscores::HighScore;
use crate::platform::input::{InputCommand, SwipeTracker, command_for_key};
use crate::renderer::JsonRenderer;
use crate::sim::Engine;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }
    log::info!("Grid Snake starting...");
}

/// One game session driven by the page
#[wasm_bindgen]
pub struct WebGame {
    engine: Engine<HighScore>,
    driver: LoopDriver,
    swipe: SwipeTracker,
    renderer: JsonRenderer,
}

#[wasm_bindgen]
impl WebGame {
    /// `now` is `performance.now()` at creation
    #[wasm_bindgen(constructor)]
    pub fn new(now: f64) -> WebGame {
        let config = GameConfig::load();
        let driver = LoopDriver::new(now, config.steps_per_second);
        let engine = Engine::with_sink(config, HighScore::load());
        WebGame {
            engine,
            driver,
            swipe: SwipeTracker::new(),
            renderer: JsonRenderer::new(),
        }
    }

    /// Advance to `now` and return the frame to draw as JSON
    pub fn frame(&mut self, now: f64) -> String {
        self.driver.frame(now, &mut self.engine, &mut self.renderer);
        self.renderer.frame().to_owned()
    }

    /// Handle a `keydown`. Returns true if the key was used, so the page can
    /// suppress scrolling.
    pub fn key_down(&mut self, key: &str) -> bool {
        match command_for_key(key) {
            Some(command) => {
                command.apply(&mut self.engine);
                true
            }
            None => false,
        }
    }

    pub fn touch_start(&mut self, x: f32, y: f32) {
        self.swipe.begin(x, y);
    }

    pub fn touch_move(&mut self, x: f32, y: f32) {
        if let Some(direction) = self.swipe.moved(x, y) {
            InputCommand::Steer(direction).apply(&mut self.engine);
        }
    }

    pub fn touch_end(&mut self) {
        self.swipe.end();
    }

    /// Click or tap on the board
    pub fn tap(&mut self) {
        InputCommand::Tap.apply(&mut self.engine);
    }

    pub fn toggle_pause(&mut self) {
        InputCommand::TogglePause.apply(&mut self.engine);
    }

    pub fn restart(&mut self) {
        InputCommand::Restart.apply(&mut self.engine);
    }

    pub fn set_steps_per_second(&mut self, steps_per_second: f64) {
        self.driver.set_steps_per_second(steps_per_second);
    }

    /// Apply a named speed preset. Returns false for unknown names.
    pub fn set_speed(&mut self, preset: &str) -> bool {
        match SpeedPreset::parse(preset) {
            Some(preset) => {
                self.driver.set_steps_per_second(preset.steps_per_second());
                true
            }
            None => false,
        }
    }

    pub fn score(&self) -> u32 {
        self.engine.score()
    }

    pub fn high_score(&self) -> u32 {
        self.engine.sink().best()
    }
}
