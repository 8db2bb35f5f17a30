//! Fixed timestep loop driver
//!
//! Turns host frame timestamps (milliseconds) into a whole number of engine
//! ticks, so the snake moves at the configured rate whatever the display
//! refresh rate is. Renders exactly once per frame.

use crate::consts::MIN_STEPS_PER_SECOND;
use crate::sim::{Engine, GamePhase, ScoreSink, Snapshot};

/// Consumer of one snapshot per frame
pub trait Renderer {
    fn render(&mut self, frame: &Snapshot<'_>);
}

impl<F> Renderer for F
where
    F: FnMut(&Snapshot<'_>),
{
    fn render(&mut self, frame: &Snapshot<'_>) {
        self(frame)
    }
}

/// Accumulator state for the frame loop
#[derive(Debug, Clone)]
pub struct LoopDriver {
    last_time: f64,
    accumulator: f64,
    steps_per_second: f64,
}

impl LoopDriver {
    /// `now` is the host timestamp of the moment the loop is created
    pub fn new(now: f64, steps_per_second: f64) -> Self {
        let mut driver = Self {
            last_time: now,
            accumulator: 0.0,
            steps_per_second: MIN_STEPS_PER_SECOND,
        };
        driver.set_steps_per_second(steps_per_second);
        driver
    }

    /// Change the tick rate. Takes effect on the next frame.
    pub fn set_steps_per_second(&mut self, steps_per_second: f64) {
        if !steps_per_second.is_finite() || steps_per_second <= 0.0 {
            log::warn!("Ignoring invalid tick rate {}", steps_per_second);
            return;
        }
        self.steps_per_second = steps_per_second;
    }

    pub fn steps_per_second(&self) -> f64 {
        self.steps_per_second
    }

    /// Length of one tick in milliseconds, never longer than
    /// `1000 / MIN_STEPS_PER_SECOND`
    pub fn step_duration_ms(&self) -> f64 {
        1000.0 / self.steps_per_second.max(MIN_STEPS_PER_SECOND)
    }

    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    /// Forget buffered time, e.g. after a restart or when the host resumes
    /// from a long suspension
    pub fn resync(&mut self, now: f64) {
        self.last_time = now;
        self.accumulator = 0.0;
    }

    /// Run one frame: apply as many ticks as the elapsed time allows (zero or
    /// more), then render once. Returns the number of ticks applied.
    pub fn frame<S, R>(&mut self, now: f64, engine: &mut Engine<S>, renderer: &mut R) -> u32
    where
        S: ScoreSink,
        R: Renderer + ?Sized,
    {
        let dt = now - self.last_time;
        self.last_time = now;
        if dt < 0.0 {
            log::debug!("Clock went backwards by {:.3} ms", -dt);
        } else {
            self.accumulator += dt;
        }

        let step = self.step_duration_ms();
        let mut steps = 0;
        while engine.phase() == GamePhase::Running && self.accumulator >= step {
            engine.advance();
            self.accumulator -= step;
            steps += 1;
        }

        if steps > 1 {
            log::trace!("Caught up {} ticks in one frame", steps);
        }

        renderer.render(&engine.snapshot());
        steps
    }
}
