//! The simulation engine
//!
//! Owns every piece of mutable game state. Timing lives in the loop driver;
//! this module only knows about discrete ticks.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::food::place_food;
use super::grid::{Cell, Direction, GridSize};
use super::state::{Collision, GamePhase, Snake, Snapshot};
use crate::config::GameConfig;
use crate::consts::SCORE_PER_FOOD;

/// Receives the score every time it changes (including the reset to 0)
pub trait ScoreSink {
    fn score_changed(&mut self, score: u32);
}

/// Discards score updates
impl ScoreSink for () {
    fn score_changed(&mut self, _score: u32) {}
}

/// Result of a single `advance` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not running; nothing changed
    Skipped,
    /// Moved one cell, length unchanged
    Moved,
    /// Moved onto food and grew by one
    Ate,
    /// Lethal collision, the game is over
    Died(Collision),
}

/// Snake game simulation
#[derive(Debug)]
pub struct Engine<S: ScoreSink = ()> {
    config: GameConfig,
    grid: GridSize,
    rng: Pcg32,
    snake: Snake,
    /// Heading applied by the tick in progress
    current: Direction,
    /// Latest accepted input, committed at the start of the next tick
    pending: Direction,
    food: Cell,
    score: u32,
    phase: GamePhase,
    /// Ticks applied while running, for the current game
    ticks: u64,
    sink: S,
}

impl Engine<()> {
    /// Engine without a score sink
    pub fn new(config: GameConfig) -> Self {
        Self::with_sink(config, ())
    }
}

impl<S: ScoreSink> Engine<S> {
    /// Build an engine in the `Idle` phase with a fresh game laid out
    pub fn with_sink(config: GameConfig, sink: S) -> Self {
        let config = config.sanitized();
        let seed = config.seed.unwrap_or_else(rand::random);
        log::info!(
            "Engine created: {}x{} grid, initial length {}, seed {}",
            config.columns,
            config.rows,
            config.initial_length,
            seed
        );

        let grid = GridSize::new(config.columns, config.rows);
        let mut engine = Self {
            snake: Snake::straight(Cell::ZERO, Direction::Right, 1),
            current: Direction::Right,
            pending: Direction::Right,
            food: Cell::ZERO,
            score: 0,
            phase: GamePhase::Idle,
            ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
            grid,
            config,
            sink,
        };
        engine.reset();
        engine
    }

    /// Lay out a new game and return to `Idle`. Valid from any phase.
    pub fn reset(&mut self) {
        let head = Cell::new(
            (self.grid.columns / 3).max(self.config.initial_length - 1) as i32,
            (self.grid.rows / 2) as i32,
        );
        let snake = Snake::straight(head, Direction::Right, self.config.initial_length as usize);
        self.place_snake(snake, Direction::Right);
    }

    /// Start a new game with an explicit body and heading. The food is
    /// re-placed around the new body and the phase returns to `Idle`.
    ///
    /// Used for debug scenarios and tests; regular games go through `reset`.
    pub fn place_snake(&mut self, snake: Snake, heading: Direction) {
        self.snake = snake;
        self.current = heading;
        self.pending = heading;
        self.score = 0;
        self.ticks = 0;
        self.set_phase(GamePhase::Idle);
        self.food = place_food(
            &mut self.rng,
            self.grid,
            &self.snake,
            self.config.food_placement,
        );
        self.sink.score_changed(0);
    }

    /// Move the food. Debug scenarios only; `cell` must be on the grid.
    pub fn place_food_at(&mut self, cell: Cell) {
        debug_assert!(self.grid.contains(cell), "food {cell} is off the grid");
        self.food = cell;
    }

    /// `Idle -> Running`
    pub fn start(&mut self) {
        if self.phase == GamePhase::Idle {
            self.set_phase(GamePhase::Running);
        }
    }

    /// `Running -> Paused`
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Running {
            self.set_phase(GamePhase::Paused);
        }
    }

    /// `Paused -> Running`
    pub fn resume(&mut self) {
        if self.phase == GamePhase::Paused {
            self.set_phase(GamePhase::Running);
        }
    }

    /// Start, pause or resume depending on the phase. Ignored after game over.
    pub fn toggle_pause(&mut self) {
        match self.phase {
            GamePhase::Idle => self.start(),
            GamePhase::Running => self.pause(),
            GamePhase::Paused => self.resume(),
            GamePhase::GameOver => {}
        }
    }

    /// Buffer a heading given as a `(dx, dy)` unit vector. Returns whether
    /// the input was buffered; non-unit vectors and reversals are ignored.
    pub fn set_direction(&mut self, dx: i32, dy: i32) -> bool {
        match Direction::from_delta(dx, dy) {
            Some(direction) => self.steer(direction),
            None => false,
        }
    }

    /// Buffer a heading for the next tick.
    ///
    /// Reversal is judged against the heading the snake is actually moving
    /// in, not the pending one, so two quick turns within one tick are both
    /// honoured (the last one wins) while a direct 180 degree turn never is.
    pub fn steer(&mut self, direction: Direction) -> bool {
        if direction.is_opposite(self.current) {
            log::trace!("Ignoring reversal to {:?}", direction);
            return false;
        }
        self.pending = direction;
        true
    }

    /// Apply one tick. No-op unless the game is running.
    pub fn advance(&mut self) -> TickOutcome {
        if self.phase != GamePhase::Running {
            return TickOutcome::Skipped;
        }

        self.current = self.pending;
        self.ticks += 1;
        let new_head = self.snake.head() + self.current.delta();

        if !self.grid.contains(new_head) {
            return self.end_game(Collision::Wall);
        }
        // Checked against the body before the tail moves, so the tail cell
        // counts as occupied even on a non-eating tick.
        if self.snake.occupies(new_head) {
            return self.end_game(Collision::Body);
        }

        self.snake.push_head(new_head);

        if new_head == self.food {
            self.score += SCORE_PER_FOOD;
            self.sink.score_changed(self.score);
            self.food = place_food(
                &mut self.rng,
                self.grid,
                &self.snake,
                self.config.food_placement,
            );
            log::trace!("Ate food at {}, score {}", new_head, self.score);
            TickOutcome::Ate
        } else {
            self.snake.pop_tail();
            TickOutcome::Moved
        }
    }

    fn end_game(&mut self, collision: Collision) -> TickOutcome {
        log::info!(
            "Game over ({:?}) after {} ticks, score {}, length {}",
            collision,
            self.ticks,
            self.score,
            self.snake.len()
        );
        self.set_phase(GamePhase::GameOver);
        TickOutcome::Died(collision)
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::debug!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Read-only view for renderers
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            columns: self.grid.columns,
            rows: self.grid.rows,
            snake: self.snake.segments(),
            food: self.food,
            direction: self.current,
            phase: self.phase,
            score: self.score,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn grid(&self) -> GridSize {
        self.grid
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn current_direction(&self) -> Direction {
        self.current
    }

    pub fn pending_direction(&self) -> Direction {
        self.pending
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
