//! Game state and core simulation types

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::grid::{Cell, Direction, GridSize};

/// Lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Freshly reset, waiting for start
    #[default]
    Idle,
    /// Ticks are being applied
    Running,
    /// Suspended by the player
    Paused,
    /// A lethal collision ended the run
    GameOver,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

/// The snake body, head first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: VecDeque<Cell>,
}

impl Snake {
    /// Build a straight snake of `length` cells with its head at `head`,
    /// trailing away from `heading`.
    pub fn straight(head: Cell, heading: Direction, length: usize) -> Self {
        let back = heading.opposite().delta();
        let body = (0..length.max(1) as i32).map(|i| head + back * i).collect();
        Self { body }
    }

    /// Build a snake from explicit segments (head first). Returns `None`
    /// for an empty body.
    pub fn from_segments(segments: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = segments.into_iter().collect();
        if body.is_empty() { None } else { Some(Self { body }) }
    }

    #[inline]
    pub fn head(&self) -> Cell {
        // Never empty: every constructor guarantees at least one segment and
        // `pop_tail` refuses to remove the last one.
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Whether any segment, tail included, sits on `cell`
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.body
    }

    pub(crate) fn push_head(&mut self, cell: Cell) {
        self.body.push_front(cell);
    }

    pub(crate) fn pop_tail(&mut self) {
        if self.body.len() > 1 {
            self.body.pop_back();
        }
    }
}

/// Read-only view of the game handed to renderers once per frame
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub columns: u32,
    pub rows: u32,
    /// Segments, head first
    pub snake: &'a VecDeque<Cell>,
    pub food: Cell,
    pub direction: Direction,
    pub phase: GamePhase,
    pub score: u32,
}

impl Snapshot<'_> {
    pub fn grid(&self) -> GridSize {
        GridSize::new(self.columns, self.rows)
    }

    pub fn head(&self) -> Option<Cell> {
        self.snake.front().copied()
    }
}
