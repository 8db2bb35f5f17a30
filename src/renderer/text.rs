//! Plain text board

use std::fmt::Write;

use crate::driver::Renderer;
use crate::sim::{GamePhase, Snapshot};

const HEAD: char = '@';
const BODY: char = 'o';
const FOOD: char = '*';
const EMPTY: char = '.';
const WALL: char = '#';

/// Draws the board as ASCII, one line per row plus a status line
#[derive(Debug, Clone, Default)]
pub struct TextRenderer {
    frame: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame(&self) -> &str {
        &self.frame
    }
}

impl Renderer for TextRenderer {
    fn render(&mut self, frame: &Snapshot<'_>) {
        let columns = frame.columns as usize;
        let rows = frame.rows as usize;
        let mut board = vec![vec![EMPTY; columns]; rows];

        let mut put = |x: i32, y: i32, c: char| {
            if let Some(cell) = board
                .get_mut(y as usize)
                .and_then(|row| row.get_mut(x as usize))
            {
                *cell = c;
            }
        };

        put(frame.food.x, frame.food.y, FOOD);
        // Tail first so the head wins if the food fallback overlapped the body
        for (i, seg) in frame.snake.iter().enumerate().rev() {
            put(seg.x, seg.y, if i == 0 { HEAD } else { BODY });
        }

        self.frame.clear();
        let border: String = std::iter::repeat_n(WALL, columns + 2).collect();
        let _ = writeln!(self.frame, "{border}");
        for row in &board {
            let line: String = row.iter().collect();
            let _ = writeln!(self.frame, "{WALL}{line}{WALL}");
        }
        let _ = writeln!(self.frame, "{border}");

        let status = match frame.phase {
            GamePhase::Idle => "ready",
            GamePhase::Running => "running",
            GamePhase::Paused => "paused",
            GamePhase::GameOver => "game over",
        };
        let _ = write!(self.frame, "score {} | length {} | {}", frame.score, frame.snake.len(), status);
    }
}
