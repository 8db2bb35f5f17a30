//! Grid coordinates and headings
//!
//! Cells are `IVec2` with the origin at the top-left corner; `y` grows downward.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A single grid cell (snake segment or food position)
pub type Cell = IVec2;

/// One of the four unit headings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a `(dx, dy)` pair to a heading. Anything that is not a unit
    /// vector along one axis (zero, diagonal, longer steps) yields `None`.
    pub fn from_delta(dx: i32, dy: i32) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    /// Unit offset for one step in this heading
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::NEG_Y,
            Direction::Down => IVec2::Y,
            Direction::Left => IVec2::NEG_X,
            Direction::Right => IVec2::X,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Grid dimensions in cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub columns: u32,
    pub rows: u32,
}

impl GridSize {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Whether `cell` lies within `[0, columns) x [0, rows)`
    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && (cell.x as u32) < self.columns && (cell.y as u32) < self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows as i32).flat_map(move |y| (0..self.columns as i32).map(move |x| IVec2::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_delta_accepts_only_unit_vectors() {
        assert_eq!(Direction::from_delta(1, 0), Some(Direction::Right));
        assert_eq!(Direction::from_delta(0, -1), Some(Direction::Up));
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(1, 1), None);
        assert_eq!(Direction::from_delta(2, 0), None);
        assert_eq!(Direction::from_delta(0, -3), None);
    }

    #[test]
    fn test_delta_matches_from_delta() {
        for dir in Direction::ALL {
            let d = dir.delta();
            assert_eq!(Direction::from_delta(d.x, d.y), Some(dir));
            assert_eq!(dir.opposite().delta(), -d);
            assert!(dir.is_opposite(dir.opposite()));
            assert!(!dir.is_opposite(dir));
        }
    }

    #[test]
    fn test_contains() {
        let grid = GridSize::new(8, 6);
        assert!(grid.contains(IVec2::new(0, 0)));
        assert!(grid.contains(IVec2::new(7, 5)));
        assert!(!grid.contains(IVec2::new(8, 0)));
        assert!(!grid.contains(IVec2::new(0, 6)));
        assert!(!grid.contains(IVec2::new(-1, 3)));
        assert_eq!(grid.cells().count(), grid.cell_count());
    }
}
