use super::{CellState, Life};

/// Represents a pattern that can be stamped onto a universe
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub cells: Vec<(u32, u32)>, // (col, row) offsets of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, cells: Vec<(u32, u32)>) -> Self {
        let width = cells.iter().map(|(x, _)| *x).max().unwrap_or(0) + 1;
        let height = cells.iter().map(|(_, y)| *y).max().unwrap_or(0) + 1;
        Self { name, width, height, cells }
    }

    /// Set the pattern's cells alive with its top-left corner at (row, col).
    /// Cells falling outside the grid are dropped.
    pub fn place_on(&self, life: &mut Life, row: u32, col: u32) {
        for &(dx, dy) in &self.cells {
            life.set(row + dy, col + dx, CellState::Alive);
        }
    }
}

/// Classic Game of Life patterns
pub mod presets {
    use super::*;

    /// Glider - simplest spaceship, moves diagonally
    pub fn glider() -> Pattern {
        Pattern::new(
            "Glider",
            vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ]
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "Blinker",
            vec![
                (0, 1), (1, 1), (2, 1),
            ]
        )
    }

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "Block",
            vec![
                (0, 0), (1, 0),
                (0, 1), (1, 1),
            ]
        )
    }
}
