use std::fmt;

use rand::Rng;
use rayon::prelude::*;
use tracing::trace;

use super::{CellState, GridDimensions, Universe, presets};

/// Probability that a seeded cell starts alive.
const SEED_DENSITY: f64 = 0.5;

/// Life is the stock Universe: B3/S23 on a torus (edges wrap).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Life {
    dims: GridDimensions,
    cells: Vec<CellState>,
}

impl Life {
    /// Get cell at position (with bounds checking)
    pub fn get(&self, row: u32, col: u32) -> Option<CellState> {
        self.dims
            .contains(row, col)
            .then(|| self.cells[self.dims.index(row, col)])
    }

    /// Set cell at position; out-of-bounds writes are ignored
    pub fn set(&mut self, row: u32, col: u32, state: CellState) {
        if self.dims.contains(row, col) {
            let idx = self.dims.index(row, col);
            self.cells[idx] = state;
        }
    }

    /// Count live neighbors using toroidal wrapping
    fn count_live_neighbors(&self, row: u32, col: u32) -> u8 {
        let (width, height) = (self.dims.width(), self.dims.height());

        [height - 1, 0, 1]
            .into_iter()
            .flat_map(|dr| [width - 1, 0, 1].into_iter().map(move |dc| (dr, dc)))
            .filter(|&(dr, dc)| dr != 0 || dc != 0)
            .map(|(dr, dc)| {
                let r = (row + dr) % height;
                let c = (col + dc) % width;
                self.cells[self.dims.index(r, c)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }
}

/// One text line per row: `◼` alive, `◻` dead.
impl fmt::Display for Life {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.dims.width() as usize) {
            for cell in row {
                let symbol = if cell.is_alive() { '◼' } else { '◻' };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Universe for Life {
    fn seeded<R: Rng + ?Sized>(dims: GridDimensions, rng: &mut R) -> Self {
        let cells = (0..dims.cell_count())
            .map(|_| {
                if rng.random_bool(SEED_DENSITY) {
                    CellState::Alive
                } else {
                    CellState::Dead
                }
            })
            .collect();

        let mut life = Self { dims, cells };
        let seed = presets::glider();
        seed.place_on(&mut life, 1, 1);
        trace!(pattern = seed.name, %dims, "seeded universe");
        life
    }

    fn empty(dims: GridDimensions) -> Self {
        Self {
            dims,
            cells: vec![CellState::Dead; dims.cell_count()],
        }
    }

    fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    /// Rows are computed in parallel into a fresh buffer, then swapped in.
    fn tick(&mut self) {
        let width = self.dims.width() as usize;
        let mut next = vec![CellState::Dead; self.cells.len()];

        next.par_chunks_mut(width)
            .enumerate()
            .for_each(|(row, out)| {
                let row = row as u32;
                for (col, slot) in out.iter_mut().enumerate() {
                    let col = col as u32;
                    let current = self.cells[self.dims.index(row, col)];
                    *slot = current.evolve(self.count_live_neighbors(row, col));
                }
            });

        self.cells = next;
    }

    fn toggle_cell(&mut self, row: u32, col: u32) {
        let idx = self.dims.index(row, col);
        self.cells[idx] = self.cells[idx].toggle();
    }

    fn cells(&self) -> &[CellState] {
        &self.cells
    }
}
