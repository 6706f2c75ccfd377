use rand::Rng;

use super::{CellState, GridDimensions};
use crate::error::LifeError;

/// Contract of the cellular automaton driven by the render loop.
///
/// Implementations own cell storage and the generation rule. The loop only
/// constructs, advances, toggles, and reads them.
pub trait Universe {
    /// Build a universe with an initial pattern chosen by the implementation.
    fn seeded<R: Rng + ?Sized>(dims: GridDimensions, rng: &mut R) -> Self
    where
        Self: Sized;

    /// Build a universe with every cell dead.
    fn empty(dims: GridDimensions) -> Self
    where
        Self: Sized;

    fn dimensions(&self) -> GridDimensions;

    /// Advance one generation in place.
    fn tick(&mut self);

    /// Flip one cell. `(row, col)` must be in bounds.
    fn toggle_cell(&mut self, row: u32, col: u32);

    /// Row-major cell states, `width * height` long.
    /// Only valid until the next mutating call.
    fn cells(&self) -> &[CellState];
}

/// Borrowed, read-only view of a universe's cells for one draw call.
#[derive(Clone, Copy, Debug)]
pub struct CellSnapshot<'a> {
    dims: GridDimensions,
    cells: &'a [CellState],
}

impl<'a> CellSnapshot<'a> {
    pub fn new(dims: GridDimensions, cells: &'a [CellState]) -> Result<Self, LifeError> {
        if cells.len() != dims.cell_count() {
            return Err(LifeError::SnapshotLength {
                expected: dims.cell_count(),
                actual: cells.len(),
            });
        }
        Ok(Self { dims, cells })
    }

    /// Snapshot of a universe whose buffer length is trusted to match.
    pub(crate) fn of<U: Universe>(universe: &'a U) -> Self {
        let dims = universe.dimensions();
        let cells = universe.cells();
        debug_assert_eq!(cells.len(), dims.cell_count());
        Self { dims, cells }
    }

    pub const fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    /// State at `(row, col)`; panics when out of bounds.
    pub fn get(&self, row: u32, col: u32) -> CellState {
        self.cells[self.dims.index(row, col)]
    }

    pub fn as_slice(&self) -> &'a [CellState] {
        self.cells
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their (row, col) positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u32, CellState)> + 'a {
        let width = self.dims.width() as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &cell)| ((i / width) as u32, (i % width) as u32, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_wrong_length() {
        let dims = GridDimensions::new(2, 2).unwrap();
        let cells = [CellState::Dead; 3];
        assert_eq!(
            CellSnapshot::new(dims, &cells).unwrap_err(),
            LifeError::SnapshotLength { expected: 4, actual: 3 }
        );
    }

    #[test]
    fn test_row_major_lookup() {
        let dims = GridDimensions::new(3, 2).unwrap();
        let mut cells = [CellState::Dead; 6];
        cells[4] = CellState::Alive;
        let snapshot = CellSnapshot::new(dims, &cells).unwrap();

        assert_eq!(snapshot.get(1, 1), CellState::Alive);
        assert_eq!(snapshot.get(0, 1), CellState::Dead);
        assert_eq!(snapshot.live_count(), 1);

        let alive: Vec<_> = snapshot
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect();
        assert_eq!(alive, vec![(1, 1)]);
    }
}
