use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, info};

use crate::domain::{CellSnapshot, GridDimensions, Life, Universe};
use crate::error::LifeError;

/// SimulationSession owns the current universe.
///
/// Replacement swaps the whole universe synchronously, so a render between
/// two handler calls sees either the old or the new cells, never a mix.
pub struct SimulationSession<U: Universe = Life> {
    universe: U,
    dims: GridDimensions,
    rng: SmallRng,
    generation: u64,
}

impl<U: Universe> SimulationSession<U> {
    /// Create a session seeded from OS entropy.
    pub fn new(dims: GridDimensions, seeded: bool) -> Self {
        Self::with_rng(dims, seeded, SmallRng::from_os_rng())
    }

    /// Create a session whose seeded universes are reproducible.
    pub fn with_seed(dims: GridDimensions, seeded: bool, seed: u64) -> Self {
        Self::with_rng(dims, seeded, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(dims: GridDimensions, seeded: bool, mut rng: SmallRng) -> Self {
        let universe = Self::build(dims, seeded, &mut rng);
        info!(%dims, seeded, "Created simulation session");
        Self {
            universe,
            dims,
            rng,
            generation: 0,
        }
    }

    fn build(dims: GridDimensions, seeded: bool, rng: &mut SmallRng) -> U {
        if seeded {
            U::seeded(dims, rng)
        } else {
            U::empty(dims)
        }
    }

    pub const fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    /// Generations advanced since the current universe was created.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Replace the universe with a freshly seeded one of the same size.
    pub fn reset(&mut self) {
        self.universe = Self::build(self.dims, true, &mut self.rng);
        self.generation = 0;
        info!(dims = %self.dims, "Reset universe with a seeded pattern");
    }

    /// Replace the universe with an all-dead one of the same size.
    pub fn clear(&mut self) {
        self.universe = U::empty(self.dims);
        self.generation = 0;
        info!(dims = %self.dims, "Replaced universe with an empty one");
    }

    /// Install an externally built universe. Its dimensions must match.
    pub fn replace(&mut self, universe: U) -> Result<(), LifeError> {
        let actual = universe.dimensions();
        if actual != self.dims {
            return Err(LifeError::DimensionsMismatch {
                expected: self.dims,
                actual,
            });
        }
        self.universe = universe;
        self.generation = 0;
        info!(dims = %self.dims, "Installed replacement universe");
        Ok(())
    }

    /// Advance the universe one generation.
    pub fn advance(&mut self) {
        self.universe.tick();
        self.generation += 1;
    }

    /// Flip one cell. `(row, col)` must already be in bounds.
    pub fn toggle_cell(&mut self, row: u32, col: u32) {
        debug_assert!(self.dims.contains(row, col));
        self.universe.toggle_cell(row, col);
        debug!(row, col, "Toggled cell");
    }

    /// Borrowed view of the current cells, valid until the next mutation.
    pub fn snapshot(&self) -> CellSnapshot<'_> {
        CellSnapshot::of(&self.universe)
    }

    pub fn live_cells(&self) -> usize {
        self.snapshot().live_count()
    }

    pub fn universe(&self) -> &U {
        &self.universe
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CellState;

    fn dims(width: u32, height: u32) -> GridDimensions {
        GridDimensions::new(width, height).unwrap()
    }

    #[test]
    fn test_empty_session_is_all_dead() {
        let session: SimulationSession = SimulationSession::new(dims(4, 4), false);
        assert_eq!(session.live_cells(), 0);
        assert_eq!(session.snapshot().as_slice().len(), 16);
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut session: SimulationSession = SimulationSession::with_seed(dims(8, 8), true, 3);
        let before = session.snapshot().get(5, 6);
        session.toggle_cell(5, 6);
        assert_ne!(session.snapshot().get(5, 6), before);
        session.toggle_cell(5, 6);
        assert_eq!(session.snapshot().get(5, 6), before);
    }

    #[test]
    fn test_block_survives_advance() {
        let mut session: SimulationSession = SimulationSession::new(dims(4, 4), false);
        for (row, col) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
            session.toggle_cell(row, col);
        }
        session.advance();

        let snapshot = session.snapshot();
        for (row, col, cell) in snapshot.iter_cells() {
            let in_block = (1..=2).contains(&row) && (1..=2).contains(&col);
            assert_eq!(cell == CellState::Alive, in_block, "cell ({row}, {col})");
        }
        assert_eq!(session.generation(), 1);
    }

    #[test]
    fn test_replacements_keep_dimensions_and_restart_generation() {
        let mut session: SimulationSession = SimulationSession::with_seed(dims(6, 3), false, 9);
        session.advance();
        session.advance();

        session.reset();
        assert_eq!(session.generation(), 0);
        assert_eq!(session.universe().dimensions(), dims(6, 3));
        assert_eq!(session.snapshot().get(1, 2), CellState::Alive);

        session.advance();
        session.clear();
        assert_eq!(session.generation(), 0);
        assert_eq!(session.live_cells(), 0);
    }

    #[test]
    fn test_replace_rejects_other_dimensions() {
        let mut session: SimulationSession = SimulationSession::new(dims(4, 4), false);
        let err = session.replace(Life::empty(dims(5, 4))).unwrap_err();
        assert_eq!(
            err,
            LifeError::DimensionsMismatch {
                expected: dims(4, 4),
                actual: dims(5, 4),
            }
        );

        let mut replacement = Life::empty(dims(4, 4));
        replacement.toggle_cell(0, 0);
        session.replace(replacement).unwrap();
        assert_eq!(session.live_cells(), 1);
    }
}
