/// CellState is the value stored per grid cell.
/// The discriminants match the raw byte layout a Universe exposes.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum CellState {
    Dead = 0,
    Alive = 1,
}

impl CellState {
    /// Interpret a raw state byte: zero is Dead, anything else is Alive.
    pub const fn from_raw(byte: u8) -> Self {
        if byte == 0 { CellState::Dead } else { CellState::Alive }
    }

    /// Check if the cell is currently alive
    pub const fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    pub const fn toggle(self) -> Self {
        match self {
            CellState::Alive => CellState::Dead,
            CellState::Dead => CellState::Alive,
        }
    }

    /// Next state under B3/S23:
    /// 1. Live cell with 2-3 neighbors survives
    /// 2. Dead cell with exactly 3 neighbors becomes alive
    /// 3. All other cases result in death
    pub const fn evolve(self, neighbors: u8) -> Self {
        match (self, neighbors) {
            (CellState::Alive, 2 | 3) => CellState::Alive,
            (CellState::Dead, 3) => CellState::Alive,
            _ => CellState::Dead,
        }
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        state as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_interpretation() {
        assert_eq!(CellState::from_raw(0), CellState::Dead);
        assert_eq!(CellState::from_raw(1), CellState::Alive);
        assert_eq!(CellState::from_raw(255), CellState::Alive);
        assert_eq!(u8::from(CellState::Alive), 1);
        assert_eq!(u8::from(CellState::Dead), 0);
    }

    #[test]
    fn test_toggle_is_involution() {
        for state in [CellState::Dead, CellState::Alive] {
            assert_ne!(state.toggle(), state);
            assert_eq!(state.toggle().toggle(), state);
        }
    }

    #[test]
    fn test_underpopulation() {
        assert_eq!(CellState::Alive.evolve(0), CellState::Dead);
        assert_eq!(CellState::Alive.evolve(1), CellState::Dead);
    }

    #[test]
    fn test_survival() {
        assert_eq!(CellState::Alive.evolve(2), CellState::Alive);
        assert_eq!(CellState::Alive.evolve(3), CellState::Alive);
    }

    #[test]
    fn test_overpopulation() {
        assert_eq!(CellState::Alive.evolve(4), CellState::Dead);
        assert_eq!(CellState::Alive.evolve(8), CellState::Dead);
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(CellState::Dead.evolve(3), CellState::Alive);
        assert_eq!(CellState::Dead.evolve(2), CellState::Dead);
    }
}
