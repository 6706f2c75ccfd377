use thiserror::Error;

use crate::domain::{Axis, GridDimensions};

/// Errors raised while configuring or wiring a simulation session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    /// A grid axis was configured with zero cells.
    #[error("grid {0} must be at least one cell")]
    ZeroDimension(Axis),
    /// The layout would draw cells with no area.
    #[error("cell size must be at least one pixel")]
    ZeroCellSize,
    /// The drawing surface would exceed what a texture can hold.
    #[error("surface of {width}x{height} pixels exceeds the {max} pixel limit")]
    SurfaceTooLarge { width: u32, height: u32, max: u32 },
    /// A replacement universe does not match the session's fixed dimensions.
    #[error("universe is {actual}, session expects {expected}")]
    DimensionsMismatch {
        expected: GridDimensions,
        actual: GridDimensions,
    },
    /// A cell buffer's length disagrees with its dimensions.
    #[error("cell buffer holds {actual} states, {expected} expected")]
    SnapshotLength { expected: usize, actual: usize },
}
