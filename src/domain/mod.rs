mod cell;
mod dimensions;
mod universe;
mod life;
mod patterns;

pub use cell::CellState;
pub use dimensions::{Axis, GridDimensions};
pub use universe::{CellSnapshot, Universe};
pub use life::Life;
pub use patterns::{Pattern, presets};
