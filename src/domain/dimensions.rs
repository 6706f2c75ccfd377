use std::fmt;

use crate::error::LifeError;

/// Grid axis, used when reporting invalid dimensions.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Width => f.write_str("width"),
            Axis::Height => f.write_str("height"),
        }
    }
}

/// Fixed width and height of a grid, both strictly positive.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct GridDimensions {
    width: u32,
    height: u32,
}

impl GridDimensions {
    pub fn new(width: u32, height: u32) -> Result<Self, LifeError> {
        if width == 0 {
            return Err(LifeError::ZeroDimension(Axis::Width));
        }
        if height == 0 {
            return Err(LifeError::ZeroDimension(Axis::Height));
        }
        Ok(Self { width, height })
    }

    pub const fn width(self) -> u32 {
        self.width
    }

    pub const fn height(self) -> u32 {
        self.height
    }

    /// Total number of cells
    pub const fn cell_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major index of (row, col)
    pub const fn index(self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }

    pub const fn contains(self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }
}

impl fmt::Display for GridDimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
