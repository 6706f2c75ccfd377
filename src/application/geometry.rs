use crate::domain::GridDimensions;
use crate::error::LifeError;

/// Pixel layout constants shared by rendering and input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    cell_size: u32,
    border_size: u32,
}

impl Layout {
    pub const CELL_SIZE_PX: u32 = 10;
    pub const BORDER_SIZE_PX: u32 = 1;

    pub fn new(cell_size: u32, border_size: u32) -> Result<Self, LifeError> {
        if cell_size == 0 {
            return Err(LifeError::ZeroCellSize);
        }
        Ok(Self { cell_size, border_size })
    }

    pub const fn cell_size(self) -> u32 {
        self.cell_size
    }

    pub const fn border_size(self) -> u32 {
        self.border_size
    }

    /// Distance between the origins of two adjacent cells.
    pub const fn pitch(self) -> u32 {
        self.cell_size + self.border_size
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cell_size: Self::CELL_SIZE_PX,
            border_size: Self::BORDER_SIZE_PX,
        }
    }
}

/// Square pixel area covered by one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub size: u32,
}

/// GeometryMapper converts between grid coordinates and surface pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeometryMapper {
    dims: GridDimensions,
    layout: Layout,
}

impl GeometryMapper {
    pub const fn new(dims: GridDimensions, layout: Layout) -> Self {
        Self { dims, layout }
    }

    pub const fn dimensions(&self) -> GridDimensions {
        self.dims
    }

    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Pixel rectangle of the cell at (row, col). Callers keep the
    /// coordinates in bounds.
    pub const fn cell_rect(&self, row: u32, col: u32) -> PixelRect {
        let pitch = self.layout.pitch();
        PixelRect {
            x: col * pitch + self.layout.border_size,
            y: row * pitch + self.layout.border_size,
            size: self.layout.cell_size,
        }
    }

    /// Grid cell under a surface pixel. Out-of-range input (negative,
    /// past the edge, non-finite) is clamped onto the nearest cell.
    pub fn pixel_to_grid(&self, px: f32, py: f32) -> (u32, u32) {
        let pitch = self.layout.pitch() as f32;
        let row = Self::clamp_axis(py / pitch, self.dims.height());
        let col = Self::clamp_axis(px / pitch, self.dims.width());
        (row, col)
    }

    fn clamp_axis(scaled: f32, cells: u32) -> u32 {
        // `as` saturates and maps NaN to zero, so the clamp sees a sane value.
        (scaled.floor() as i64).clamp(0, i64::from(cells) - 1) as u32
    }

    /// Surface size in pixels: `pitch * cells + border` per axis.
    pub const fn surface_size(&self) -> (u32, u32) {
        let pitch = self.layout.pitch();
        (
            pitch * self.dims.width() + self.layout.border_size,
            pitch * self.dims.height() + self.layout.border_size,
        )
    }

    /// Offset of the i-th grid line along either axis.
    pub const fn grid_line_offset(&self, i: u32) -> u32 {
        i * self.layout.pitch() + 1
    }
}
