mod surface;
mod pixel_buffer;
mod present;

pub use surface::{Palette, Path, Segment, Surface};
pub use pixel_buffer::PixelBuffer;
pub use present::Presenter;

use crate::application::GeometryMapper;
use crate::domain::{CellSnapshot, CellState};

/// GridRenderer draws one snapshot per call with no memory of earlier
/// frames: grid lines first, then every cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridRenderer {
    geometry: GeometryMapper,
    palette: Palette,
}

impl GridRenderer {
    pub const fn new(geometry: GeometryMapper, palette: Palette) -> Self {
        Self { geometry, palette }
    }

    pub const fn geometry(&self) -> &GeometryMapper {
        &self.geometry
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Full redraw of `snapshot`. Call after every state change.
    pub fn render(&self, surface: &mut impl Surface, snapshot: &CellSnapshot<'_>) {
        debug_assert_eq!(snapshot.dimensions(), self.geometry.dimensions());
        self.draw_grid_lines(surface);
        self.draw_cells(surface, snapshot);
    }

    /// Stroke all vertical and horizontal grid lines as a single path.
    pub fn draw_grid_lines(&self, surface: &mut impl Surface) {
        let dims = self.geometry.dimensions();
        let (surface_w, surface_h) = self.geometry.surface_size();
        let mut path = Path::new();

        // Vertical lines
        for i in 0..=dims.width() {
            let x = self.geometry.grid_line_offset(i) as f32;
            path.move_to(x, 0.0).line_to(x, surface_h as f32);
        }

        // Horizontal lines
        for i in 0..=dims.height() {
            let y = self.geometry.grid_line_offset(i) as f32;
            path.move_to(0.0, y).line_to(surface_w as f32, y);
        }

        surface.stroke_path(&path, self.palette.grid);
    }

    /// Fill every cell, alive cells in one pass and dead cells in another.
    pub fn draw_cells(&self, surface: &mut impl Surface, snapshot: &CellSnapshot<'_>) {
        self.draw_cells_with_state(surface, snapshot, CellState::Alive);
        self.draw_cells_with_state(surface, snapshot, CellState::Dead);
    }

    fn draw_cells_with_state(
        &self,
        surface: &mut impl Surface,
        snapshot: &CellSnapshot<'_>,
        state: CellState,
    ) {
        let color = match state {
            CellState::Alive => self.palette.alive,
            CellState::Dead => self.palette.dead,
        };

        let dims = snapshot.dimensions();
        for row in 0..dims.height() {
            for col in 0..dims.width() {
                if snapshot.get(row, col) != state {
                    continue;
                }
                surface.fill_rect(self.geometry.cell_rect(row, col), color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{Layout, PixelRect};
    use crate::domain::GridDimensions;
    use macroquad::color::{BLACK, Color, WHITE};

    /// Records draw calls instead of rasterizing them.
    #[derive(Default)]
    struct Recorder {
        strokes: Vec<(usize, Color)>,
        fills: Vec<(PixelRect, Color)>,
    }

    impl Surface for Recorder {
        fn size(&self) -> (u32, u32) {
            (0, 0)
        }

        fn stroke_path(&mut self, path: &Path, color: Color) {
            self.strokes.push((path.segments().len(), color));
        }

        fn fill_rect(&mut self, rect: PixelRect, color: Color) {
            self.fills.push((rect, color));
        }
    }

    fn renderer(width: u32, height: u32) -> GridRenderer {
        let dims = GridDimensions::new(width, height).unwrap();
        GridRenderer::new(GeometryMapper::new(dims, Layout::default()), Palette::default())
    }

    #[test]
    fn test_grid_lines_are_one_stroke() {
        let mut recorder = Recorder::default();
        renderer(3, 2).draw_grid_lines(&mut recorder);

        assert_eq!(recorder.strokes, vec![(4 + 3, Palette::default().grid)]);
        assert!(recorder.fills.is_empty());
    }

    #[test]
    fn test_alive_pass_precedes_dead_pass() {
        let dims = GridDimensions::new(2, 2).unwrap();
        let cells = [CellState::Dead, CellState::Alive, CellState::Alive, CellState::Dead];
        let snapshot = CellSnapshot::new(dims, &cells).unwrap();

        let mut recorder = Recorder::default();
        renderer(2, 2).draw_cells(&mut recorder, &snapshot);

        let rect = |x, y| PixelRect { x, y, size: 10 };
        assert_eq!(
            recorder.fills,
            vec![
                (rect(12, 1), BLACK),
                (rect(1, 12), BLACK),
                (rect(1, 1), WHITE),
                (rect(12, 12), WHITE),
            ]
        );
    }

    #[test]
    fn test_render_draws_lines_then_every_cell() {
        let dims = GridDimensions::new(3, 3).unwrap();
        let cells = [CellState::Dead; 9];
        let snapshot = CellSnapshot::new(dims, &cells).unwrap();

        let mut recorder = Recorder::default();
        renderer(3, 3).render(&mut recorder, &snapshot);

        assert_eq!(recorder.strokes.len(), 1);
        assert_eq!(recorder.fills.len(), 9);
    }

    #[test]
    fn test_pixels_match_snapshot() {
        let dims = GridDimensions::new(2, 1).unwrap();
        let cells = [CellState::Alive, CellState::Dead];
        let snapshot = CellSnapshot::new(dims, &cells).unwrap();
        let renderer = renderer(2, 1);
        let (w, h) = renderer.geometry().surface_size();

        let mut buffer = PixelBuffer::new(w, h, WHITE);
        renderer.render(&mut buffer, &snapshot);

        let grid = renderer.palette().grid;
        assert_eq!(buffer.pixel(0, 5), Some(grid));
        assert_eq!(buffer.pixel(11, 5), Some(grid));
        assert_eq!(buffer.pixel(5, 0), Some(grid));
        assert_eq!(buffer.pixel(1, 1), Some(BLACK));
        assert_eq!(buffer.pixel(10, 10), Some(BLACK));
        assert_eq!(buffer.pixel(12, 1), Some(WHITE));
        assert_eq!(buffer.pixel(22, 5), Some(grid));
    }
}
