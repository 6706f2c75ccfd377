use macroquad::color::{BLACK, Color, WHITE};

use crate::application::PixelRect;

/// A 2D raster target the grid renderer draws onto.
pub trait Surface {
    /// Size in device pixels.
    fn size(&self) -> (u32, u32);

    /// Stroke every segment of `path` as one 1px-wide draw operation.
    fn stroke_path(&mut self, path: &Path, color: Color);

    /// Fill an axis-aligned square.
    fn fill_rect(&mut self, rect: PixelRect, color: Color);
}

/// Straight line between two surface points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub from: (f32, f32),
    pub to: (f32, f32),
}

/// Open polyline path built with canvas-style move/line commands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    segments: Vec<Segment>,
    cursor: (f32, f32),
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.cursor = (x, y);
        self
    }

    pub fn line_to(&mut self, x: f32, y: f32) -> &mut Self {
        self.segments.push(Segment {
            from: self.cursor,
            to: (x, y),
        });
        self.cursor = (x, y);
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

/// Colors used to draw the grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub grid: Color,
    pub dead: Color,
    pub alive: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            grid: Color::from_rgba(0xCC, 0xCC, 0xCC, 0xFF),
            dead: WHITE,
            alive: BLACK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_segments_follow_cursor() {
        let mut path = Path::new();
        path.move_to(1.0, 0.0).line_to(1.0, 5.0);
        path.move_to(0.0, 2.0).line_to(4.0, 2.0).line_to(4.0, 3.0);

        assert_eq!(
            path.segments(),
            &[
                Segment { from: (1.0, 0.0), to: (1.0, 5.0) },
                Segment { from: (0.0, 2.0), to: (4.0, 2.0) },
                Segment { from: (4.0, 2.0), to: (4.0, 3.0) },
            ]
        );
    }
}
