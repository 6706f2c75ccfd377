use macroquad::color::Color;

use super::{Path, Surface};
use crate::application::PixelRect;

/// Retained RGBA raster. Pixels keep their value until drawn over, the way
/// a browser canvas does.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
    revision: u64,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgba8(background); width as usize * height as usize],
            revision: 0,
        }
    }

    /// Color stored at (x, y), quantized to 8 bits per channel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        (x < self.width && y < self.height).then(|| {
            let [r, g, b, a] = self.pixels[self.index(x, y)];
            Color::from_rgba(r, g, b, a)
        })
    }

    /// Incremented on every draw call; lets a presenter skip re-uploads.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Pixels packed as RGBA8, row-major.
    pub fn to_rgba8(&self) -> Vec<u8> {
        self.pixels.as_flattened().to_vec()
    }

    const fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Paint the pixel whose area contains the point just above-left of
    /// (x, y); a stroke centred on an integer coordinate lands on the pixel
    /// before it.
    fn plot(&mut self, x: f32, y: f32, rgba: [u8; 4]) {
        let (px, py) = ((x - 0.5).floor(), (y - 0.5).floor());
        if px < 0.0 || py < 0.0 {
            return;
        }
        let (px, py) = (px as u32, py as u32);
        if px < self.width && py < self.height {
            let idx = self.index(px, py);
            self.pixels[idx] = rgba;
        }
    }
}

impl Surface for PixelBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn stroke_path(&mut self, path: &Path, color: Color) {
        let rgba = rgba8(color);
        for segment in path.segments() {
            let (x0, y0) = segment.from;
            let (dx, dy) = (segment.to.0 - x0, segment.to.1 - y0);
            let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
            for i in 0..=steps {
                let t = i as f32 / steps as f32;
                self.plot(x0 + dx * t, y0 + dy * t, rgba);
            }
        }
        self.revision += 1;
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        let x_end = (rect.x + rect.size).min(self.width);
        let x_start = rect.x.min(x_end);
        let y_end = (rect.y + rect.size).min(self.height);
        for y in rect.y..y_end {
            let row = self.index(0, y);
            self.pixels[row + x_start as usize..row + x_end as usize].fill(rgba8(color));
        }
        self.revision += 1;
    }
}

fn rgba8(color: Color) -> [u8; 4] {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    [channel(color.r), channel(color.g), channel(color.b), channel(color.a)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::color::{BLACK, WHITE};

    #[test]
    fn test_fill_rect_clips() {
        let mut buffer = PixelBuffer::new(4, 4, WHITE);
        buffer.fill_rect(PixelRect { x: 2, y: 3, size: 5 }, BLACK);

        assert_eq!(buffer.pixel(2, 3), Some(BLACK));
        assert_eq!(buffer.pixel(3, 3), Some(BLACK));
        assert_eq!(buffer.pixel(1, 3), Some(WHITE));
        assert_eq!(buffer.pixel(2, 2), Some(WHITE));
        assert_eq!(buffer.pixel(4, 3), None);
        assert_eq!(buffer.revision(), 1);
    }

    #[test]
    fn test_fill_rect_outside_is_noop() {
        let mut buffer = PixelBuffer::new(2, 2, WHITE);
        buffer.fill_rect(PixelRect { x: 5, y: 5, size: 3 }, BLACK);
        assert!(buffer.to_rgba8().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_vertical_stroke_lands_left_of_coordinate() {
        let red = Color::from_rgba(255, 0, 0, 255);
        let mut buffer = PixelBuffer::new(5, 4, WHITE);
        let mut path = Path::new();
        path.move_to(3.0, 0.0).line_to(3.0, 4.0);
        buffer.stroke_path(&path, red);

        for y in 0..4 {
            assert_eq!(buffer.pixel(2, y), Some(red));
            assert_eq!(buffer.pixel(3, y), Some(WHITE));
        }
        assert_eq!(buffer.revision(), 1);
    }

    #[test]
    fn test_rgba8_packing() {
        let buffer = PixelBuffer::new(1, 1, Color::from_rgba(0xCC, 0x10, 0x00, 0xFF));
        assert_eq!(buffer.to_rgba8(), vec![0xCC, 0x10, 0x00, 0xFF]);
    }
}
