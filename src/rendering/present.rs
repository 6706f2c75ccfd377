use macroquad::prelude::*;

use super::{PixelBuffer, Surface};
use crate::input::SurfaceBounds;

/// Presenter mirrors a PixelBuffer into a GPU texture and draws it into the
/// window each frame, scaled to its displayed bounds.
pub struct Presenter {
    texture: Texture2D,
    uploaded: u64,
}

impl Presenter {
    pub fn new(buffer: &PixelBuffer) -> Self {
        let (width, height) = buffer.size();
        let texture = Texture2D::from_rgba8(width as u16, height as u16, &buffer.to_rgba8());
        texture.set_filter(FilterMode::Nearest);
        Self {
            texture,
            uploaded: buffer.revision(),
        }
    }

    /// Re-upload when the buffer changed since the last frame, then draw.
    pub fn draw(&mut self, buffer: &PixelBuffer, bounds: SurfaceBounds) {
        if buffer.revision() != self.uploaded {
            let (width, height) = buffer.size();
            self.texture.update_from_bytes(width, height, &buffer.to_rgba8());
            self.uploaded = buffer.revision();
        }

        draw_texture_ex(
            &self.texture,
            bounds.left,
            bounds.top,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(bounds.width, bounds.height)),
                ..Default::default()
            },
        );
    }
}
