use macroquad::prelude::*;

use crate::application::{Command, GeometryMapper};
use crate::ui::Button;

/// Pointer press position in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
}

/// Where the surface is displayed in the window, in window coordinates.
/// The displayed size may differ from the surface's pixel size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl SurfaceBounds {
    /// Largest placement of a `surface`-sized image inside `area`
    /// (left, top, width, height) that keeps its aspect ratio.
    pub fn fit(surface: (u32, u32), area: (f32, f32, f32, f32)) -> Self {
        let (left, top, area_w, area_h) = area;
        let (surface_w, surface_h) = (surface.0 as f32, surface.1 as f32);
        let scale = (area_w / surface_w).min(area_h / surface_h).max(0.0);
        Self {
            left,
            top,
            width: surface_w * scale,
            height: surface_h * scale,
        }
    }

    pub fn contains(&self, event: PointerEvent) -> bool {
        event.x >= self.left
            && event.x < self.left + self.width
            && event.y >= self.top
            && event.y < self.top + self.height
    }
}

/// InputRouter turns pointer presses on the surface into grid cells.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputRouter {
    geometry: GeometryMapper,
}

impl InputRouter {
    pub const fn new(geometry: GeometryMapper) -> Self {
        Self { geometry }
    }

    /// Event position in surface pixels, scaled per axis by
    /// surface pixels / displayed size.
    pub fn surface_point(&self, event: PointerEvent, bounds: SurfaceBounds) -> (f32, f32) {
        let (surface_w, surface_h) = self.geometry.surface_size();
        let scale_x = surface_w as f32 / bounds.width;
        let scale_y = surface_h as f32 / bounds.height;
        (
            (event.x - bounds.left) * scale_x,
            (event.y - bounds.top) * scale_y,
        )
    }

    /// Grid cell under the event, always in bounds.
    pub fn cell_at(&self, event: PointerEvent, bounds: SurfaceBounds) -> (u32, u32) {
        let (px, py) = self.surface_point(event, bounds);
        self.geometry.pixel_to_grid(px, py)
    }
}

/// Left-button press this frame, if any
pub fn poll_pointer_down() -> Option<PointerEvent> {
    is_mouse_button_pressed(MouseButton::Left).then(|| {
        let (x, y) = mouse_position();
        PointerEvent { x, y }
    })
}

/// Keyboard shortcuts pressed this frame
pub fn process_keyboard_input() -> Vec<Command> {
    let bindings = [
        (KeyCode::Space, Command::TogglePlay),
        (KeyCode::R, Command::Reset),
        (KeyCode::N, Command::New),
    ];

    bindings
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, command)| *command)
        .collect()
}

/// Commands of the buttons clicked this frame
pub fn process_button_clicks(buttons: &[Button], mouse_pos: (f32, f32)) -> Vec<Command> {
    buttons
        .iter()
        .filter(|btn| btn.is_clicked(mouse_pos))
        .map(Button::command)
        .collect()
}
