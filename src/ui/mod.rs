mod button;
mod panel;

pub use button::Button;
pub use panel::draw_panel;

use macroquad::prelude::{screen_height, screen_width};

use crate::application::{Command, PlayIndicator};
use crate::input::SurfaceBounds;

pub const PANEL_WIDTH: f32 = 180.0;
pub const BUTTON_HEIGHT: f32 = 40.0;
/// Gap between the grid surface and the window edges
pub const MARGIN: f32 = 10.0;

/// Get the X position where the panel starts (right side)
pub fn panel_x() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the width of the grid area
pub fn grid_area_width() -> f32 {
    screen_width() - PANEL_WIDTH
}

/// Get the height of the grid area
pub fn grid_area_height() -> f32 {
    screen_height()
}

/// Where the surface is shown this frame, fitted inside the grid area
pub fn surface_bounds(surface: (u32, u32)) -> SurfaceBounds {
    SurfaceBounds::fit(
        surface,
        (
            MARGIN,
            MARGIN,
            grid_area_width() - 2.0 * MARGIN,
            grid_area_height() - 2.0 * MARGIN,
        ),
    )
}

/// Create UI buttons with standard layout; the first one reflects the
/// current play state.
pub fn create_buttons(indicator: PlayIndicator) -> Vec<Button> {
    let px = panel_x();
    vec![
        Button::new(px, 20.0, PANEL_WIDTH, BUTTON_HEIGHT, indicator.label(), Command::TogglePlay),
        Button::new(px, 70.0, PANEL_WIDTH, BUTTON_HEIGHT, "Reset", Command::Reset),
        Button::new(px, 120.0, PANEL_WIDTH, BUTTON_HEIGHT, "New", Command::New),
    ]
}
