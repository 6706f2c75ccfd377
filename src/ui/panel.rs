use macroquad::prelude::*;

use super::{Button, PANEL_WIDTH, panel_x};
use crate::application::{FrameScheduler, LifeApp, PlayIndicator};
use crate::domain::Universe;

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Draw the control panel: buttons, shortcuts and session status
pub fn draw_panel<U: Universe, S: FrameScheduler>(
    app: &LifeApp<U, S>,
    buttons: &[Button],
    mouse_pos: (f32, f32),
) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, screen_height(), Color::from_rgba(30, 30, 30, 255));

    buttons.iter().for_each(|btn| btn.draw(mouse_pos));

    let session = app.session();
    let dims = session.dimensions();
    let status_color = match app.indicator() {
        PlayIndicator::Running => Color::from_rgba(0, 255, 0, 255),
        PlayIndicator::Paused => Color::from_rgba(255, 165, 0, 255),
    };
    let status = if app.is_paused() { "Paused" } else { "Running" };

    let labels = [
        ("Shortcuts:", 190.0, 14.0, WHITE),
        ("Space: Play/Pause", 205.0, 12.0, GRAY),
        ("R: Reset  N: New", 218.0, 12.0, GRAY),
        ("Click: Toggle cell", 231.0, 12.0, GRAY),
        (&format!("Grid: {dims}"), 260.0, 14.0, LIGHTGRAY),
        ("Generation:", 290.0, 16.0, WHITE),
        (&format!("{}", session.generation()), 310.0, 20.0, Color::from_rgba(0, 255, 150, 255)),
        ("Live cells:", 340.0, 16.0, WHITE),
        (&format_number(session.live_cells()), 360.0, 18.0, LIGHTGRAY),
        ("Status:", 390.0, 16.0, WHITE),
        (status, 410.0, 16.0, status_color),
    ];

    labels.iter().for_each(|(text, y, size, color)| {
        draw_text(text, px, *y, *size, *color);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(4_096), "4.1K");
        assert_eq!(format_number(2_500_000), "2.5M");
    }
}
