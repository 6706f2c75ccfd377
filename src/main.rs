use anyhow::{Context, Result};
use clap::Parser;
use macroquad::prelude::*;
use tracing::info;

use life_canvas::{
    Config, FrameQueue, LifeApp, Palette, Settings,
    input, rendering::Presenter,
    ui::{self, PANEL_WIDTH},
};

/// Window edge cap so large grids still open on an ordinary display.
const MAX_WINDOW_EDGE: u32 = 1000;

fn main() -> Result<()> {
    init_tracing();
    let settings = Config::parse()
        .settings()
        .context("invalid grid configuration")?;
    info!(
        dims = %settings.dims,
        cell_size = settings.layout.cell_size(),
        seed = ?settings.seed,
        "Starting Game of Life viewer",
    );

    macroquad::Window::from_config(window_conf(&settings), run(settings));
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn window_conf(settings: &Settings) -> Conf {
    let pitch = settings.layout.pitch();
    let border = settings.layout.border_size();
    let surface_w = pitch * settings.dims.width() + border;
    let surface_h = pitch * settings.dims.height() + border;
    let margin = 2 * ui::MARGIN as u32;

    Conf {
        window_title: "Conway's Game of Life".to_owned(),
        window_width: ((surface_w + margin).min(MAX_WINDOW_EDGE) + PANEL_WIDTH as u32) as i32,
        window_height: (surface_h + margin).clamp(450, MAX_WINDOW_EDGE) as i32,
        window_resizable: true,
        ..Default::default()
    }
}

async fn run(settings: Settings) {
    let mut app: LifeApp = LifeApp::new(
        settings.session(),
        settings.layout,
        Palette::default(),
        FrameQueue::new(),
    );
    let mut surface = app.create_surface();
    app.render(&mut surface);
    let mut presenter = Presenter::new(&surface);

    loop {
        // Refresh boundary first: frames requested below wait for the next pass.
        app.begin_refresh();

        let mouse_pos = mouse_position();
        let bounds = ui::surface_bounds(app.renderer().geometry().surface_size());
        let buttons = ui::create_buttons(app.indicator());

        // Commands and clicks mutate first; frames due at this refresh run after.
        let mut commands = input::process_button_clicks(&buttons, mouse_pos);
        commands.extend(input::process_keyboard_input());
        for command in commands {
            app.dispatch(command, &mut surface);
        }

        if let Some(event) = input::poll_pointer_down().filter(|event| bounds.contains(*event)) {
            app.pointer_down(event, bounds, &mut surface);
        }

        app.run_due_frames(&mut surface);

        clear_background(Color::from_rgba(20, 20, 20, 255));
        presenter.draw(&surface, bounds);
        ui::draw_panel(&app, &ui::create_buttons(app.indicator()), mouse_pos);

        next_frame().await;
    }
}
