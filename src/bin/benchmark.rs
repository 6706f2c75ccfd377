//! Headless benchmark of the render/advance cycle at several grid sizes

use std::time::Instant;

use anyhow::{Context, Result};
use life_canvas::{
    FrameQueue, GridDimensions, Layout, LifeApp, Palette, PixelBuffer, SimulationSession,
};

/// Fixed seed so every run measures the same universes.
const SEED: u64 = 0x5EED;

struct CycleTiming {
    render_ms: f64,
    tick_ms: f64,
    cycle_ms: f64,
}

fn benchmark_cycles(size: u32, iterations: u32) -> Result<CycleTiming> {
    let dims = GridDimensions::new(size, size).context("benchmark grid size")?;
    let mut app: LifeApp = LifeApp::new(
        SimulationSession::with_seed(dims, true, SEED),
        Layout::default(),
        Palette::default(),
        FrameQueue::new(),
    );
    let mut surface: PixelBuffer = app.create_surface();

    // Render and tick in isolation
    let start = Instant::now();
    for _ in 0..iterations {
        app.render(&mut surface);
    }
    let render_ms = start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations);

    let start = Instant::now();
    for _ in 0..iterations {
        app.session_mut().advance();
    }
    let tick_ms = start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations);

    // Full cycles through the animation loop
    let start = Instant::now();
    app.play(&mut surface);
    for _ in 1..iterations {
        app.begin_refresh();
        app.run_due_frames(&mut surface);
    }
    let cycle_ms = start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations);

    Ok(CycleTiming { render_ms, tick_ms, cycle_ms })
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    println!("=== Render/Advance Cycle Benchmark ===\n");

    let sizes = [32, 64, 128, 256];
    let iterations = 20;

    println!("{:>10} {:>12} {:>12} {:>12} {:>14}", "Size", "Render", "Tick", "Cycle", "Cells/sec");
    println!("{:-<64}", "");

    for size in sizes {
        let timing = benchmark_cycles(size, iterations)?;
        let cells = f64::from(size) * f64::from(size);
        println!(
            "{:>10} {:>10.2}ms {:>10.2}ms {:>10.2}ms {:>12.1}M",
            format!("{}x{}", size, size),
            timing.render_ms,
            timing.tick_ms,
            timing.cycle_ms,
            cells / (timing.cycle_ms / 1000.0) / 1_000_000.0,
        );
    }

    Ok(())
}
