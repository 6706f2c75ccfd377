use clap::Parser;

use crate::application::{Layout, SimulationSession};
use crate::domain::{GridDimensions, Universe};
use crate::error::LifeError;

/// Largest surface edge a texture upload accepts.
pub const MAX_SURFACE_PX: u32 = u16::MAX as u32;

/// Command-line options for the interactive viewer.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "life_canvas", about = "Interactive Game of Life on a pixel grid")]
pub struct Config {
    /// Number of grid columns.
    #[arg(
        long,
        value_name = "COLUMNS",
        default_value_t = 64,
        value_parser = clap::value_parser!(u32).range(1..=4096)
    )]
    pub width: u32,
    /// Number of grid rows.
    #[arg(
        long,
        value_name = "ROWS",
        default_value_t = 64,
        value_parser = clap::value_parser!(u32).range(1..=4096)
    )]
    pub height: u32,
    /// Edge length of one cell in pixels.
    #[arg(
        long = "cell-size",
        value_name = "PIXELS",
        default_value_t = Layout::CELL_SIZE_PX,
        value_parser = clap::value_parser!(u32).range(1..=64)
    )]
    pub cell_size: u32,
    /// Width of the border between cells in pixels.
    #[arg(
        long = "border-size",
        value_name = "PIXELS",
        default_value_t = Layout::BORDER_SIZE_PX,
        value_parser = clap::value_parser!(u32).range(0..=16)
    )]
    pub border_size: u32,
    /// Seed for the random initial pattern; omit for a different run each time.
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
    /// Start with every cell dead instead of a random pattern.
    #[arg(long)]
    pub empty: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            cell_size: Layout::CELL_SIZE_PX,
            border_size: Layout::BORDER_SIZE_PX,
            seed: None,
            empty: false,
        }
    }
}

/// Validated configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub dims: GridDimensions,
    pub layout: Layout,
    pub seed: Option<u64>,
    pub seeded: bool,
}

impl Config {
    pub fn settings(&self) -> Result<Settings, LifeError> {
        let dims = GridDimensions::new(self.width, self.height)?;
        let layout = Layout::new(self.cell_size, self.border_size)?;

        let surface = |cells: u32| {
            u64::from(layout.pitch()) * u64::from(cells) + u64::from(layout.border_size())
        };
        let (width, height) = (surface(dims.width()), surface(dims.height()));
        if width > u64::from(MAX_SURFACE_PX) || height > u64::from(MAX_SURFACE_PX) {
            return Err(LifeError::SurfaceTooLarge {
                width: width.min(u64::from(u32::MAX)) as u32,
                height: height.min(u64::from(u32::MAX)) as u32,
                max: MAX_SURFACE_PX,
            });
        }

        Ok(Settings {
            dims,
            layout,
            seed: self.seed,
            seeded: !self.empty,
        })
    }
}

impl Settings {
    /// Start a session with these settings.
    pub fn session<U: Universe>(&self) -> SimulationSession<U> {
        match self.seed {
            Some(seed) => SimulationSession::with_seed(self.dims, self.seeded, seed),
            None => SimulationSession::new(self.dims, self.seeded),
        }
    }
}
