// Domain layer - cell values, dimensions and the Universe contract
pub mod domain;

// Application layer - geometry, session and the animation loop
pub mod application;

// Infrastructure layer - raster surface, input and widgets
pub mod rendering;
pub mod input;
pub mod ui;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{CellSnapshot, CellState, GridDimensions, Life, Universe};
pub use application::{
    AnimationController, Command, FrameQueue, GeometryMapper, Layout, LifeApp, SimulationSession,
};
pub use rendering::{GridRenderer, Palette, PixelBuffer, Surface};
pub use config::{Config, Settings};
pub use error::LifeError;
