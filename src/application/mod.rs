mod geometry;
mod session;
mod animation;
mod app;

pub use geometry::{GeometryMapper, Layout, PixelRect};
pub use session::SimulationSession;
pub use animation::{AnimationController, FrameHandle, FrameQueue, FrameScheduler, PlayIndicator};
pub use app::{Command, LifeApp};
