use tracing::debug;

use super::{
    AnimationController, FrameHandle, FrameQueue, FrameScheduler, GeometryMapper, Layout,
    PlayIndicator, SimulationSession,
};
use crate::domain::{Life, Universe};
use crate::input::{InputRouter, PointerEvent, SurfaceBounds};
use crate::rendering::{GridRenderer, Palette, PixelBuffer, Surface};

/// User commands coming from buttons or keyboard shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePlay,
    /// Replace with a freshly seeded universe.
    Reset,
    /// Replace with an all-dead universe.
    New,
}

/// LifeApp wires the session, the animation loop, the renderer and input
/// routing together. Every handler receives the surface explicitly and
/// finishes its mutation before rendering.
///
/// Replacing the universe does not pause a running animation; the next
/// cycle simply reads the new universe.
pub struct LifeApp<U: Universe = Life, S: FrameScheduler = FrameQueue> {
    session: SimulationSession<U>,
    animation: AnimationController<S>,
    renderer: GridRenderer,
    router: InputRouter,
}

impl<U: Universe, S: FrameScheduler> LifeApp<U, S> {
    pub fn new(
        session: SimulationSession<U>,
        layout: Layout,
        palette: Palette,
        scheduler: S,
    ) -> Self {
        let geometry = GeometryMapper::new(session.dimensions(), layout);
        Self {
            session,
            animation: AnimationController::new(scheduler),
            renderer: GridRenderer::new(geometry, palette),
            router: InputRouter::new(geometry),
        }
    }

    /// Blank surface sized for the grid.
    pub fn create_surface(&self) -> PixelBuffer {
        let (width, height) = self.renderer.geometry().surface_size();
        PixelBuffer::new(width, height, self.renderer.palette().dead)
    }

    pub fn render(&self, surface: &mut impl Surface) {
        self.renderer.render(surface, &self.session.snapshot());
    }

    pub fn is_paused(&self) -> bool {
        self.animation.is_paused()
    }

    pub fn indicator(&self) -> PlayIndicator {
        self.animation.indicator()
    }

    pub fn session(&self) -> &SimulationSession<U> {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SimulationSession<U> {
        &mut self.session
    }

    pub fn renderer(&self) -> &GridRenderer {
        &self.renderer
    }

    pub fn scheduler(&self) -> &S {
        self.animation.scheduler()
    }

    pub fn dispatch(&mut self, command: Command, surface: &mut impl Surface) {
        debug!(?command, "Dispatching command");
        match command {
            Command::TogglePlay => self.toggle_play(surface),
            Command::Reset => self.reset(surface),
            Command::New => self.new_empty(surface),
        }
    }

    pub fn toggle_play(&mut self, surface: &mut impl Surface) {
        if self.is_paused() {
            self.play(surface);
        } else {
            self.pause();
        }
    }

    /// Start the loop with one immediate cycle. No-op when running.
    pub fn play(&mut self, surface: &mut impl Surface) -> bool {
        let Self {
            session,
            animation,
            renderer,
            ..
        } = self;
        animation.play(|| Self::cycle(renderer, session, surface))
    }

    pub fn pause(&mut self) {
        self.animation.pause();
    }

    pub fn reset(&mut self, surface: &mut impl Surface) {
        self.session.reset();
        self.render(surface);
    }

    pub fn new_empty(&mut self, surface: &mut impl Surface) {
        self.session.clear();
        self.render(surface);
    }

    /// Toggle the cell under the pointer and redraw right away, whether or
    /// not the animation is running.
    pub fn pointer_down(
        &mut self,
        event: PointerEvent,
        bounds: SurfaceBounds,
        surface: &mut impl Surface,
    ) -> (u32, u32) {
        let (row, col) = self.router.cell_at(event, bounds);
        self.session.toggle_cell(row, col);
        self.render(surface);
        (row, col)
    }

    /// Run the cycle for a delivered frame if it is the current one.
    pub fn on_frame(&mut self, fired: FrameHandle, surface: &mut impl Surface) -> bool {
        let Self {
            session,
            animation,
            renderer,
            ..
        } = self;
        animation.on_frame(fired, || Self::cycle(renderer, session, surface))
    }

    /// Render the current cells, then advance one generation.
    fn cycle(renderer: &GridRenderer, session: &mut SimulationSession<U>, surface: &mut impl Surface) {
        renderer.render(surface, &session.snapshot());
        session.advance();
    }
}

impl<U: Universe> LifeApp<U, FrameQueue> {
    /// Mark a new display refresh. Call before handling any input so a cycle
    /// started by `play` during the refresh waits for the next one.
    pub fn begin_refresh(&mut self) {
        self.animation.scheduler_mut().begin_refresh();
    }

    /// Deliver the frames due at the current refresh. Returns how many
    /// cycles ran.
    pub fn run_due_frames(&mut self, surface: &mut impl Surface) -> usize {
        let due = self.animation.scheduler_mut().drain_due();
        due.into_iter()
            .filter(|&handle| self.on_frame(handle, surface))
            .count()
    }
}
