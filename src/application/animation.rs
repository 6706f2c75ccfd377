use tracing::{debug, info, trace};

/// Token identifying one scheduled frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(u64);

/// Run-once frame callbacks that must be re-requested explicitly.
pub trait FrameScheduler {
    /// Ask for one callback at the next display refresh.
    fn request_frame(&mut self) -> FrameHandle;

    /// Withdraw a request. Unknown or already fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// FrameQueue delivers requests once per display refresh.
///
/// `begin_refresh` marks the refresh boundary: only requests made before it
/// become due. Anything requested while the refresh is handled, including the
/// handle issued by `play`, waits for the next boundary.
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    requested: Vec<FrameHandle>,
    due: Vec<FrameHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a display refresh: outstanding requests become due.
    pub fn begin_refresh(&mut self) {
        self.due.append(&mut self.requested);
    }

    /// Take every request due at this refresh.
    pub fn drain_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.due)
    }

    /// Requests not yet delivered, due or not.
    pub fn pending(&self) -> usize {
        self.requested.len() + self.due.len()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.requested.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.requested.retain(|pending| *pending != handle);
        self.due.retain(|pending| *pending != handle);
    }
}

/// What a play/pause indicator should show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayIndicator {
    /// Animation is stopped; the control offers to start it.
    Paused,
    /// Animation is running; the control offers to stop it.
    Running,
}

impl PlayIndicator {
    pub const fn label(self) -> &'static str {
        match self {
            PlayIndicator::Paused => "Play",
            PlayIndicator::Running => "Pause",
        }
    }
}

/// AnimationController drives the render/advance loop.
///
/// The presence of a pending frame handle *is* the running state; there is
/// no separate flag to drift out of sync. The cycle itself is supplied by the
/// caller, which reads the session afresh on every call.
#[derive(Debug)]
pub struct AnimationController<S: FrameScheduler = FrameQueue> {
    scheduler: S,
    handle: Option<FrameHandle>,
}

impl<S: FrameScheduler> AnimationController<S> {
    pub fn new(scheduler: S) -> Self {
        Self {
            scheduler,
            handle: None,
        }
    }

    pub const fn is_paused(&self) -> bool {
        self.handle.is_none()
    }

    pub const fn indicator(&self) -> PlayIndicator {
        if self.is_paused() {
            PlayIndicator::Paused
        } else {
            PlayIndicator::Running
        }
    }

    /// Start animating: run one cycle now and schedule the next.
    /// Returns false (and does nothing) when already running.
    pub fn play(&mut self, cycle: impl FnOnce()) -> bool {
        if !self.is_paused() {
            debug!("Play requested while already running");
            return false;
        }
        info!("Animation started");
        self.run_cycle(cycle);
        true
    }

    /// Stop animating. Safe to call when already paused.
    pub fn pause(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.scheduler.cancel_frame(handle);
            info!("Animation paused");
        }
    }

    /// Handle a delivered frame. Only the most recently issued handle runs
    /// the cycle; anything else is stale and ignored.
    pub fn on_frame(&mut self, fired: FrameHandle, cycle: impl FnOnce()) -> bool {
        if self.handle != Some(fired) {
            debug!(?fired, current = ?self.handle, "Ignoring stale frame");
            return false;
        }
        self.run_cycle(cycle);
        true
    }

    fn run_cycle(&mut self, cycle: impl FnOnce()) {
        trace!("Running animation cycle");
        cycle();
        self.handle = Some(self.scheduler.request_frame());
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_paused() {
        let controller = AnimationController::new(FrameQueue::new());
        assert!(controller.is_paused());
        assert_eq!(controller.indicator(), PlayIndicator::Paused);
        assert_eq!(controller.indicator().label(), "Play");
    }

    #[test]
    fn test_play_runs_one_cycle_and_schedules() {
        let mut controller = AnimationController::new(FrameQueue::new());
        let mut cycles = 0;
        assert!(controller.play(|| cycles += 1));
        assert_eq!(cycles, 1);
        assert!(!controller.is_paused());
        assert_eq!(controller.indicator().label(), "Pause");
        assert_eq!(controller.scheduler().pending(), 1);
    }

    #[test]
    fn test_play_while_running_does_not_double_schedule() {
        let mut controller = AnimationController::new(FrameQueue::new());
        let mut cycles = 0;
        controller.play(|| cycles += 1);
        assert!(!controller.play(|| cycles += 1));
        assert_eq!(cycles, 1);
        assert_eq!(controller.scheduler().pending(), 1);
    }

    #[test]
    fn test_pause_cancels_and_is_idempotent() {
        let mut controller = AnimationController::new(FrameQueue::new());
        controller.play(|| {});
        controller.pause();
        assert!(controller.is_paused());
        assert_eq!(controller.scheduler().pending(), 0);

        controller.pause();
        assert!(controller.is_paused());
    }

    #[test]
    fn test_frames_reschedule_until_paused() {
        let mut controller = AnimationController::new(FrameQueue::new());
        let mut cycles = 0;
        controller.play(|| cycles += 1);

        for _ in 0..3 {
            controller.scheduler_mut().begin_refresh();
            let due = controller.scheduler_mut().drain_due();
            assert_eq!(due.len(), 1);
            for handle in due {
                assert!(controller.on_frame(handle, || cycles += 1));
            }
        }
        assert_eq!(cycles, 4);

        controller.pause();
        controller.scheduler_mut().begin_refresh();
        assert!(controller.scheduler_mut().drain_due().is_empty());
    }

    #[test]
    fn test_requests_wait_for_next_refresh() {
        let mut queue = FrameQueue::new();
        queue.begin_refresh();
        let handle = queue.request_frame();
        assert!(queue.drain_due().is_empty());
        assert_eq!(queue.pending(), 1);

        queue.begin_refresh();
        assert_eq!(queue.drain_due(), vec![handle]);
        assert_eq!(queue.pending(), 0);
    }

    #[test]
    fn test_cancel_removes_due_request() {
        let mut queue = FrameQueue::new();
        let handle = queue.request_frame();
        queue.begin_refresh();
        queue.cancel_frame(handle);
        assert!(queue.drain_due().is_empty());
    }

    #[test]
    fn test_stale_handle_is_ignored() {
        let mut controller = AnimationController::new(FrameQueue::new());
        controller.play(|| {});
        controller.scheduler_mut().begin_refresh();
        let first = controller.scheduler_mut().drain_due()[0];
        controller.pause();
        controller.play(|| {});

        let mut ran = false;
        assert!(!controller.on_frame(first, || ran = true));
        assert!(!ran);
        assert!(!controller.is_paused());
    }
}
