// ============================================================================
// DEBOUNCE - explicit timer scheduling
// ============================================================================

use gloo_timers::callback::Timeout;

pub type Task = Box<dyn FnOnce()>;

/// Something that can run a task later and forget it on request
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Task) -> Self::Handle;

    /// Cancelling a task that already ran is a no-op
    fn cancel(&self, handle: Self::Handle);
}

/// Browser scheduler backed by `setTimeout`
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Task) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        let _ = handle.cancel();
    }
}

/// Runs only the last task pushed within a `delay_ms` window.
/// Dropping the debouncer cancels whatever is pending.
pub struct Debouncer<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Debouncer<S> {
    pub fn new(scheduler: S, delay_ms: u32) -> Self {
        Self {
            scheduler,
            delay_ms,
            pending: None,
        }
    }

    /// Applies from the next `push`; a task already pending keeps its timer
    pub fn set_delay_ms(&mut self, delay_ms: u32) {
        self.delay_ms = delay_ms;
    }

    /// Supersedes any pending task with `task`
    pub fn push<F>(&mut self, task: F)
    where
        F: FnOnce() + 'static,
    {
        self.cancel();
        self.pending = Some(self.scheduler.schedule(self.delay_ms, Box::new(task)));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<S: Scheduler> Drop for Debouncer<S> {
    fn drop(&mut self) {
        self.cancel();
    }
}
