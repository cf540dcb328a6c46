use gloo_timers::callback::Timeout;

/// Runs a task later on the event loop.
pub trait Scheduler {
    /// Dropping the handle cancels the task if it has not run yet.
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// At most one queued task; queuing another cancels the one before it.
pub struct Deferred<S: Scheduler> {
    scheduler: S,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> Deferred<S> {
    pub fn new(scheduler: S) -> Self {
        Self { scheduler, pending: None }
    }

    pub fn schedule(&mut self, delay_ms: u32, task: impl FnOnce() + 'static) {
        self.pending.take();
        self.pending = Some(self.scheduler.schedule(delay_ms, Box::new(task)));
    }

    pub fn cancel(&mut self) {
        self.pending.take();
    }
}
