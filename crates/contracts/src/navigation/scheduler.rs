/// Deferred work handed to a [`Scheduler`].
pub type TimerTask = Box<dyn FnOnce()>;

/// Single-threaded source of cancellable one-shot timers.
pub trait Scheduler {
    type Handle: 'static;

    /// Run `task` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, task: TimerTask) -> Self::Handle;

    /// Prevent a scheduled task from running. Cancelling a timer that has
    /// already fired is a no-op.
    fn cancel(&self, handle: Self::Handle);
}
