//! Browser timers for [`NavigationController`](contracts::navigation::NavigationController).

use contracts::navigation::{Scheduler, TimerTask};
use gloo_timers::callback::Timeout;

/// `setTimeout`-backed scheduler. Dropping or cancelling the returned
/// [`Timeout`] clears the browser timer.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlooScheduler;

impl Scheduler for GlooScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: TimerTask) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        drop(handle.cancel());
    }
}
