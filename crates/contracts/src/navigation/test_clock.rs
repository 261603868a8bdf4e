//! Virtual clock for driving timers deterministically in tests.

use super::{Scheduler, TimerTask};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId {
    due: u64,
    seq: u64,
}

#[derive(Default)]
struct Clock {
    now: u64,
    next_seq: u64,
    pending: BTreeMap<(u64, u64), TimerTask>,
}

/// Timers fire only when [`ManualScheduler::advance`] moves the clock past
/// their deadline, in deadline order.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    clock: Rc<RefCell<Clock>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> u64 {
        self.clock.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.clock.borrow().pending.len()
    }

    pub fn advance(&self, ms: u64) {
        let target = self.clock.borrow().now + ms;
        loop {
            let task = {
                let mut clock = self.clock.borrow_mut();
                match clock.pending.first_key_value() {
                    Some((&(due, _), _)) if due <= target => {
                        clock.now = due;
                        clock.pending.pop_first().map(|(_, task)| task)
                    }
                    _ => None,
                }
            };
            match task {
                Some(task) => task(),
                None => break,
            }
        }
        self.clock.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Handle = TimerId;

    fn schedule(&self, delay_ms: u32, task: TimerTask) -> TimerId {
        let mut clock = self.clock.borrow_mut();
        let id = TimerId {
            due: clock.now + u64::from(delay_ms),
            seq: clock.next_seq,
        };
        clock.next_seq += 1;
        clock.pending.insert((id.due, id.seq), task);
        id
    }

    fn cancel(&self, handle: TimerId) {
        self.clock
            .borrow_mut()
            .pending
            .remove(&(handle.due, handle.seq));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_fires_in_deadline_order_and_respects_cancel() {
        let clock = ManualScheduler::new();
        let log = Rc::new(RefCell::new(Vec::new()));

        let l = Rc::clone(&log);
        clock.schedule(200, Box::new(move || l.borrow_mut().push("late")));
        let l = Rc::clone(&log);
        clock.schedule(100, Box::new(move || l.borrow_mut().push("early")));
        let fired = Rc::new(Cell::new(false));
        let f = Rc::clone(&fired);
        let cancelled = clock.schedule(50, Box::new(move || f.set(true)));
        clock.cancel(cancelled);

        clock.advance(150);
        assert_eq!(*log.borrow(), vec!["early"]);
        assert_eq!(clock.now(), 150);

        clock.advance(50);
        assert_eq!(*log.borrow(), vec!["early", "late"]);
        assert!(!fired.get());
        assert_eq!(clock.pending(), 0);
    }
}
