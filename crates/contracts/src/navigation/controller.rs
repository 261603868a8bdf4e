use super::{NavigationState, Scheduler, SubsectionKey, TabKey};
use std::cell::RefCell;
use std::rc::{Rc, Weak};

type Listener = Rc<dyn Fn(&NavigationState)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u64);

struct Inner<H> {
    state: NavigationState,
    tab_timer: Option<H>,
    /// Pending subsection commit and the tab it belongs to.
    subsection_timer: Option<(TabKey, H)>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener: u64,
    disposed: bool,
}

/// Drives [`NavigationState`] through staged tab and subsection transitions.
///
/// Each selection flips state immediately and arms a timer that finishes the
/// transition after `transition_ms`. Re-selecting before the timer fires
/// replaces it, so at most one tab timer and one subsection timer are pending.
/// A subsection selection on another tab commits the replaced tab's pending
/// subsection at once, so no tab is left with a stale displayed value.
/// [`dispose`](Self::dispose) (also run on drop) cancels both.
pub struct NavigationController<S: Scheduler> {
    scheduler: S,
    transition_ms: u32,
    inner: Rc<RefCell<Inner<S::Handle>>>,
}

impl<S: Scheduler> NavigationController<S> {
    pub fn new(state: NavigationState, scheduler: S, transition_ms: u32) -> Self {
        Self {
            scheduler,
            transition_ms,
            inner: Rc::new(RefCell::new(Inner {
                state,
                tab_timer: None,
                subsection_timer: None,
                listeners: Vec::new(),
                next_listener: 0,
                disposed: false,
            })),
        }
    }

    pub fn state(&self) -> NavigationState {
        self.inner.borrow().state.clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.borrow().disposed
    }

    /// Register a callback that receives the state after every change.
    pub fn subscribe(&self, listener: impl Fn(&NavigationState) + 'static) -> ListenerId {
        let mut inner = self.inner.borrow_mut();
        let id = ListenerId(inner.next_listener);
        inner.next_listener += 1;
        if !inner.disposed {
            inner.listeners.push((id, Rc::new(listener)));
        }
        id
    }

    pub fn unsubscribe(&self, id: ListenerId) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(listener_id, _)| *listener_id != id);
    }

    /// Show `tab` now and mark the transition; `active_tab` catches up once
    /// the window elapses.
    pub fn select_tab(&self, tab: TabKey) {
        let previous = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || inner.state.displayed_tab == tab {
                return;
            }
            inner.state.displayed_tab = tab;
            inner.state.is_transitioning = true;
            inner.tab_timer.take()
        };
        if let Some(handle) = previous {
            self.scheduler.cancel(handle);
        }
        log::debug!("navigation: tab -> {}", tab);

        let weak = Rc::downgrade(&self.inner);
        let handle = self.scheduler.schedule(
            self.transition_ms,
            Box::new(move || {
                finish(&weak, |inner| {
                    inner.tab_timer = None;
                    inner.state.active_tab = tab;
                    inner.state.is_transitioning = false;
                })
            }),
        );
        self.inner.borrow_mut().tab_timer = Some(handle);
        notify(&self.inner);
    }

    /// Record `key` as the active subsection of `tab` now; the displayed
    /// subsection follows after the window.
    pub fn select_subsection(&self, tab: TabKey, key: SubsectionKey) {
        let previous = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed || inner.state.active_subsection[tab] == key {
                return;
            }
            inner.state.active_subsection[tab] = key;
            inner.state.is_subsection_transitioning = true;
            let pending = inner.subsection_timer.take();
            match pending {
                Some((pending_tab, handle)) => {
                    if pending_tab != tab {
                        let committed = inner.state.active_subsection[pending_tab];
                        inner.state.displayed_subsection[pending_tab] = committed;
                    }
                    Some(handle)
                }
                None => None,
            }
        };
        if let Some(handle) = previous {
            self.scheduler.cancel(handle);
        }
        log::debug!("navigation: {} subsection -> {}", tab, key);

        let weak = Rc::downgrade(&self.inner);
        let handle = self.scheduler.schedule(
            self.transition_ms,
            Box::new(move || {
                finish(&weak, |inner| {
                    inner.subsection_timer = None;
                    inner.state.displayed_subsection[tab] = key;
                    inner.state.is_subsection_transitioning = false;
                })
            }),
        );
        self.inner.borrow_mut().subsection_timer = Some((tab, handle));
        notify(&self.inner);
    }

    /// Cancel pending timers and detach listeners. Later selections are ignored.
    pub fn dispose(&self) {
        let pending = {
            let mut inner = self.inner.borrow_mut();
            if inner.disposed {
                return;
            }
            inner.disposed = true;
            inner.listeners.clear();
            [
                inner.tab_timer.take(),
                inner.subsection_timer.take().map(|(_, handle)| handle),
            ]
        };
        for handle in pending.into_iter().flatten() {
            self.scheduler.cancel(handle);
        }
        log::debug!("navigation: disposed");
    }
}

impl<S: Scheduler> Drop for NavigationController<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}

fn finish<H>(weak: &Weak<RefCell<Inner<H>>>, apply: impl FnOnce(&mut Inner<H>)) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    apply(&mut inner.borrow_mut());
    notify(&inner);
}

// Listeners run with the borrow released so they may call back into the controller.
fn notify<H>(inner: &Rc<RefCell<Inner<H>>>) {
    let (snapshot, listeners) = {
        let inner = inner.borrow();
        let listeners: Vec<Listener> = inner
            .listeners
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        (inner.state.clone(), listeners)
    };
    for listener in listeners {
        listener(&snapshot);
    }
}
