//! Tab/subsection navigation with a staged transition window.
//!
//! [`NavigationController`] owns a [`NavigationState`] and two cancellable
//! timers (one for tabs, one for subsections). Timers come from a
//! [`Scheduler`] so the same controller runs on browser timers in the
//! frontend and on a virtual clock in tests.

mod controller;
mod error;
mod scheduler;
mod state;
mod tab_key;
mod tab_map;

#[cfg(test)]
pub(crate) mod test_clock;

pub use controller::{ListenerId, NavigationController};
pub use error::NavigationError;
pub use scheduler::{Scheduler, TimerTask};
pub use state::{NavigationState, SubsectionKey};
pub use tab_key::TabKey;
pub use tab_map::TabMap;
