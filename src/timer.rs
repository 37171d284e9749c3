//! Debounce Timer
//!
//! Wraps `gloo_timers::callback::Timeout` so search inputs can coalesce
//! keystrokes: each `reset` drops the pending callback and arms a new one.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;

/// Delay applied to search inputs before firing a filtered request.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

#[derive(Clone)]
pub struct Debouncer {
    delay_ms: u32,
    pending: Rc<RefCell<Option<Timeout>>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Cancel any pending callback and arm a fresh one. Only the last
    /// `reset` within the delay window fires.
    pub fn reset(&self, callback: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, callback);
        if let Some(previous) = self.pending.borrow_mut().replace(timeout) {
            previous.cancel();
        }
    }

    pub fn cancel(&self) {
        if let Some(pending) = self.pending.borrow_mut().take() {
            pending.cancel();
        }
    }
}
