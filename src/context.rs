//! App Context
//!
//! Small shared context complementing the stores: a reload trigger that
//! panels subscribe to so a successful login or a global refresh re-runs
//! their initial fetches.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct AppContext {
    reload_trigger: RwSignal<u32>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            reload_trigger: RwSignal::new(0),
        }
    }

    /// Subscribe to reloads; reading this inside an effect re-runs the
    /// effect whenever [`AppContext::reload`] fires.
    pub fn reload_trigger(&self) -> ReadSignal<u32> {
        self.reload_trigger.read_only()
    }

    pub fn reload(&self) {
        self.reload_trigger.update(|n| *n = n.wrapping_add(1));
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
