use std::{
    sync::OnceLock,
    thread::{self, ThreadId},
};

use log::error;

/// Tracks which thread the engine uses as its UI thread.
///
/// Unless it is bound up front, the first UI-bound call claims the thread it
/// runs on. Every later UI-bound call must come from that same thread.
#[derive(Debug)]
pub struct UiThread {
    bound: OnceLock<ThreadId>,
    enforce: bool,
}

impl Default for UiThread {
    fn default() -> Self {
        Self::lazy()
    }
}

impl UiThread {
    pub fn lazy() -> Self {
        Self {
            bound: OnceLock::new(),
            enforce: true,
        }
    }

    pub fn bound_to(id: ThreadId) -> Self {
        let bound = OnceLock::new();
        let _ = bound.set(id);
        Self {
            bound,
            enforce: true,
        }
    }

    pub fn unchecked() -> Self {
        Self {
            bound: OnceLock::new(),
            enforce: false,
        }
    }

    pub fn thread_id(&self) -> Option<ThreadId> {
        self.bound.get().copied()
    }

    pub fn is_current(&self) -> bool {
        let current = thread::current().id();
        *self.bound.get_or_init(|| current) == current
    }

    /// Panics when called off the UI thread. Continuing would race the
    /// engine's own state, so this is never recoverable.
    #[track_caller]
    pub fn assert_current(&self, operation: &str) {
        if !self.enforce || self.is_current() {
            return;
        }

        let current = thread::current().id();
        error!(
            "{operation} called on {current:?}, but the engine UI thread is {:?}",
            self.thread_id()
        );
        panic!("{operation} must only be called on the engine UI thread");
    }
}
