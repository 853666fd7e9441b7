use std::collections::HashMap;

use parking_lot::Mutex;

/// Where a browser is in its externally visible life.
///
/// `Created` is entered on the after-created notification and `Closed` on
/// before-close. Closing and closed collapse into one state since the host
/// only ever sees a single before-close.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    Created,
    Closed,
}

/// Per-browser lifecycle, keyed by engine browser identifier.
///
/// Closed browsers keep their entry so that `Closed` stays terminal: a late
/// after-created for an identifier that already closed is still rejected.
/// That costs one small entry per browser over the adapter's lifetime, which
/// is bounded by the number of browsers the engine ever creates.
#[derive(Debug, Default)]
pub(crate) struct Lifecycle {
    states: Mutex<HashMap<i32, LifecycleState>>,
}

impl Lifecycle {
    /// Returns false if the browser was already created (or closed).
    pub(crate) fn created(&self, identifier: i32) -> bool {
        let mut states = self.states.lock();
        if states.contains_key(&identifier) {
            return false;
        }
        states.insert(identifier, LifecycleState::Created);
        true
    }

    /// Returns false unless the browser was live.
    pub(crate) fn closed(&self, identifier: i32) -> bool {
        let mut states = self.states.lock();
        match states.get_mut(&identifier) {
            Some(state @ LifecycleState::Created) => {
                *state = LifecycleState::Closed;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn state(&self, identifier: i32) -> Option<LifecycleState> {
        self.states.lock().get(&identifier).copied()
    }

    pub(crate) fn is_live(&self, identifier: i32) -> bool {
        self.state(identifier) == Some(LifecycleState::Created)
    }
}

#[cfg(test)]
mod tests {
    use super::{Lifecycle, LifecycleState};

    #[test]
    fn closed_browsers_stay_closed_among_others() {
        let lifecycle = Lifecycle::default();
        for identifier in 1..=3 {
            assert!(lifecycle.created(identifier));
        }
        assert!(lifecycle.closed(2));

        assert!(!lifecycle.created(2));
        assert!(!lifecycle.is_live(2));
        assert!(lifecycle.is_live(1));
        assert!(lifecycle.is_live(3));
    }

    #[test]
    fn transitions_are_one_way() {
        let lifecycle = Lifecycle::default();
        assert_eq!(lifecycle.state(1), None);
        assert!(!lifecycle.closed(1));

        assert!(lifecycle.created(1));
        assert!(!lifecycle.created(1));
        assert!(lifecycle.is_live(1));

        assert!(lifecycle.closed(1));
        assert!(!lifecycle.closed(1));
        assert!(!lifecycle.created(1));
        assert_eq!(lifecycle.state(1), Some(LifecycleState::Closed));
        assert!(!lifecycle.is_live(1));
    }
}
