//! Hook lifecycle state machine

use std::sync::atomic::{AtomicU8, Ordering};

/// Lifecycle states of the interception engine.
///
/// `Unhooked -> Hooked -> Started <-> Stopped`, with every state able to
/// return to `Unhooked`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No hook channel installed. Initial and terminal state.
    Unhooked = 0,
    /// Channel installed, suppression not yet enabled.
    Hooked = 1,
    /// Suppression decisions are produced.
    Started = 2,
    /// Channel still installed, suppression inert.
    Stopped = 3,
}

impl EngineState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => EngineState::Unhooked,
            1 => EngineState::Hooked,
            2 => EngineState::Started,
            _ => EngineState::Stopped,
        }
    }
}

/// Atomic cell holding the lifecycle state.
///
/// The event handler reads this once per delivered event; transitions come
/// from application threads.
#[derive(Debug)]
pub(crate) struct StateCell(AtomicU8);

impl StateCell {
    pub fn new() -> Self {
        StateCell(AtomicU8::new(EngineState::Unhooked as u8))
    }

    pub fn load(&self) -> EngineState {
        EngineState::from_u8(self.0.load(Ordering::Acquire))
    }

    /// `Unhooked -> Hooked`. Returns false from any other state.
    pub fn transition_hooked(&self) -> bool {
        self.0
            .compare_exchange(
                EngineState::Unhooked as u8,
                EngineState::Hooked as u8,
                Ordering::AcqRel,
                Ordering::Acquire,
            )
            .is_ok()
    }

    /// Any state except `Unhooked` -> `to`. Returns false while unhooked.
    pub fn transition_running(&self, to: EngineState) -> bool {
        debug_assert!(matches!(to, EngineState::Started | EngineState::Stopped));
        self.0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |raw| {
                (raw != EngineState::Unhooked as u8).then_some(to as u8)
            })
            .is_ok()
    }

    /// Unconditional reset to `Unhooked`.
    pub fn reset(&self) {
        self.0.store(EngineState::Unhooked as u8, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_unhooked() {
        let cell = StateCell::new();
        assert_eq!(cell.load(), EngineState::Unhooked);
    }

    #[test]
    fn test_hooked_only_from_unhooked() {
        let cell = StateCell::new();
        assert!(cell.transition_hooked());
        assert_eq!(cell.load(), EngineState::Hooked);
        assert!(!cell.transition_hooked());
    }

    #[test]
    fn test_running_transitions_require_hook() {
        let cell = StateCell::new();
        assert!(!cell.transition_running(EngineState::Started));
        assert_eq!(cell.load(), EngineState::Unhooked);

        cell.transition_hooked();
        assert!(cell.transition_running(EngineState::Started));
        assert!(cell.transition_running(EngineState::Stopped));
        assert!(cell.transition_running(EngineState::Started));
        assert_eq!(cell.load(), EngineState::Started);
    }

    #[test]
    fn test_reset_returns_to_unhooked() {
        let cell = StateCell::new();
        cell.transition_hooked();
        cell.transition_running(EngineState::Started);
        cell.reset();
        assert_eq!(cell.load(), EngineState::Unhooked);
    }
}
