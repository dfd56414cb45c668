//! The interceptor engine: lifecycle, registration and the event path

use std::sync::{Mutex, MutexGuard};

use log::debug;

use crate::error::Result;
use crate::types::KeyCode;

use super::input::KeyEvent;
use super::key_state::KeyStateTable;
use super::registry::{FixedCombo, Interceptor, InterceptorRegistry};
use super::state::{EngineState, StateCell};

/// Connection to the OS event-delivery channel.
///
/// `install` must arrange for every system keyboard event to reach
/// [`InterceptorEngine::handle_event`]; `uninstall` must stop delivery.
/// Hosts that drive `handle_event` themselves (embedded or FFI use) rely
/// on the inert default channel.
pub trait HookChannel: Send {
    fn install(&mut self) -> Result<()>;
    fn uninstall(&mut self) -> Result<()>;
}

/// Channel for engines whose host delivers events directly.
struct InertChannel;

impl HookChannel for InertChannel {
    fn install(&mut self) -> Result<()> {
        Ok(())
    }

    fn uninstall(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Verdict returned to the event source for one keyboard event.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// The event never reaches any further consumer.
    Suppress,
    /// The event continues down the hook chain unmodified.
    PassThrough,
}

impl EventDisposition {
    pub fn is_suppressed(self) -> bool {
        matches!(self, EventDisposition::Suppress)
    }
}

/// System-wide keyboard interception engine.
///
/// One instance per process by design: construct it once at startup and
/// share it by `Arc` with the hook channel and the owning application.
/// Registration and lifecycle calls are safe to invoke concurrently with
/// event delivery.
pub struct InterceptorEngine {
    state: StateCell,
    keys: KeyStateTable,
    registry: InterceptorRegistry,
    channel: Mutex<Box<dyn HookChannel>>,
}

impl InterceptorEngine {
    /// Engine with the inert channel, for hosts that deliver events
    /// themselves.
    pub fn new() -> Self {
        Self::with_channel(Box::new(InertChannel))
    }

    /// Engine wired to an OS hook channel.
    pub fn with_channel(channel: Box<dyn HookChannel>) -> Self {
        Self {
            state: StateCell::new(),
            keys: KeyStateTable::new(),
            registry: InterceptorRegistry::new(),
            channel: Mutex::new(channel),
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> EngineState {
        self.state.load()
    }

    /// Read-only access to the key-state table.
    pub fn key_state(&self) -> &KeyStateTable {
        &self.keys
    }

    /// Registers a fixed key combination; events are suppressed while
    /// every listed code is held down.
    pub fn add_interceptor(&self, codes: &[KeyCode]) -> Result<()> {
        self.registry.add_combo(FixedCombo::new(codes)?);
        Ok(())
    }

    /// Registers a custom interceptor, evaluated before any fixed
    /// combination in registration order.
    pub fn add_custom_interceptor<I>(&self, interceptor: I)
    where
        I: Interceptor + 'static,
    {
        self.registry.add_custom(Box::new(interceptor));
    }

    /// Removes all fixed combinations.
    pub fn clear_interceptors(&self) {
        self.registry.clear_combos();
    }

    /// Removes all custom interceptors.
    pub fn clear_custom_interceptors(&self) {
        self.registry.clear_custom();
    }

    /// Number of registered (fixed, custom) interceptors.
    pub fn interceptor_counts(&self) -> (usize, usize) {
        self.registry.counts()
    }

    /// Installs the event channel. Only effective from `Unhooked`; any
    /// other state is a no-op.
    pub fn hook(&self) -> Result<()> {
        if !self.state.transition_hooked() {
            debug!("hook() ignored in state {:?}", self.state.load());
            return Ok(());
        }
        if let Err(err) = self.lock_channel().install() {
            self.state.reset();
            return Err(err);
        }
        debug!("hook channel installed");
        Ok(())
    }

    /// Enables suppression. No-op while unhooked.
    pub fn start(&self) {
        if self.state.transition_running(EngineState::Started) {
            debug!("suppression started");
        }
    }

    /// Disables suppression while keeping the channel installed. Events
    /// keep flowing and key-state tracking continues; they are just never
    /// suppressed.
    pub fn stop(&self) {
        if self.state.transition_running(EngineState::Stopped) {
            debug!("suppression stopped");
        }
    }

    /// Uninstalls the channel, clears both interceptor collections and
    /// returns to `Unhooked`. Idempotent.
    pub fn unhook(&self) -> Result<()> {
        if self.state.load() == EngineState::Unhooked {
            return Ok(());
        }
        let result = self.lock_channel().uninstall();
        self.registry.clear_combos();
        self.registry.clear_custom();
        self.state.reset();
        debug!("hook channel removed, registry cleared");
        result
    }

    /// Handles one delivered keyboard event and returns the verdict for
    /// the event source.
    ///
    /// The key transition is always recorded; suppression is only
    /// evaluated while the engine is started.
    pub fn handle_event(&self, event: &KeyEvent) -> EventDisposition {
        self.keys.record_transition(event.kind, event.vk_code);

        if self.state.load() != EngineState::Started {
            return EventDisposition::PassThrough;
        }
        if self.registry.evaluate(event, &self.keys) {
            EventDisposition::Suppress
        } else {
            EventDisposition::PassThrough
        }
    }

    fn lock_channel(&self) -> MutexGuard<'_, Box<dyn HookChannel>> {
        match self.channel.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl Default for InterceptorEngine {
    fn default() -> Self {
        Self::new()
    }
}
