//! keyfence core - system-wide keyboard interception engine
//!
//! This crate implements the platform-free half of keyfence: the global
//! key-state tracker, the interceptor registry, the per-event suppression
//! decision and the hook lifecycle state machine. An OS host (such as the
//! `keyfence-windows` crate) connects the engine to the system keyboard
//! hook channel through the [`HookChannel`] seam and forwards every
//! keyboard event to [`InterceptorEngine::handle_event`].
//!
//! Some key combinations are reserved by the OS and never reach the hook
//! channel at all: Ctrl+Alt+Delete, Win+L and Win+G cannot be intercepted.

pub mod combo;
pub mod engine;
pub mod error;
pub mod ffi;
pub mod types;

pub use combo::KeyCombo;
pub use engine::{
    EngineState, EventDisposition, HookChannel, Interceptor, InterceptorEngine, KeyEvent,
    KeyEventKind, KeyStateTable, KEY_TABLE_SIZE,
};
pub use error::{Error, Result};
pub use types::{KeyCode, VirtualKey, KEYCODE_MAX, KEYCODE_MIN};
