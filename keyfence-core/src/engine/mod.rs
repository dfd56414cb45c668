//! keyfence interception engine
//!
//! This module provides the engine that decides, for every system-wide
//! keyboard event, whether the event should be suppressed before it
//! reaches any application.

mod engine;
mod input;
mod key_state;
mod registry;
mod state;

pub use engine::{EventDisposition, HookChannel, InterceptorEngine};
pub use input::{KeyEvent, KeyEventKind};
pub use key_state::{KeyStateTable, KEY_TABLE_SIZE};
pub use registry::{FixedCombo, Interceptor, InterceptorRegistry};
pub use state::EngineState;
