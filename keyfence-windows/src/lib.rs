//! Win32 host for the keyfence interception engine
//!
//! Wires a [`keyfence_core::InterceptorEngine`] to the system-wide
//! `WH_KEYBOARD_LL` hook channel and provides the accessibility-shortcut
//! guard used while keys are being suppressed. Everything Win32-specific
//! is gated on `cfg(windows)`; on other targets the crate is empty.

#[cfg(windows)]
pub mod accessibility;
#[cfg(windows)]
pub mod hook;

#[cfg(windows)]
pub use accessibility::{AccessibilityFeatures, AccessibilityGuard};
#[cfg(windows)]
pub use hook::new_engine;
