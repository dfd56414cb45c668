//! Interceptor registry and evaluation order

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Mutex, MutexGuard};

use log::error;

use crate::error::{Error, Result};
use crate::types::{KeyCode, KEYCODE_MAX, KEYCODE_MIN};

use super::input::KeyEvent;
use super::key_state::KeyStateTable;

/// A caller-supplied suppression decision.
///
/// Implementations see every delivered event while the engine is started,
/// together with a read-only view of the key-state table, and return
/// `true` to suppress the event. The view must not be retained beyond the
/// call.
///
/// Interceptors run on the hook thread under the registry lock: they must
/// return quickly and must not call registration methods of the same
/// engine.
pub trait Interceptor: Send {
    fn intercept(&mut self, event: &KeyEvent, keys: &KeyStateTable) -> bool;
}

impl<F> Interceptor for F
where
    F: FnMut(&KeyEvent, &KeyStateTable) -> bool + Send,
{
    fn intercept(&mut self, event: &KeyEvent, keys: &KeyStateTable) -> bool {
        self(event, keys)
    }
}

/// A fixed key combination: fires while every listed code is down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCombo {
    codes: Box<[KeyCode]>,
}

impl FixedCombo {
    /// Validates and copies a code sequence. Empty sequences and codes
    /// outside `[KEYCODE_MIN, KEYCODE_MAX]` are rejected.
    pub fn new(codes: &[KeyCode]) -> Result<Self> {
        if codes.is_empty() {
            return Err(Error::EmptyCombo);
        }
        for &code in codes {
            if !(KEYCODE_MIN..=KEYCODE_MAX).contains(&code) {
                return Err(Error::InvalidKeyCode(code));
            }
        }
        Ok(Self {
            codes: codes.into(),
        })
    }

    pub fn codes(&self) -> &[KeyCode] {
        &self.codes
    }

    /// True when every code in the combination is currently down. The
    /// scan stops at the first code found up.
    fn matches(&self, keys: &KeyStateTable) -> bool {
        self.codes.iter().all(|&code| keys.is_down(code))
    }
}

struct RegistryInner {
    combos: Vec<FixedCombo>,
    custom: Vec<Box<dyn Interceptor>>,
}

/// Ordered collections of fixed and custom interceptors.
///
/// One lock guards both collections so registration stays atomic relative
/// to evaluation; an entry is visible to the event path no later than the
/// next event after its registration call returns.
pub struct InterceptorRegistry {
    inner: Mutex<RegistryInner>,
}

impl InterceptorRegistry {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(RegistryInner {
                combos: Vec::new(),
                custom: Vec::new(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, RegistryInner> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                error!("interceptor registry lock poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    pub(crate) fn add_combo(&self, combo: FixedCombo) {
        self.lock().combos.push(combo);
    }

    pub(crate) fn add_custom(&self, interceptor: Box<dyn Interceptor>) {
        self.lock().custom.push(interceptor);
    }

    pub(crate) fn clear_combos(&self) {
        self.lock().combos.clear();
    }

    pub(crate) fn clear_custom(&self) {
        self.lock().custom.clear();
    }

    /// Number of registered (fixed, custom) entries.
    pub(crate) fn counts(&self) -> (usize, usize) {
        let inner = self.lock();
        (inner.combos.len(), inner.custom.len())
    }

    /// Decides whether `event` should be suppressed.
    ///
    /// Custom interceptors run first in registration order and
    /// short-circuit on the first suppression. A panicking interceptor is
    /// logged and counts as "no suppression" for that entry only. Fixed
    /// combinations are then scanned in registration order.
    pub(crate) fn evaluate(&self, event: &KeyEvent, keys: &KeyStateTable) -> bool {
        let mut inner = self.lock();

        for (index, interceptor) in inner.custom.iter_mut().enumerate() {
            match catch_unwind(AssertUnwindSafe(|| interceptor.intercept(event, keys))) {
                Ok(true) => return true,
                Ok(false) => {}
                Err(payload) => {
                    error!(
                        "custom interceptor #{index} panicked: {}",
                        panic_message(&*payload)
                    );
                }
            }
        }

        inner.combos.iter().any(|combo| combo.matches(keys))
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VirtualKey;

    #[test]
    fn test_combo_rejects_empty_sequence() {
        assert!(matches!(FixedCombo::new(&[]), Err(Error::EmptyCombo)));
    }

    #[test]
    fn test_combo_rejects_out_of_range_codes() {
        assert!(matches!(
            FixedCombo::new(&[0]),
            Err(Error::InvalidKeyCode(0))
        ));
        assert!(matches!(
            FixedCombo::new(&[VirtualKey::KeyA.code(), 255]),
            Err(Error::InvalidKeyCode(255))
        ));
    }

    #[test]
    fn test_combo_keeps_registration_order() {
        let combo = FixedCombo::new(&[VirtualKey::Control.code(), VirtualKey::KeyK.code()]).unwrap();
        assert_eq!(
            combo.codes(),
            &[VirtualKey::Control.code(), VirtualKey::KeyK.code()]
        );
    }
}
