//! Global key-state tracking

use std::sync::atomic::{AtomicBool, Ordering};

use crate::types::{KeyCode, VirtualKey};

use super::input::KeyEventKind;

/// Number of slots in the key-state table, one per representable code.
pub const KEY_TABLE_SIZE: usize = 255;

/// Bitmap of currently-pressed keys, updated on every observed transition.
///
/// The table stores left/right modifier variants independently, exactly as
/// the event source delivers them; the generic shift/control/alt codes are
/// resolved at query time. The table is never reset; it always reflects
/// the most recent transition observed for each raw code.
pub struct KeyStateTable {
    down: [AtomicBool; KEY_TABLE_SIZE],
}

impl KeyStateTable {
    pub(crate) fn new() -> Self {
        Self {
            down: std::array::from_fn(|_| AtomicBool::new(false)),
        }
    }

    /// Records a key transition. Kinds other than down/up are ignored, as
    /// are codes outside the table.
    pub(crate) fn record_transition(&self, kind: KeyEventKind, vk_code: KeyCode) {
        let Some(slot) = self.down.get(vk_code as usize) else {
            return;
        };
        if kind.is_down() {
            slot.store(true, Ordering::Relaxed);
        } else if kind.is_up() {
            slot.store(false, Ordering::Relaxed);
        }
    }

    /// Returns whether `vk_code` is currently held down.
    ///
    /// The generic modifier codes resolve to the OR of their left/right
    /// variants; every other code reads its own slot.
    pub fn is_down(&self, vk_code: KeyCode) -> bool {
        if vk_code == VirtualKey::Control.code() {
            return self.raw_down(VirtualKey::LControl.code())
                || self.raw_down(VirtualKey::RControl.code());
        }
        if vk_code == VirtualKey::Menu.code() {
            return self.raw_down(VirtualKey::LMenu.code())
                || self.raw_down(VirtualKey::RMenu.code());
        }
        if vk_code == VirtualKey::Shift.code() {
            return self.raw_down(VirtualKey::LShift.code())
                || self.raw_down(VirtualKey::RShift.code());
        }
        self.raw_down(vk_code)
    }

    fn raw_down(&self, vk_code: KeyCode) -> bool {
        self.down
            .get(vk_code as usize)
            .map_or(false, |slot| slot.load(Ordering::Relaxed))
    }

    /// Copies the table into a plain byte array (1 = down). This is the
    /// read-only view handed to C callbacks.
    pub fn snapshot(&self) -> [u8; KEY_TABLE_SIZE] {
        std::array::from_fn(|i| self.down[i].load(Ordering::Relaxed) as u8)
    }
}
