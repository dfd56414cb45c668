//! Key event model delivered by the hook channel

use crate::types::KeyCode;

/// Kind of a raw keyboard transition.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    KeyDown = 0,
    KeyUp = 1,
    SysKeyDown = 2,
    SysKeyUp = 3,
}

impl KeyEventKind {
    /// True for key-down and system-key-down transitions.
    pub fn is_down(self) -> bool {
        matches!(self, KeyEventKind::KeyDown | KeyEventKind::SysKeyDown)
    }

    /// True for key-up and system-key-up transitions.
    pub fn is_up(self) -> bool {
        matches!(self, KeyEventKind::KeyUp | KeyEventKind::SysKeyUp)
    }

    /// Maps an FFI discriminant back to a kind.
    pub fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(KeyEventKind::KeyDown),
            1 => Some(KeyEventKind::KeyUp),
            2 => Some(KeyEventKind::SysKeyDown),
            3 => Some(KeyEventKind::SysKeyUp),
            _ => None,
        }
    }
}

/// One keyboard event as delivered by the OS channel.
///
/// The fields mirror the low-level hook record: virtual-key code, hardware
/// scan code, flag bits, event timestamp and the extra-info word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub kind: KeyEventKind,
    pub vk_code: KeyCode,
    pub scan_code: u32,
    pub flags: u32,
    pub time: u32,
    pub extra_info: usize,
}

impl KeyEvent {
    /// Creates an event with only kind and key code set.
    pub fn new(kind: KeyEventKind, vk_code: impl Into<KeyCode>) -> Self {
        Self {
            kind,
            vk_code: vk_code.into(),
            scan_code: 0,
            flags: 0,
            time: 0,
            extra_info: 0,
        }
    }

    /// Key-down event for `vk_code`.
    pub fn down(vk_code: impl Into<KeyCode>) -> Self {
        Self::new(KeyEventKind::KeyDown, vk_code)
    }

    /// Key-up event for `vk_code`.
    pub fn up(vk_code: impl Into<KeyCode>) -> Self {
        Self::new(KeyEventKind::KeyUp, vk_code)
    }

    /// System-key-down event (key pressed while Alt is held).
    pub fn sys_down(vk_code: impl Into<KeyCode>) -> Self {
        Self::new(KeyEventKind::SysKeyDown, vk_code)
    }

    /// System-key-up event.
    pub fn sys_up(vk_code: impl Into<KeyCode>) -> Self {
        Self::new(KeyEventKind::SysKeyUp, vk_code)
    }
}
