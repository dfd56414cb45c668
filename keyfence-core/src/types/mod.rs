pub mod virtual_keys;

pub use virtual_keys::VirtualKey;

/// Raw OS virtual-key code.
pub type KeyCode = u16;

/// Lowest valid virtual-key code.
pub const KEYCODE_MIN: KeyCode = 1;

/// Highest valid virtual-key code.
pub const KEYCODE_MAX: KeyCode = 254;
