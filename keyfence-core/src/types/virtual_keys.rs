//! Virtual-key codes
//!
//! The engine's native currency is the raw virtual-key code as delivered
//! by the OS hook channel. This enum names the commonly used codes; any
//! value in `[KEYCODE_MIN, KEYCODE_MAX]` is accepted by the engine whether
//! or not it has a name here.

use super::KeyCode;

#[repr(u16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VirtualKey {
    // Control keys
    Back = 0x08,           // VK_BACK (Backspace)
    Tab = 0x09,            // VK_TAB
    Return = 0x0D,         // VK_RETURN (Enter)
    Shift = 0x10,          // VK_SHIFT (generic, aliases left/right)
    Control = 0x11,        // VK_CONTROL (generic, aliases left/right)
    Menu = 0x12,           // VK_MENU (generic Alt, aliases left/right)
    Pause = 0x13,          // VK_PAUSE
    Capital = 0x14,        // VK_CAPITAL (Caps Lock)
    Escape = 0x1B,         // VK_ESCAPE
    Space = 0x20,          // VK_SPACE
    Prior = 0x21,          // VK_PRIOR (Page Up)
    Next = 0x22,           // VK_NEXT (Page Down)
    End = 0x23,            // VK_END
    Home = 0x24,           // VK_HOME
    Left = 0x25,           // VK_LEFT
    Up = 0x26,             // VK_UP
    Right = 0x27,          // VK_RIGHT
    Down = 0x28,           // VK_DOWN
    Snapshot = 0x2C,       // VK_SNAPSHOT (Print Screen)
    Insert = 0x2D,         // VK_INSERT
    Delete = 0x2E,         // VK_DELETE

    // Number keys (0-9)
    Key0 = 0x30,
    Key1 = 0x31,
    Key2 = 0x32,
    Key3 = 0x33,
    Key4 = 0x34,
    Key5 = 0x35,
    Key6 = 0x36,
    Key7 = 0x37,
    Key8 = 0x38,
    Key9 = 0x39,

    // Letter keys (A-Z)
    KeyA = 0x41,
    KeyB = 0x42,
    KeyC = 0x43,
    KeyD = 0x44,
    KeyE = 0x45,
    KeyF = 0x46,
    KeyG = 0x47,
    KeyH = 0x48,
    KeyI = 0x49,
    KeyJ = 0x4A,
    KeyK = 0x4B,
    KeyL = 0x4C,
    KeyM = 0x4D,
    KeyN = 0x4E,
    KeyO = 0x4F,
    KeyP = 0x50,
    KeyQ = 0x51,
    KeyR = 0x52,
    KeyS = 0x53,
    KeyT = 0x54,
    KeyU = 0x55,
    KeyV = 0x56,
    KeyW = 0x57,
    KeyX = 0x58,
    KeyY = 0x59,
    KeyZ = 0x5A,

    // OS meta keys
    LWin = 0x5B,           // VK_LWIN
    RWin = 0x5C,           // VK_RWIN
    Apps = 0x5D,           // VK_APPS (context menu key)

    // Numpad keys
    Numpad0 = 0x60,
    Numpad1 = 0x61,
    Numpad2 = 0x62,
    Numpad3 = 0x63,
    Numpad4 = 0x64,
    Numpad5 = 0x65,
    Numpad6 = 0x66,
    Numpad7 = 0x67,
    Numpad8 = 0x68,
    Numpad9 = 0x69,
    Multiply = 0x6A,       // VK_MULTIPLY
    Add = 0x6B,            // VK_ADD
    Subtract = 0x6D,       // VK_SUBTRACT
    Decimal = 0x6E,        // VK_DECIMAL
    Divide = 0x6F,         // VK_DIVIDE

    // Function keys
    F1 = 0x70,
    F2 = 0x71,
    F3 = 0x72,
    F4 = 0x73,
    F5 = 0x74,
    F6 = 0x75,
    F7 = 0x76,
    F8 = 0x77,
    F9 = 0x78,
    F10 = 0x79,
    F11 = 0x7A,
    F12 = 0x7B,

    // Lock keys
    NumLock = 0x90,        // VK_NUMLOCK
    Scroll = 0x91,         // VK_SCROLL

    // Sided modifier variants
    LShift = 0xA0,         // VK_LSHIFT
    RShift = 0xA1,         // VK_RSHIFT
    LControl = 0xA2,       // VK_LCONTROL
    RControl = 0xA3,       // VK_RCONTROL
    LMenu = 0xA4,          // VK_LMENU (Left Alt)
    RMenu = 0xA5,          // VK_RMENU (Right Alt/AltGr)

    // OEM keys
    Oem1 = 0xBA,           // VK_OEM_1 (;:)
    OemPlus = 0xBB,        // VK_OEM_PLUS (=+)
    OemComma = 0xBC,       // VK_OEM_COMMA
    OemMinus = 0xBD,       // VK_OEM_MINUS
    OemPeriod = 0xBE,      // VK_OEM_PERIOD
    Oem2 = 0xBF,           // VK_OEM_2 (/?)
    Oem3 = 0xC0,           // VK_OEM_3 (`~)
    Oem4 = 0xDB,           // VK_OEM_4 ([{)
    Oem5 = 0xDC,           // VK_OEM_5 (\|)
    Oem6 = 0xDD,           // VK_OEM_6 (]})
    Oem7 = 0xDE,           // VK_OEM_7 ('")
}

impl VirtualKey {
    /// The raw virtual-key code.
    pub const fn code(self) -> KeyCode {
        self as KeyCode
    }
}

impl From<VirtualKey> for KeyCode {
    fn from(key: VirtualKey) -> KeyCode {
        key.code()
    }
}
