//! Key-combination parsing

use crate::error::{Error, Result};
use crate::types::{KeyCode, VirtualKey};

/// A parsed key combination ready for registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    codes: Vec<KeyCode>,
}

impl KeyCombo {
    /// Parse a combination string like "CTRL+SHIFT+K" or "lwin".
    ///
    /// Parts are separated by `+` or whitespace and are case insensitive.
    /// The generic modifier words (CTRL, ALT, SHIFT) map to the alias
    /// codes and therefore match either side; the sided words (LCTRL,
    /// RSHIFT, ...) pin one variant. WIN maps to the left variant because
    /// no generic OS code exists for the meta key.
    ///
    /// # Examples
    /// ```
    /// use keyfence_core::combo::KeyCombo;
    /// use keyfence_core::VirtualKey;
    ///
    /// let combo = KeyCombo::parse("CTRL+SHIFT+K").unwrap();
    /// assert_eq!(
    ///     combo.codes(),
    ///     &[
    ///         VirtualKey::Control.code(),
    ///         VirtualKey::Shift.code(),
    ///         VirtualKey::KeyK.code(),
    ///     ]
    /// );
    /// ```
    pub fn parse(combo_str: &str) -> Result<Self> {
        let parts: Vec<String> = combo_str
            .split(|c: char| c == '+' || c.is_whitespace())
            .map(|s| s.trim().to_uppercase())
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            return Err(Error::ParseError("empty combination string".to_string()));
        }

        let mut codes = Vec::with_capacity(parts.len());
        for part in &parts {
            codes.push(parse_key(part)?.code());
        }
        Ok(Self { codes })
    }

    /// The code sequence in the order the parts were written.
    pub fn codes(&self) -> &[KeyCode] {
        &self.codes
    }
}

/// Parse one key name to a VirtualKey.
fn parse_key(key_str: &str) -> Result<VirtualKey> {
    match key_str {
        // Single character keys
        s if s.chars().count() == 1 => {
            let ch = s.chars().next().unwrap();
            match ch {
                'A' => Ok(VirtualKey::KeyA),
                'B' => Ok(VirtualKey::KeyB),
                'C' => Ok(VirtualKey::KeyC),
                'D' => Ok(VirtualKey::KeyD),
                'E' => Ok(VirtualKey::KeyE),
                'F' => Ok(VirtualKey::KeyF),
                'G' => Ok(VirtualKey::KeyG),
                'H' => Ok(VirtualKey::KeyH),
                'I' => Ok(VirtualKey::KeyI),
                'J' => Ok(VirtualKey::KeyJ),
                'K' => Ok(VirtualKey::KeyK),
                'L' => Ok(VirtualKey::KeyL),
                'M' => Ok(VirtualKey::KeyM),
                'N' => Ok(VirtualKey::KeyN),
                'O' => Ok(VirtualKey::KeyO),
                'P' => Ok(VirtualKey::KeyP),
                'Q' => Ok(VirtualKey::KeyQ),
                'R' => Ok(VirtualKey::KeyR),
                'S' => Ok(VirtualKey::KeyS),
                'T' => Ok(VirtualKey::KeyT),
                'U' => Ok(VirtualKey::KeyU),
                'V' => Ok(VirtualKey::KeyV),
                'W' => Ok(VirtualKey::KeyW),
                'X' => Ok(VirtualKey::KeyX),
                'Y' => Ok(VirtualKey::KeyY),
                'Z' => Ok(VirtualKey::KeyZ),
                '0' => Ok(VirtualKey::Key0),
                '1' => Ok(VirtualKey::Key1),
                '2' => Ok(VirtualKey::Key2),
                '3' => Ok(VirtualKey::Key3),
                '4' => Ok(VirtualKey::Key4),
                '5' => Ok(VirtualKey::Key5),
                '6' => Ok(VirtualKey::Key6),
                '7' => Ok(VirtualKey::Key7),
                '8' => Ok(VirtualKey::Key8),
                '9' => Ok(VirtualKey::Key9),
                '=' => Ok(VirtualKey::OemPlus),
                '-' => Ok(VirtualKey::OemMinus),
                ',' => Ok(VirtualKey::OemComma),
                '.' => Ok(VirtualKey::OemPeriod),
                ';' => Ok(VirtualKey::Oem1),
                '/' => Ok(VirtualKey::Oem2),
                '`' => Ok(VirtualKey::Oem3),
                '[' => Ok(VirtualKey::Oem4),
                '\\' => Ok(VirtualKey::Oem5),
                ']' => Ok(VirtualKey::Oem6),
                '\'' => Ok(VirtualKey::Oem7),
                _ => Err(Error::ParseError(format!("unknown key: {s}"))),
            }
        }

        // Modifiers
        "CTRL" | "CONTROL" => Ok(VirtualKey::Control),
        "LCTRL" | "LCONTROL" => Ok(VirtualKey::LControl),
        "RCTRL" | "RCONTROL" => Ok(VirtualKey::RControl),
        "ALT" | "MENU" | "OPTION" => Ok(VirtualKey::Menu),
        "LALT" | "LMENU" => Ok(VirtualKey::LMenu),
        "RALT" | "RMENU" | "ALTGR" => Ok(VirtualKey::RMenu),
        "SHIFT" => Ok(VirtualKey::Shift),
        "LSHIFT" => Ok(VirtualKey::LShift),
        "RSHIFT" => Ok(VirtualKey::RShift),
        "WIN" | "LWIN" | "META" | "SUPER" | "CMD" | "COMMAND" => Ok(VirtualKey::LWin),
        "RWIN" => Ok(VirtualKey::RWin),

        // Special keys
        "SPACE" => Ok(VirtualKey::Space),
        "ENTER" | "RETURN" => Ok(VirtualKey::Return),
        "TAB" => Ok(VirtualKey::Tab),
        "BACKSPACE" | "BACK" => Ok(VirtualKey::Back),
        "DELETE" | "DEL" => Ok(VirtualKey::Delete),
        "INSERT" | "INS" => Ok(VirtualKey::Insert),
        "ESCAPE" | "ESC" => Ok(VirtualKey::Escape),
        "CAPSLOCK" | "CAPS" => Ok(VirtualKey::Capital),
        "HOME" => Ok(VirtualKey::Home),
        "END" => Ok(VirtualKey::End),
        "PAGEUP" | "PRIOR" => Ok(VirtualKey::Prior),
        "PAGEDOWN" | "NEXT" => Ok(VirtualKey::Next),
        "LEFT" => Ok(VirtualKey::Left),
        "RIGHT" => Ok(VirtualKey::Right),
        "UP" => Ok(VirtualKey::Up),
        "DOWN" => Ok(VirtualKey::Down),
        "PRINTSCREEN" | "SNAPSHOT" => Ok(VirtualKey::Snapshot),
        "PAUSE" => Ok(VirtualKey::Pause),
        "NUMLOCK" => Ok(VirtualKey::NumLock),
        "SCROLLLOCK" | "SCROLL" => Ok(VirtualKey::Scroll),
        "APPS" => Ok(VirtualKey::Apps),

        // Function keys
        "F1" => Ok(VirtualKey::F1),
        "F2" => Ok(VirtualKey::F2),
        "F3" => Ok(VirtualKey::F3),
        "F4" => Ok(VirtualKey::F4),
        "F5" => Ok(VirtualKey::F5),
        "F6" => Ok(VirtualKey::F6),
        "F7" => Ok(VirtualKey::F7),
        "F8" => Ok(VirtualKey::F8),
        "F9" => Ok(VirtualKey::F9),
        "F10" => Ok(VirtualKey::F10),
        "F11" => Ok(VirtualKey::F11),
        "F12" => Ok(VirtualKey::F12),

        // Named OEM keys
        "PLUS" => Ok(VirtualKey::OemPlus),
        "MINUS" => Ok(VirtualKey::OemMinus),
        "COMMA" => Ok(VirtualKey::OemComma),
        "PERIOD" => Ok(VirtualKey::OemPeriod),
        "SEMICOLON" => Ok(VirtualKey::Oem1),
        "SLASH" => Ok(VirtualKey::Oem2),
        "GRAVE" => Ok(VirtualKey::Oem3),
        "LEFTBRACKET" => Ok(VirtualKey::Oem4),
        "BACKSLASH" => Ok(VirtualKey::Oem5),
        "RIGHTBRACKET" => Ok(VirtualKey::Oem6),
        "QUOTE" => Ok(VirtualKey::Oem7),

        _ => Err(Error::ParseError(format!("unknown key: {key_str}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_key() {
        let combo = KeyCombo::parse("lwin").unwrap();
        assert_eq!(combo.codes(), &[VirtualKey::LWin.code()]);
    }

    #[test]
    fn test_parse_multi_key_combo() {
        let combo = KeyCombo::parse("CTRL+ALT+DEL").unwrap();
        assert_eq!(
            combo.codes(),
            &[
                VirtualKey::Control.code(),
                VirtualKey::Menu.code(),
                VirtualKey::Delete.code(),
            ]
        );
    }

    #[test]
    fn test_parse_space_separated() {
        let combo = KeyCombo::parse("ctrl shift k").unwrap();
        assert_eq!(
            combo.codes(),
            &[
                VirtualKey::Control.code(),
                VirtualKey::Shift.code(),
                VirtualKey::KeyK.code(),
            ]
        );
    }

    #[test]
    fn test_parse_mixed_separators() {
        let combo = KeyCombo::parse("ctrl+shift k").unwrap();
        assert_eq!(combo.codes().len(), 3);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(
            KeyCombo::parse("CTRL+SHIFT+A").unwrap(),
            KeyCombo::parse("ctrl+shift+a").unwrap()
        );
        assert_eq!(
            KeyCombo::parse("Ctrl+Shift+A").unwrap(),
            KeyCombo::parse("ctrl+shift+a").unwrap()
        );
    }

    #[test]
    fn test_parse_meta_variants() {
        for name in ["win", "lwin", "meta", "super", "cmd", "command"] {
            let combo = KeyCombo::parse(name).unwrap();
            assert_eq!(combo.codes(), &[VirtualKey::LWin.code()], "{name}");
        }
        let combo = KeyCombo::parse("rwin").unwrap();
        assert_eq!(combo.codes(), &[VirtualKey::RWin.code()]);
    }

    #[test]
    fn test_parse_sided_modifiers() {
        let combo = KeyCombo::parse("lctrl+ralt").unwrap();
        assert_eq!(
            combo.codes(),
            &[VirtualKey::LControl.code(), VirtualKey::RMenu.code()]
        );
    }

    #[test]
    fn test_parse_preserves_order() {
        let combo = KeyCombo::parse("k+shift+ctrl").unwrap();
        assert_eq!(
            combo.codes(),
            &[
                VirtualKey::KeyK.code(),
                VirtualKey::Shift.code(),
                VirtualKey::Control.code(),
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(KeyCombo::parse("").is_err());
        assert!(KeyCombo::parse("  ").is_err());
        assert!(KeyCombo::parse("+").is_err());
        assert!(KeyCombo::parse("ctrl+unknownkey").is_err());
    }
}
