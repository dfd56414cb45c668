//! Accessibility shortcut guard
//!
//! Sticky, toggle and filter keys each have a keyboard-activated shortcut
//! (five Shift taps, Num Lock held, right Shift held) that can fire while
//! keys are being suppressed. The guard snapshots their configuration,
//! disables the hotkey-activation paths while the kiosk is active and
//! restores the snapshots on teardown.

use std::mem::size_of;
use std::ops::{BitAnd, BitOr};

use anyhow::Result;
use log::debug;
use windows::Win32::UI::Accessibility::{
    FILTERKEYS, FKF_CONFIRMHOTKEY, FKF_FILTERKEYSON, FKF_HOTKEYACTIVE, SKF_CONFIRMHOTKEY,
    SKF_HOTKEYACTIVE, SKF_STICKYKEYSON, STICKYKEYS, TKF_CONFIRMHOTKEY, TKF_HOTKEYACTIVE,
    TKF_TOGGLEKEYSON, TOGGLEKEYS,
};
use windows::Win32::UI::WindowsAndMessaging::{
    SystemParametersInfoW, SPI_GETFILTERKEYS, SPI_GETSTICKYKEYS, SPI_GETTOGGLEKEYS,
    SPI_SETFILTERKEYS, SPI_SETSTICKYKEYS, SPI_SETTOGGLEKEYS, SYSTEM_PARAMETERS_INFO_ACTION,
    SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS,
};

/// Selects which accessibility shortcut features an operation acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccessibilityFeatures(u32);

impl AccessibilityFeatures {
    pub const STICKY_KEYS: Self = Self(0x01);
    pub const TOGGLE_KEYS: Self = Self(0x02);
    pub const FILTER_KEYS: Self = Self(0x04);
    pub const ALL: Self = Self(0x07);
    pub const NONE: Self = Self(0);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for AccessibilityFeatures {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for AccessibilityFeatures {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

/// One `SystemParametersInfoW` get or set call for an accessibility
/// parameter struct.
fn system_parameters_info<T>(action: SYSTEM_PARAMETERS_INFO_ACTION, value: &mut T) -> Result<()> {
    unsafe {
        SystemParametersInfoW(
            action,
            size_of::<T>() as u32,
            Some(value as *mut T as *mut _),
            SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
        )?;
    }
    Ok(())
}

/// Saved accessibility configuration, held from [`disable`] until the
/// matching [`restore`].
///
/// [`disable`]: AccessibilityGuard::disable
/// [`restore`]: AccessibilityGuard::restore
#[derive(Default)]
pub struct AccessibilityGuard {
    sticky: Option<STICKYKEYS>,
    toggle: Option<TOGGLEKEYS>,
    filter: Option<FILTERKEYS>,
}

impl AccessibilityGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshots each requested feature and, unless the feature is
    /// already toggled on by the user (who may be relying on it), clears
    /// its hotkey-activation and confirmation flags.
    pub fn disable(&mut self, features: AccessibilityFeatures) -> Result<()> {
        if features.contains(AccessibilityFeatures::STICKY_KEYS) {
            let mut saved = STICKYKEYS {
                cbSize: size_of::<STICKYKEYS>() as u32,
                ..Default::default()
            };
            system_parameters_info(SPI_GETSTICKYKEYS, &mut saved)?;
            if !saved.dwFlags.contains(SKF_STICKYKEYSON) {
                let mut off = saved;
                off.dwFlags &= !SKF_HOTKEYACTIVE;
                off.dwFlags &= !SKF_CONFIRMHOTKEY;
                system_parameters_info(SPI_SETSTICKYKEYS, &mut off)?;
            }
            self.sticky = Some(saved);
            debug!("sticky keys shortcut disabled");
        }

        if features.contains(AccessibilityFeatures::TOGGLE_KEYS) {
            let mut saved = TOGGLEKEYS {
                cbSize: size_of::<TOGGLEKEYS>() as u32,
                ..Default::default()
            };
            system_parameters_info(SPI_GETTOGGLEKEYS, &mut saved)?;
            if !saved.dwFlags.contains(TKF_TOGGLEKEYSON) {
                let mut off = saved;
                off.dwFlags &= !TKF_HOTKEYACTIVE;
                off.dwFlags &= !TKF_CONFIRMHOTKEY;
                system_parameters_info(SPI_SETTOGGLEKEYS, &mut off)?;
            }
            self.toggle = Some(saved);
            debug!("toggle keys shortcut disabled");
        }

        if features.contains(AccessibilityFeatures::FILTER_KEYS) {
            let mut saved = FILTERKEYS {
                cbSize: size_of::<FILTERKEYS>() as u32,
                ..Default::default()
            };
            system_parameters_info(SPI_GETFILTERKEYS, &mut saved)?;
            if !saved.dwFlags.contains(FKF_FILTERKEYSON) {
                let mut off = saved;
                off.dwFlags &= !FKF_HOTKEYACTIVE;
                off.dwFlags &= !FKF_CONFIRMHOTKEY;
                system_parameters_info(SPI_SETFILTERKEYS, &mut off)?;
            }
            self.filter = Some(saved);
            debug!("filter keys shortcut disabled");
        }

        Ok(())
    }

    /// Writes every requested snapshot back unconditionally. Features
    /// never disabled by this guard are left untouched.
    pub fn restore(&mut self, features: AccessibilityFeatures) -> Result<()> {
        if features.contains(AccessibilityFeatures::STICKY_KEYS) {
            if let Some(mut saved) = self.sticky.take() {
                system_parameters_info(SPI_SETSTICKYKEYS, &mut saved)?;
                debug!("sticky keys configuration restored");
            }
        }
        if features.contains(AccessibilityFeatures::TOGGLE_KEYS) {
            if let Some(mut saved) = self.toggle.take() {
                system_parameters_info(SPI_SETTOGGLEKEYS, &mut saved)?;
                debug!("toggle keys configuration restored");
            }
        }
        if features.contains(AccessibilityFeatures::FILTER_KEYS) {
            if let Some(mut saved) = self.filter.take() {
                system_parameters_info(SPI_SETFILTERKEYS, &mut saved)?;
                debug!("filter keys configuration restored");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_mask_operators() {
        let mask = AccessibilityFeatures::STICKY_KEYS | AccessibilityFeatures::FILTER_KEYS;
        assert!(mask.contains(AccessibilityFeatures::STICKY_KEYS));
        assert!(mask.contains(AccessibilityFeatures::FILTER_KEYS));
        assert!(!mask.contains(AccessibilityFeatures::TOGGLE_KEYS));
        assert!(!mask.contains(AccessibilityFeatures::ALL));
    }

    #[test]
    fn test_all_covers_every_feature() {
        assert!(AccessibilityFeatures::ALL.contains(AccessibilityFeatures::STICKY_KEYS));
        assert!(AccessibilityFeatures::ALL.contains(AccessibilityFeatures::TOGGLE_KEYS));
        assert!(AccessibilityFeatures::ALL.contains(AccessibilityFeatures::FILTER_KEYS));
    }

    #[test]
    fn test_empty_mask() {
        assert!(AccessibilityFeatures::NONE.is_empty());
        assert!(
            (AccessibilityFeatures::STICKY_KEYS & AccessibilityFeatures::TOGGLE_KEYS).is_empty()
        );
        // The empty mask is contained in everything.
        assert!(AccessibilityFeatures::STICKY_KEYS.contains(AccessibilityFeatures::NONE));
    }
}
