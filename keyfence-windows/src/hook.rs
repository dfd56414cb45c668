//! Win32 low-level keyboard hook channel
//!
//! Connects an [`InterceptorEngine`] to the system `WH_KEYBOARD_LL`
//! channel. The hook procedure runs on the thread that installed the hook
//! (which must pump messages) and is hardened against the usual failure
//! modes: every panic is contained at the procedure boundary, pointers
//! are validated before dereferencing, and on any internal failure the
//! event is passed through rather than lost.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Arc, RwLock, RwLockWriteGuard, Weak};
use std::time::{Duration, Instant};

use log::{error, trace, warn};
use windows::Win32::{
    Foundation::{HHOOK, LPARAM, LRESULT, WPARAM},
    System::LibraryLoader::GetModuleHandleW,
    UI::WindowsAndMessaging::{
        CallNextHookEx, SetWindowsHookExW, UnhookWindowsHookEx, KBDLLHOOKSTRUCT, WH_KEYBOARD_LL,
        WM_KEYDOWN, WM_KEYUP, WM_SYSKEYDOWN, WM_SYSKEYUP,
    },
};

use keyfence_core::{
    Error, HookChannel, InterceptorEngine, KeyCode, KeyEvent, KeyEventKind, Result,
};

/// Engine the hook procedure forwards events to while a hook is
/// installed. Win32 offers no per-hook user data, so this slot is the one
/// piece of process-wide state the host keeps.
static ACTIVE_ENGINE: RwLock<Option<Arc<InterceptorEngine>>> = RwLock::new(None);

/// Longest acceptable hook-procedure pass; Windows silently removes
/// hooks that stall its input queue.
const SLOW_HOOK_THRESHOLD: Duration = Duration::from_millis(10);

/// Creates the process-wide engine wired to the Win32 keyboard hook.
///
/// Construct exactly one per process and keep the `Arc` for the lifetime
/// of the application; `hook()`/`unhook()` on the engine install and
/// remove the OS hook.
pub fn new_engine() -> Arc<InterceptorEngine> {
    Arc::new_cyclic(|engine: &Weak<InterceptorEngine>| {
        InterceptorEngine::with_channel(Box::new(WindowsHookChannel {
            engine: engine.clone(),
            hook: None,
        }))
    })
}

/// `HookChannel` backed by `SetWindowsHookExW(WH_KEYBOARD_LL, ..)`.
pub struct WindowsHookChannel {
    engine: Weak<InterceptorEngine>,
    hook: Option<HHOOK>,
}

impl HookChannel for WindowsHookChannel {
    fn install(&mut self) -> Result<()> {
        let engine = self
            .engine
            .upgrade()
            .ok_or_else(|| Error::ChannelFailure("engine already dropped".to_string()))?;

        *active_engine_slot() = Some(engine);

        let installed = unsafe {
            GetModuleHandleW(None).and_then(|module| {
                SetWindowsHookExW(WH_KEYBOARD_LL, Some(low_level_keyboard_proc), module, 0)
            })
        };
        match installed {
            Ok(hook) => {
                self.hook = Some(hook);
                Ok(())
            }
            Err(err) => {
                *active_engine_slot() = None;
                Err(Error::ChannelFailure(err.to_string()))
            }
        }
    }

    fn uninstall(&mut self) -> Result<()> {
        let result = match self.hook.take() {
            Some(hook) => unsafe {
                UnhookWindowsHookEx(hook).map_err(|err| Error::ChannelFailure(err.to_string()))
            },
            None => Ok(()),
        };
        *active_engine_slot() = None;
        result
    }
}

fn active_engine_slot() -> RwLockWriteGuard<'static, Option<Arc<InterceptorEngine>>> {
    match ACTIVE_ENGINE.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn active_engine() -> Option<Arc<InterceptorEngine>> {
    match ACTIVE_ENGINE.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Maps the hook `wparam` to an event kind; `None` for anything that is
/// not a keyboard transition.
fn event_kind(wparam: WPARAM) -> Option<KeyEventKind> {
    match wparam.0 as u32 {
        WM_KEYDOWN => Some(KeyEventKind::KeyDown),
        WM_KEYUP => Some(KeyEventKind::KeyUp),
        WM_SYSKEYDOWN => Some(KeyEventKind::SysKeyDown),
        WM_SYSKEYUP => Some(KeyEventKind::SysKeyUp),
        _ => None,
    }
}

unsafe extern "system" fn low_level_keyboard_proc(
    ncode: i32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    let result = catch_unwind(AssertUnwindSafe(|| {
        // Non-actionable notifications go straight down the chain.
        if ncode < 0 || lparam.0 == 0 {
            return CallNextHookEx(None, ncode, wparam, lparam);
        }
        let Some(engine) = active_engine() else {
            return CallNextHookEx(None, ncode, wparam, lparam);
        };
        let Some(kind) = event_kind(wparam) else {
            return CallNextHookEx(None, ncode, wparam, lparam);
        };

        let kb = *(lparam.0 as *const KBDLLHOOKSTRUCT);
        let event = KeyEvent {
            kind,
            vk_code: KeyCode::try_from(kb.vkCode).unwrap_or(0),
            scan_code: kb.scanCode,
            flags: kb.flags.0,
            time: kb.time,
            extra_info: kb.dwExtraInfo,
        };
        trace!(
            "{:?} vk=0x{:02X} scan={} flags={:#x} time={} extra={}",
            event.kind,
            event.vk_code,
            event.scan_code,
            event.flags,
            event.time,
            event.extra_info
        );

        let start = Instant::now();
        let disposition = engine.handle_event(&event);
        let elapsed = start.elapsed();
        if elapsed > SLOW_HOOK_THRESHOLD {
            warn!("keyboard hook pass took {elapsed:?}; the system may remove the hook");
        }

        if disposition.is_suppressed() {
            return LRESULT(1);
        }
        CallNextHookEx(None, ncode, wparam, lparam)
    }));

    match result {
        Ok(lresult) => lresult,
        Err(_) => {
            error!("panic contained in keyboard hook procedure; passing event through");
            CallNextHookEx(None, ncode, wparam, lparam)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_kind_mapping() {
        assert_eq!(
            event_kind(WPARAM(WM_KEYDOWN as usize)),
            Some(KeyEventKind::KeyDown)
        );
        assert_eq!(
            event_kind(WPARAM(WM_KEYUP as usize)),
            Some(KeyEventKind::KeyUp)
        );
        assert_eq!(
            event_kind(WPARAM(WM_SYSKEYDOWN as usize)),
            Some(KeyEventKind::SysKeyDown)
        );
        assert_eq!(
            event_kind(WPARAM(WM_SYSKEYUP as usize)),
            Some(KeyEventKind::SysKeyUp)
        );
        assert_eq!(event_kind(WPARAM(0)), None);
    }

    #[test]
    fn test_new_engine_starts_unhooked() {
        let engine = new_engine();
        assert_eq!(engine.state(), keyfence_core::EngineState::Unhooked);
        assert!(active_engine().is_none());
    }
}
