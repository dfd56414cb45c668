//! Foreign Function Interface for keyfence-core
//!
//! C-compatible API for hosts in other languages. The host owns event
//! delivery: it creates an engine handle, registers interceptors, drives
//! the lifecycle and forwards every keyboard event through
//! `keyfence_engine_handle_event`.

use std::os::raw::{c_int, c_void};

use crate::engine::{Interceptor, InterceptorEngine, KeyEvent, KeyEventKind, KeyStateTable};
use crate::types::KeyCode;

/// Opaque handle to an interceptor engine instance.
pub struct EngineHandle {
    engine: InterceptorEngine,
}

/// Result codes for FFI functions.
#[repr(C)]
#[derive(Debug, PartialEq)]
pub enum KeyfenceResult {
    Success = 0,
    ErrorInvalidHandle = -1,
    ErrorInvalidParameter = -2,
    ErrorRegistration = -3,
    ErrorLifecycle = -4,
}

/// Raw key event fields as delivered by the OS hook record.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct RawKeyEvent {
    pub vk_code: u32,
    pub scan_code: u32,
    pub flags: u32,
    pub time: u32,
    pub extra_info: usize,
}

/// C custom-interceptor callback; returns nonzero to suppress the event.
///
/// `keystates` points at a 255-byte snapshot of the key-state table
/// (1 = down), valid only for the duration of the call. `user_data` is the
/// pointer given at registration, stored and forwarded untouched; its
/// lifetime is the caller's responsibility.
pub type KeyfenceCallback = extern "C" fn(
    kind: c_int,
    event: *const RawKeyEvent,
    keystates: *const u8,
    user_data: *mut c_void,
) -> c_int;

struct CCallbackInterceptor {
    callback: KeyfenceCallback,
    user_data: *mut c_void,
}

// The engine never dereferences user_data; the caller guarantees whatever
// thread-safety the pointed-to data needs.
unsafe impl Send for CCallbackInterceptor {}

impl Interceptor for CCallbackInterceptor {
    fn intercept(&mut self, event: &KeyEvent, keys: &KeyStateTable) -> bool {
        let raw = RawKeyEvent {
            vk_code: event.vk_code as u32,
            scan_code: event.scan_code,
            flags: event.flags,
            time: event.time,
            extra_info: event.extra_info,
        };
        let snapshot = keys.snapshot();
        (self.callback)(event.kind as c_int, &raw, snapshot.as_ptr(), self.user_data) != 0
    }
}

/// Creates a new engine instance with the inert channel.
#[no_mangle]
pub extern "C" fn keyfence_engine_new() -> *mut EngineHandle {
    Box::into_raw(Box::new(EngineHandle {
        engine: InterceptorEngine::new(),
    }))
}

/// Frees an engine instance.
#[no_mangle]
pub extern "C" fn keyfence_engine_free(handle: *mut EngineHandle) {
    if !handle.is_null() {
        unsafe {
            drop(Box::from_raw(handle));
        }
    }
}

/// Installs the event channel (`Unhooked -> Hooked`).
#[no_mangle]
pub extern "C" fn keyfence_engine_hook(handle: *mut EngineHandle) -> KeyfenceResult {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return KeyfenceResult::ErrorInvalidHandle;
    };
    match handle.engine.hook() {
        Ok(()) => KeyfenceResult::Success,
        Err(_) => KeyfenceResult::ErrorLifecycle,
    }
}

/// Uninstalls the channel and clears all registered interceptors.
#[no_mangle]
pub extern "C" fn keyfence_engine_unhook(handle: *mut EngineHandle) -> KeyfenceResult {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return KeyfenceResult::ErrorInvalidHandle;
    };
    match handle.engine.unhook() {
        Ok(()) => KeyfenceResult::Success,
        Err(_) => KeyfenceResult::ErrorLifecycle,
    }
}

/// Enables suppression.
#[no_mangle]
pub extern "C" fn keyfence_engine_start(handle: *mut EngineHandle) -> KeyfenceResult {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return KeyfenceResult::ErrorInvalidHandle;
    };
    handle.engine.start();
    KeyfenceResult::Success
}

/// Disables suppression; key-state tracking continues.
#[no_mangle]
pub extern "C" fn keyfence_engine_stop(handle: *mut EngineHandle) -> KeyfenceResult {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return KeyfenceResult::ErrorInvalidHandle;
    };
    handle.engine.stop();
    KeyfenceResult::Success
}

/// Registers a fixed key combination from a (pointer, length) code array.
#[no_mangle]
pub extern "C" fn keyfence_engine_add_combo(
    handle: *mut EngineHandle,
    codes: *const u16,
    len: usize,
) -> KeyfenceResult {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return KeyfenceResult::ErrorInvalidHandle;
    };
    if codes.is_null() || len == 0 {
        return KeyfenceResult::ErrorInvalidParameter;
    }
    let slice = unsafe { std::slice::from_raw_parts(codes, len) };
    match handle.engine.add_interceptor(slice) {
        Ok(()) => KeyfenceResult::Success,
        Err(_) => KeyfenceResult::ErrorRegistration,
    }
}

/// Registers a custom interceptor as a raw (callback, user-data) pair.
#[no_mangle]
pub extern "C" fn keyfence_engine_add_custom(
    handle: *mut EngineHandle,
    callback: Option<KeyfenceCallback>,
    user_data: *mut c_void,
) -> KeyfenceResult {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return KeyfenceResult::ErrorInvalidHandle;
    };
    let Some(callback) = callback else {
        return KeyfenceResult::ErrorInvalidParameter;
    };
    handle
        .engine
        .add_custom_interceptor(CCallbackInterceptor {
            callback,
            user_data,
        });
    KeyfenceResult::Success
}

/// Removes all fixed combinations.
#[no_mangle]
pub extern "C" fn keyfence_engine_clear_combos(handle: *mut EngineHandle) -> KeyfenceResult {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return KeyfenceResult::ErrorInvalidHandle;
    };
    handle.engine.clear_interceptors();
    KeyfenceResult::Success
}

/// Removes all custom interceptors.
#[no_mangle]
pub extern "C" fn keyfence_engine_clear_custom(handle: *mut EngineHandle) -> KeyfenceResult {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return KeyfenceResult::ErrorInvalidHandle;
    };
    handle.engine.clear_custom_interceptors();
    KeyfenceResult::Success
}

/// Delivers one keyboard event. Returns 1 when the event should be
/// suppressed, 0 to pass it through (including on any invalid input; an
/// error must never reach the event source).
#[no_mangle]
pub extern "C" fn keyfence_engine_handle_event(
    handle: *mut EngineHandle,
    kind: c_int,
    vk_code: u32,
    scan_code: u32,
    flags: u32,
    time: u32,
    extra_info: usize,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return 0;
    };
    let Some(kind) = KeyEventKind::from_raw(kind) else {
        return 0;
    };
    let event = KeyEvent {
        kind,
        vk_code: KeyCode::try_from(vk_code).unwrap_or(0),
        scan_code,
        flags,
        time,
        extra_info,
    };
    handle.engine.handle_event(&event).is_suppressed() as c_int
}

/// Returns 1 when `vk_code` is currently down (alias-aware), else 0.
#[no_mangle]
pub extern "C" fn keyfence_engine_is_key_down(
    handle: *const EngineHandle,
    vk_code: u32,
) -> c_int {
    let Some(handle) = (unsafe { handle.as_ref() }) else {
        return 0;
    };
    let Ok(code) = KeyCode::try_from(vk_code) else {
        return 0;
    };
    handle.engine.key_state().is_down(code) as c_int
}
