mod common;

use common::*;
use keyfence_core::{KeyEvent, VirtualKey};
use pretty_assertions::assert_eq;

#[test]
fn test_replay_matches_last_transition() {
    let engine = started_engine();
    let a = VirtualKey::KeyA;
    let b = VirtualKey::KeyB;

    press(&engine, a);
    press(&engine, b);
    release(&engine, a);
    press(&engine, a);
    release(&engine, b);

    assert!(engine.key_state().is_down(a.code()));
    assert!(!engine.key_state().is_down(b.code()));
}

#[test]
fn test_tracking_updates_before_hook_and_start() {
    // The table reflects every observed transition regardless of
    // lifecycle state.
    let engine = keyfence_core::InterceptorEngine::new();
    press(&engine, VirtualKey::KeyX);
    assert!(engine.key_state().is_down(VirtualKey::KeyX.code()));
}

#[test]
fn test_sys_key_events_tracked() {
    let engine = started_engine();
    let _ = engine.handle_event(&KeyEvent::sys_down(VirtualKey::F4));
    assert!(engine.key_state().is_down(VirtualKey::F4.code()));
    let _ = engine.handle_event(&KeyEvent::sys_up(VirtualKey::F4));
    assert!(!engine.key_state().is_down(VirtualKey::F4.code()));
}

#[test]
fn test_alias_codes_or_their_variants() {
    let engine = started_engine();

    press(&engine, VirtualKey::LControl);
    assert!(engine.key_state().is_down(VirtualKey::Control.code()));

    press(&engine, VirtualKey::RControl);
    release(&engine, VirtualKey::LControl);
    assert!(engine.key_state().is_down(VirtualKey::Control.code()));

    release(&engine, VirtualKey::RControl);
    assert!(!engine.key_state().is_down(VirtualKey::Control.code()));

    press(&engine, VirtualKey::RMenu);
    assert!(engine.key_state().is_down(VirtualKey::Menu.code()));
    assert!(!engine.key_state().is_down(VirtualKey::LMenu.code()));

    press(&engine, VirtualKey::LShift);
    assert!(engine.key_state().is_down(VirtualKey::Shift.code()));
}

#[test]
fn test_snapshot_matches_table() {
    let engine = started_engine();
    press(&engine, VirtualKey::KeyQ);
    press(&engine, VirtualKey::LWin);
    release(&engine, VirtualKey::KeyQ);

    let snapshot = engine.key_state().snapshot();
    assert_eq!(snapshot[VirtualKey::KeyQ.code() as usize], 0);
    assert_eq!(snapshot[VirtualKey::LWin.code() as usize], 1);
}
