mod common;

use common::*;
use keyfence_core::{Error, VirtualKey};

#[test]
fn test_single_key_combo_suppresses_its_own_down() {
    let engine = started_engine();
    engine
        .add_interceptor(&[VirtualKey::LWin.code()])
        .unwrap();

    // The transition is recorded before evaluation, so the key-down that
    // completes the combination is itself suppressed, while its release
    // no longer matches and passes through.
    assert!(press(&engine, VirtualKey::LWin));
    assert!(!release(&engine, VirtualKey::LWin));
    assert!(!press(&engine, VirtualKey::KeyA));
}

#[test]
fn test_pair_combo_requires_both_keys() {
    let engine = started_engine();
    engine
        .add_interceptor(&[VirtualKey::KeyA.code(), VirtualKey::KeyB.code()])
        .unwrap();

    assert!(!press(&engine, VirtualKey::KeyA));
    assert!(press(&engine, VirtualKey::KeyB));

    // Releasing either key breaks the combination.
    assert!(!release(&engine, VirtualKey::KeyA));
    assert!(!press(&engine, VirtualKey::KeyC));

    // Re-completing it fires again.
    assert!(press(&engine, VirtualKey::KeyA));
}

#[test]
fn test_alias_code_combo_matches_either_side() {
    let engine = started_engine();
    engine
        .add_interceptor(&[VirtualKey::Control.code(), VirtualKey::KeyK.code()])
        .unwrap();

    assert!(!press(&engine, VirtualKey::LControl));
    assert!(press(&engine, VirtualKey::KeyK));

    release(&engine, VirtualKey::LControl);
    release(&engine, VirtualKey::KeyK);

    assert!(!press(&engine, VirtualKey::RControl));
    assert!(press(&engine, VirtualKey::KeyK));
}

#[test]
fn test_combos_evaluated_in_registration_order() {
    let engine = started_engine();
    engine
        .add_interceptor(&[VirtualKey::KeyA.code(), VirtualKey::KeyB.code()])
        .unwrap();
    engine.add_interceptor(&[VirtualKey::KeyC.code()]).unwrap();

    // The second combination still fires when the first does not match.
    assert!(press(&engine, VirtualKey::KeyC));
}

#[test]
fn test_registration_rejects_empty_sequence() {
    let engine = started_engine();
    assert!(matches!(engine.add_interceptor(&[]), Err(Error::EmptyCombo)));
}

#[test]
fn test_registration_rejects_out_of_range_codes() {
    let engine = started_engine();
    assert!(matches!(
        engine.add_interceptor(&[0]),
        Err(Error::InvalidKeyCode(0))
    ));
    assert!(matches!(
        engine.add_interceptor(&[VirtualKey::KeyA.code(), 999]),
        Err(Error::InvalidKeyCode(999))
    ));
    assert_eq!(engine.interceptor_counts(), (0, 0));
}

#[test]
fn test_clear_interceptors_removes_suppression() {
    let engine = started_engine();
    engine
        .add_interceptor(&[VirtualKey::LWin.code()])
        .unwrap();

    assert!(press(&engine, VirtualKey::LWin));
    release(&engine, VirtualKey::LWin);

    engine.clear_interceptors();
    assert!(!press(&engine, VirtualKey::LWin));
}
