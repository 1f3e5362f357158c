//! Integration tests for the circled-text service
//!
//! These tests drive the full controller against the simulated host:
//! activation, key interception, edit sessions, hot keys, and teardown.

use host_api::{HotKeyId, Selection};
use key_types::{KeyCode, KeyEvent, Modifiers};
use services_circled_text::{
    toggle_hot_key_id, CircledTextService, ServiceEvent, TOGGLE_CHORD, TOGGLE_LABEL,
};
use sim_host::{SimDocument, SimKeystrokeHost};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::pressed(code, Modifiers::none())
}

fn press_shift(code: KeyCode) -> KeyEvent {
    KeyEvent::pressed(code, Modifiers::SHIFT)
}

fn activated() -> (CircledTextService, SimKeystrokeHost, SimDocument) {
    let mut service = CircledTextService::new();
    let mut host = SimKeystrokeHost::new();
    let client = host_api::ClientId::new();
    service.activate(&mut host, client);
    let doc = SimDocument::for_client(client);
    (service, host, doc)
}

#[test]
fn test_activation_binds_all_capabilities() {
    let (service, host, _doc) = activated();

    assert!(service.is_active());
    assert!(service.is_key_sink_advised());
    assert!(service.is_hot_key_registered());
    assert!(host.is_sink_advised(service.client_id().unwrap()));
    assert!(host.is_key_preserved(toggle_hot_key_id()));
    assert_eq!(host.preserved_label(toggle_hot_key_id()), Some(TOGGLE_LABEL));
}

#[test]
fn test_unshifted_letter_inserts_circled_lowercase() {
    let (mut service, _host, mut doc) = activated();

    let event = press(KeyCode::A);
    assert!(service.on_test_key_down(&event));
    assert!(service.on_key_down(&mut doc, &event));

    // Exactly one character, caret just past it, selection empty.
    assert_eq!(doc.text(), "\u{24D0}");
    assert_eq!(doc.selection(), Selection::caret(1));
}

#[test]
fn test_shifted_letter_inserts_circled_uppercase() {
    let (mut service, _host, mut doc) = activated();

    assert!(service.on_key_down(&mut doc, &press_shift(KeyCode::Z)));

    assert_eq!(doc.text(), "\u{24CF}");
    assert_eq!(doc.selection(), Selection::caret(1));
}

#[test]
fn test_hot_key_fire_inserts_toggle_glyph() {
    let (mut service, _host, mut doc) = activated();

    assert!(service.on_preserved_key(&mut doc, toggle_hot_key_id()));

    // The literal-key mapping branch is not taken.
    assert_eq!(doc.text(), "\u{24FF}");
    assert_eq!(doc.selection(), Selection::caret(1));
}

#[test]
fn test_foreign_preserved_key_not_consumed() {
    let (mut service, _host, mut doc) = activated();

    assert!(!service.on_preserved_key(&mut doc, HotKeyId::new()));
    assert_eq!(doc.text(), "");
    assert_eq!(doc.sessions_granted(), 0);
}

#[test]
fn test_non_letter_keys_fall_through() {
    let (mut service, _host, mut doc) = activated();

    for code in [KeyCode::Num1, KeyCode::Space, KeyCode::Enter, KeyCode::Left] {
        let event = press(code);
        assert!(!service.on_test_key_down(&event));
        assert!(!service.on_key_down(&mut doc, &event));
    }
    assert_eq!(doc.text(), "");
}

#[test]
fn test_disabled_filter_passes_letters_through() {
    let (mut service, _host, mut doc) = activated();
    service.set_filtering(false);

    let event = press(KeyCode::A);
    assert!(!service.on_test_key_down(&event));
    assert!(!service.on_key_down(&mut doc, &event));
    assert_eq!(doc.sessions_granted(), 0);

    service.set_filtering(true);
    assert!(service.on_key_down(&mut doc, &event));
    assert_eq!(doc.text(), "\u{24D0}");
}

#[test]
fn test_key_up_mirrors_test_verdict_without_mutation() {
    let (service, _host, doc) = activated();

    let up = KeyEvent::released(KeyCode::A, Modifiers::none());
    assert_eq!(service.on_test_key_up(&up), service.on_key_up(&up));
    assert!(service.on_key_up(&up));
    assert_eq!(doc.text(), "");
    assert_eq!(doc.sessions_granted(), 0);
}

#[test]
fn test_refused_lock_reports_not_consumed() {
    let (mut service, _host, mut doc) = activated();
    doc.refuse_sessions(true);

    let event = press(KeyCode::A);
    assert!(service.on_test_key_down(&event));
    assert!(!service.on_key_down(&mut doc, &event));

    // No insertion was attempted.
    assert_eq!(doc.text(), "");
    assert_eq!(doc.sessions_granted(), 0);

    // Next event is evaluated independently.
    doc.refuse_sessions(false);
    assert!(service.on_key_down(&mut doc, &event));
    assert_eq!(doc.text(), "\u{24D0}");
}

#[test]
fn test_refused_lock_on_hot_key_path_not_consumed() {
    let (mut service, _host, mut doc) = activated();
    doc.refuse_sessions(true);

    assert!(!service.on_preserved_key(&mut doc, toggle_hot_key_id()));
    assert_eq!(doc.text(), "");
}

#[test]
fn test_invalid_client_window_reports_not_consumed() {
    let (mut service, _host, _doc) = activated();
    // A context that never authorized this client.
    let mut foreign = SimDocument::new();

    assert!(!service.on_key_down(&mut foreign, &press(KeyCode::A)));
    assert_eq!(foreign.text(), "");
}

#[test]
fn test_sequence_of_events_inserts_in_order() {
    let (mut service, _host, mut doc) = activated();

    let word = [
        press(KeyCode::H),
        press(KeyCode::E),
        press(KeyCode::L),
        press(KeyCode::L),
        press(KeyCode::O),
    ];
    for event in &word {
        assert!(service.on_key_down(&mut doc, event));
    }

    assert_eq!(doc.text(), "ⓗⓔⓛⓛⓞ");
    assert_eq!(doc.sessions_granted(), 5);
    assert_eq!(doc.selection(), Selection::caret(5));
}

#[test]
fn test_mixed_case_sequence() {
    let (mut service, _host, mut doc) = activated();

    service.on_key_down(&mut doc, &press_shift(KeyCode::A));
    service.on_key_down(&mut doc, &press(KeyCode::B));
    service.on_preserved_key(&mut doc, toggle_hot_key_id());

    assert_eq!(doc.text(), "Ⓐⓑ\u{24FF}");
}

#[test]
fn test_insertion_replaces_active_selection() {
    let (mut service, _host, mut doc) = activated();
    doc.set_text("abc");
    doc.select(1, 3);

    assert!(service.on_key_down(&mut doc, &press(KeyCode::X)));

    assert_eq!(doc.text(), "aⓧ");
    assert_eq!(doc.selection(), Selection::caret(2));
}

#[test]
fn test_deactivate_releases_registrations() {
    let (mut service, mut host, _doc) = activated();
    let client = service.client_id().unwrap();

    service.deactivate(&mut host);

    assert!(!service.is_active());
    assert!(!host.is_sink_advised(client));
    assert!(!host.is_key_preserved(toggle_hot_key_id()));
    assert_eq!(host.preserved_key_count(), 0);
}

#[test]
fn test_deactivate_is_idempotent() {
    let mut service = CircledTextService::new();
    let mut host = SimKeystrokeHost::new();

    // Never activated: must not fault, must leave nothing behind.
    service.deactivate(&mut host);
    assert_eq!(host.advised_sink_count(), 0);

    let client = host_api::ClientId::new();
    service.activate(&mut host, client);
    service.deactivate(&mut host);
    service.deactivate(&mut host);

    assert!(!service.is_active());
    assert_eq!(host.advised_sink_count(), 0);
    assert_eq!(host.preserved_key_count(), 0);
}

#[test]
fn test_key_down_without_activation_not_consumed() {
    let mut service = CircledTextService::new();
    let mut doc = SimDocument::new();

    let event = press(KeyCode::A);
    // Test query still says interested; the offer fails to get a session.
    assert!(service.on_test_key_down(&event));
    assert!(!service.on_key_down(&mut doc, &event));
    assert_eq!(doc.text(), "");
}

#[test]
fn test_sink_capability_refusal_degrades_gracefully() {
    let mut service = CircledTextService::new();
    let mut host = SimKeystrokeHost::new();
    host.refuse_sink_capability(true);

    let client = host_api::ClientId::new();
    service.activate(&mut host, client);

    assert!(service.is_active());
    assert!(!service.is_key_sink_advised());
    assert!(service.is_hot_key_registered());

    // The hot key still works.
    let mut doc = SimDocument::for_client(client);
    assert!(service.on_preserved_key(&mut doc, toggle_hot_key_id()));
    assert_eq!(doc.text(), "\u{24FF}");

    // Teardown must not try to unadvise a sink that was never advised.
    service.deactivate(&mut host);
    assert_eq!(host.preserved_key_count(), 0);
}

#[test]
fn test_hot_key_capability_refusal_keeps_interception() {
    let mut service = CircledTextService::new();
    let mut host = SimKeystrokeHost::new();
    host.refuse_hot_key_capability(true);

    let client = host_api::ClientId::new();
    service.activate(&mut host, client);

    assert!(service.is_active());
    assert!(service.is_key_sink_advised());
    assert!(!service.is_hot_key_registered());

    let mut doc = SimDocument::for_client(client);
    assert!(service.on_key_down(&mut doc, &press(KeyCode::A)));
    assert_eq!(doc.text(), "\u{24D0}");

    service.deactivate(&mut host);
    assert_eq!(host.advised_sink_count(), 0);
}

#[test]
fn test_reactivation_rebinds_cleanly() {
    let mut service = CircledTextService::new();
    let mut host = SimKeystrokeHost::new();

    let first = host_api::ClientId::new();
    let second = host_api::ClientId::new();
    service.activate(&mut host, first);
    service.activate(&mut host, second);

    assert_eq!(service.client_id(), Some(second));
    assert!(!host.is_sink_advised(first));
    assert!(host.is_sink_advised(second));
    assert_eq!(host.preserved_owner(toggle_hot_key_id()), Some(second));
}

#[test]
fn test_audit_trail_records_lifecycle() {
    let (mut service, mut host, mut doc) = activated();
    let client = service.client_id().unwrap();

    service.on_key_down(&mut doc, &press(KeyCode::A));
    doc.refuse_sessions(true);
    service.on_key_down(&mut doc, &press(KeyCode::B));
    service.deactivate(&mut host);

    let trail = service.audit_trail();
    assert!(matches!(
        trail[0],
        ServiceEvent::Activated { client: c, .. } if c == client
    ));
    assert!(matches!(
        trail[1],
        ServiceEvent::KeyConsumed { code: KeyCode::A, .. }
    ));
    assert!(matches!(trail[2], ServiceEvent::SessionRefused { .. }));
    assert!(matches!(
        trail[3],
        ServiceEvent::Deactivated { client: c, .. } if c == client
    ));

    // Timestamps are strictly increasing.
    let stamps: Vec<u64> = trail
        .iter()
        .map(|e| match e {
            ServiceEvent::Activated { timestamp, .. }
            | ServiceEvent::ActivationDegraded { timestamp, .. }
            | ServiceEvent::Deactivated { timestamp, .. }
            | ServiceEvent::KeyConsumed { timestamp, .. }
            | ServiceEvent::HotKeyFired { timestamp }
            | ServiceEvent::SessionRefused { timestamp, .. } => *timestamp,
        })
        .collect();
    assert!(stamps.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_toggle_chord_shape() {
    // The preserved binding is Ctrl+F and only Ctrl+F.
    assert!(TOGGLE_CHORD.matches(&KeyEvent::pressed(KeyCode::F, Modifiers::CTRL)));
    assert!(!TOGGLE_CHORD.matches(&press(KeyCode::F)));
}
