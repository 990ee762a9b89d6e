//! End-to-end tests for the JSON snapshot boundary.
//!
//! These exercise the public API the way an embedding process would: build a
//! roster, export it, and load it into a fresh registry.

use rsvp_registry::{RecordingNotifier, RegistryError, ResponseRegistry};
use rsvp_types::{Participant, ResponseRecord, ResponseStatus};

fn registry() -> ResponseRegistry<RecordingNotifier> {
    ResponseRegistry::new(RecordingNotifier::new())
}

fn record(id: &str, name: &str, status: ResponseStatus) -> ResponseRecord {
    ResponseRecord::new(
        Participant::new(id, name, format!("{id}@example.com")),
        status,
    )
}

#[test]
fn snapshot_roundtrip_restores_roster() {
    let records = vec![
        record("p1", "Emily", ResponseStatus::Confirmed),
        record("p2", "James", ResponseStatus::Declined),
        record("p3", "Sofia", ResponseStatus::Tentative),
    ];
    let json = serde_json::to_string(&records).unwrap_or_default();

    let mut restored = registry();
    let loaded = restored.load_snapshot(&json);

    assert_eq!(loaded.ok(), Some(3));
    assert_eq!(
        restored.response_for("p1").map(|r| r.status),
        Some(ResponseStatus::Confirmed),
    );
    assert_eq!(
        restored.response_for("p3").map(|r| r.status),
        Some(ResponseStatus::Tentative),
    );
    assert!(restored.counts().is_balanced());
}

#[test]
fn snapshot_uses_source_wire_labels() {
    // Snapshots from the original system spell statuses Yes/No/Maybe.
    let json = r#"[
        {
            "participant": {"id": "p1", "name": "Emily", "email": "p1@example.com"},
            "status": "Maybe",
            "responded_at": "2026-08-01T10:00:00Z"
        }
    ]"#;

    let mut registry = registry();
    let loaded = registry.load_snapshot(json);

    assert_eq!(loaded.ok(), Some(1));
    assert_eq!(
        registry.response_for("p1").map(|r| r.status),
        Some(ResponseStatus::Tentative),
    );
}

#[test]
fn malformed_snapshot_leaves_state_unchanged() {
    let mut registry = registry();
    let _ = registry.upsert(
        Participant::new("p1", "Emily", "p1@example.com"),
        ResponseStatus::Confirmed,
    );
    let before = registry.counts();

    let result = registry.load_snapshot("{\"not\": \"an array\"}");

    assert!(matches!(
        result,
        Err(RegistryError::MalformedSnapshot { .. })
    ));
    assert_eq!(registry.counts(), before);
    assert!(registry.response_for("p1").is_some());
}

#[test]
fn snapshot_skips_candidates_without_id_but_still_loads() {
    let records = vec![
        record("", "Ghost", ResponseStatus::Declined),
        record("p2", "James", ResponseStatus::Confirmed),
    ];
    let json = serde_json::to_string(&records).unwrap_or_default();

    let mut registry = registry();
    let loaded = registry.load_snapshot(&json);

    // The id-less candidate is skipped, not a hard failure.
    assert_eq!(loaded.ok(), Some(1));
    assert!(registry.response_for("p2").is_some());
    assert_eq!(registry.counts().total, 1);
}

#[test]
fn empty_snapshot_clears_registry() {
    let mut registry = registry();
    let _ = registry.upsert(
        Participant::new("p1", "Emily", "p1@example.com"),
        ResponseStatus::Confirmed,
    );

    let loaded = registry.load_snapshot("[]");

    assert_eq!(loaded.ok(), Some(0));
    assert!(registry.is_empty());
}
