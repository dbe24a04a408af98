//! End-to-end tests for the recognition engine.

use kudos::{
    BroadcastHub, Caller, HubConfig, Recognition, RecognitionDraft, RecognitionId,
    RecognitionService, RecognitionStore, Role, StaticDirectory, Timestamp, Visibility,
};
use std::sync::Arc;
use std::time::Duration;

fn caller(id: &str, name: &str, role: Role, team: &str) -> Caller {
    Caller {
        id: id.into(),
        name: name.to_string(),
        role,
        team: team.to_string(),
    }
}

fn directory() -> StaticDirectory {
    StaticDirectory::new([
        caller("1", "Alice", Role::Employee, "Engineering"),
        caller("2", "Bob", Role::Manager, "Engineering"),
        caller("3", "Charlie", Role::Hr, "People"),
        caller("4", "Dana", Role::Lead, "Marketing"),
    ])
}

fn seeded(id: u64, recipient: &str, visibility: Visibility) -> Recognition {
    Recognition {
        id: RecognitionId(id),
        sender_id: "1".into(),
        recipient_id: recipient.into(),
        message: "seed".to_string(),
        emoji: "👏".to_string(),
        visibility,
        created_at: Timestamp::now(),
    }
}

/// Service over the classic seed: a public recognition to "2" and a
/// private one to "1".
fn seeded_service() -> RecognitionService {
    let store = RecognitionStore::seeded([
        seeded(101, "2", Visibility::Public),
        seeded(102, "1", Visibility::Private),
    ]);
    RecognitionService::new(
        Arc::new(directory()),
        Arc::new(store),
        Arc::new(BroadcastHub::new()),
    )
}

fn ids(records: &[Recognition]) -> Vec<u64> {
    records.iter().map(|r| r.id.0).collect()
}

// --- Visibility Scenarios ---

#[test]
fn test_employee_sees_only_public() {
    let svc = seeded_service();
    let visible = svc.list_visible(&"1".into()).unwrap();
    assert_eq!(ids(&visible), vec![101]);
}

#[test]
fn test_hr_sees_everything() {
    let svc = seeded_service();
    let visible = svc.list_visible(&"3".into()).unwrap();
    assert_eq!(ids(&visible), vec![101, 102]);
}

#[test]
fn test_manager_sees_everything() {
    let svc = seeded_service();
    let visible = svc.list_visible(&"2".into()).unwrap();
    assert_eq!(ids(&visible), vec![101, 102]);
}

#[test]
fn test_lead_sees_only_public() {
    let svc = seeded_service();
    let visible = svc.list_visible(&"4".into()).unwrap();
    assert_eq!(ids(&visible), vec![101]);
}

#[test]
fn test_mine_listing_returns_own_recognitions() {
    let svc = seeded_service();
    let mine = svc.list_mine(&"1".into()).unwrap();
    assert_eq!(ids(&mine), vec![102]);
}

#[test]
fn test_mine_listing_includes_every_visibility() {
    let svc = seeded_service();
    for visibility in ["PUBLIC", "PRIVATE", "ANONYMOUS"] {
        svc.create(RecognitionDraft::new("2", "1", "kudos", "🎉", visibility))
            .unwrap();
    }

    let mine = svc.list_mine(&"1".into()).unwrap();
    assert_eq!(mine.len(), 4); // seed 102 plus one per visibility
    assert!(mine.iter().any(|r| r.visibility == Visibility::Anonymous));
}

#[test]
fn test_listings_preserve_insertion_order() {
    let svc = seeded_service();
    svc.create(RecognitionDraft::new("1", "3", "first", "", "PUBLIC"))
        .unwrap();
    svc.create(RecognitionDraft::new("2", "3", "second", "", "PUBLIC"))
        .unwrap();

    let visible = svc.list_visible(&"3".into()).unwrap();
    let positions: Vec<u64> = ids(&visible);
    assert_eq!(positions, vec![101, 102, 103, 104]);
}

// --- Creation ---

#[test]
fn test_create_returns_complete_record() {
    let svc = seeded_service();
    let record = svc
        .create(RecognitionDraft::new("1", "2", "thanks", ":)", "PUBLIC"))
        .unwrap();

    assert!(record.id.0 > 0);
    assert_eq!(record.sender_id, "1".into());
    assert_eq!(record.recipient_id, "2".into());
    assert_eq!(record.message, "thanks");
    assert_eq!(record.emoji, ":)");
    assert_eq!(record.visibility, Visibility::Public);
}

#[test]
fn test_rapid_creates_get_distinct_ids() {
    let svc = seeded_service();
    let mut seen = std::collections::HashSet::new();
    for _ in 0..100 {
        let record = svc
            .create(RecognitionDraft::new("1", "2", "", "", "PUBLIC"))
            .unwrap();
        assert!(seen.insert(record.id));
    }
}

#[test]
fn test_created_at_is_monotonic() {
    let svc = seeded_service();
    let mut last = Timestamp(0);
    for _ in 0..50 {
        let record = svc
            .create(RecognitionDraft::new("1", "2", "", "", "PUBLIC"))
            .unwrap();
        assert!(record.created_at >= last);
        last = record.created_at;
    }
}

#[test]
fn test_store_is_append_only() {
    let store = Arc::new(RecognitionStore::new());
    let svc = RecognitionService::new(
        Arc::new(directory()),
        Arc::clone(&store),
        Arc::new(BroadcastHub::new()),
    );

    for i in 0..5 {
        svc.create(RecognitionDraft::new("1", "2", format!("msg {i}"), "", "PUBLIC"))
            .unwrap();
    }
    assert_eq!(store.len(), 5);

    let before = store.list_all();
    svc.create(RecognitionDraft::new("2", "1", "another", "", "PRIVATE"))
        .unwrap();
    let after = store.list_all();

    assert_eq!(after.len(), 6);
    assert_eq!(&before[..], &after[..5]);
}

// --- Live Broadcast ---

#[test]
fn test_subscriber_receives_created_record() {
    let svc = seeded_service();
    let live = svc.subscribe(HubConfig::default());

    let created = svc
        .create(RecognitionDraft::new("1", "2", "thanks", ":)", "PUBLIC"))
        .unwrap();

    let pushed = live.recv_timeout(Duration::from_millis(200)).unwrap();
    assert_eq!(pushed, created);
}

#[test]
fn test_subscriber_receives_creates_in_order() {
    let svc = seeded_service();
    let live = svc.subscribe(HubConfig::default());

    let mut created = Vec::new();
    for i in 0..5 {
        created.push(
            svc.create(RecognitionDraft::new("1", "2", format!("msg {i}"), "", "PUBLIC"))
                .unwrap(),
        );
    }

    for expected in created {
        let pushed = live.recv_timeout(Duration::from_millis(200)).unwrap();
        assert_eq!(pushed, expected);
    }
}

#[test]
fn test_late_subscriber_gets_no_replay() {
    let svc = seeded_service();

    svc.create(RecognitionDraft::new("1", "2", "before", "", "PUBLIC"))
        .unwrap();

    let live = svc.subscribe(HubConfig::default());
    assert!(live.try_recv().is_err());

    let after = svc
        .create(RecognitionDraft::new("1", "2", "after", "", "PUBLIC"))
        .unwrap();
    assert_eq!(live.recv_timeout(Duration::from_millis(200)).unwrap(), after);
}

#[test]
fn test_push_then_query_sees_pushed_record() {
    let svc = seeded_service();
    let live = svc.subscribe(HubConfig::default());

    svc.create(RecognitionDraft::new("1", "3", "hello", "", "PUBLIC"))
        .unwrap();

    let pushed = live.recv_timeout(Duration::from_millis(200)).unwrap();
    let visible = svc.list_visible(&"3".into()).unwrap();
    assert!(visible.contains(&pushed));
}

// --- Directory Passthrough ---

#[test]
fn test_list_callers() {
    let svc = seeded_service();
    let names: Vec<String> = svc.list_callers().into_iter().map(|c| c.name).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie", "Dana"]);
}

#[test]
fn test_resolve_caller_for_hydration() {
    let svc = seeded_service();
    let record = svc
        .create(RecognitionDraft::new("1", "nobody", "hi", "", "PUBLIC"))
        .unwrap();

    assert_eq!(svc.resolve_caller(&record.sender_id).unwrap().name, "Alice");
    // Recipient was never validated; hydration tolerates the miss.
    assert!(svc.resolve_caller(&record.recipient_id).is_none());
}

// --- Wire Shape ---

#[test]
fn test_recognition_serializes_with_camel_case_fields() {
    let record = seeded(101, "2", Visibility::Anonymous);
    let json = serde_json::to_value(&record).unwrap();

    assert_eq!(json["id"], 101);
    assert_eq!(json["senderId"], "1");
    assert_eq!(json["recipientId"], "2");
    assert_eq!(json["visibility"], "ANONYMOUS");
    assert!(json["createdAt"].is_i64());
}
