//! JSON event store against real files.

use mistrz::adapter::outbound::json::JsonStore;
use mistrz::domain::{DomainError, EventId};
use mistrz::error::{Error, StoreError};
use mistrz::port::Store;
use mistrz::testkit::domain::{game, sample_log};

#[test]
fn reads_hand_written_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(
        &path,
        r#"{
    "3": {
        "date": "2019/03/01",
        "games": [
            {"team_a": ["ola", "ala"], "team_b": ["iza", "ela"], "winner": "team_b", "zero": true}
        ]
    },
    "1": {
        "date": "2019/02/01",
        "games": [
            {"team_a": ["ala", "ola"], "team_b": ["ela", "iza"], "winner": "team_a", "zero": false}
        ]
    }
}"#,
    )
    .unwrap();

    let log = JsonStore::new(&path).load().unwrap();

    let ids: Vec<u32> = log.events().iter().map(|e| e.id().get()).collect();
    assert_eq!(ids, vec![1, 3]);
    assert_eq!(log.next_id().unwrap(), EventId::new(4).unwrap());
    let last = &log.events()[1];
    assert!(last.games()[0].is_shutout());
    assert_eq!(last.outcome().champion.unwrap().as_str(), "ela");
}

#[test]
fn written_file_uses_event_keys_and_positional_winner() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    JsonStore::new(&path).save(&sample_log()).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["1"]["date"], "2024/05/17");
    assert_eq!(value["1"]["games"][0]["winner"], "team_a");
    assert_eq!(value["1"]["games"][0]["zero"], true);
    assert_eq!(value["2"]["games"][0]["winner"], "team_b");
    assert!(text.contains("\n    \"1\": {"));
}

#[test]
fn appended_event_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path().join("events.json"));
    store.save(&sample_log()).unwrap();

    let mut log = store.load().unwrap();
    log.append("2024/06/01", vec![game(("a", "d"), ("b", "c"), 'a', false)])
        .unwrap();
    store.save(&log).unwrap();

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.len(), 3);
    assert_eq!(reloaded.last(1)[0].date(), "2024/06/01");
    assert!(!dir.path().join("events.json.tmp").exists());
}

#[test]
fn rejects_overlapping_teams() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(
        &path,
        r#"{"1": {"date": "d", "games": [{"team_a": ["a", "b"], "team_b": ["b", "c"], "winner": "team_a", "zero": false}]}}"#,
    )
    .unwrap();

    match JsonStore::new(&path).load() {
        Err(Error::Store(StoreError::InvalidEvent { key, .. })) => assert_eq!(key, "1"),
        other => panic!("expected invalid event, got {other:?}"),
    }
}

#[test]
fn rejects_non_numeric_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(
        &path,
        r#"{"first": {"date": "d", "games": [{"team_a": ["a", "b"], "team_b": ["c", "d"], "winner": "team_a", "zero": false}]}}"#,
    )
    .unwrap();

    assert!(matches!(
        JsonStore::new(&path).load(),
        Err(Error::Store(StoreError::InvalidId { .. }))
    ));
}

#[test]
fn largest_id_loads_but_cannot_be_followed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    std::fs::write(
        &path,
        r#"{"4294967295": {"date": "d", "games": [{"team_a": ["a", "b"], "team_b": ["c", "d"], "winner": "team_a", "zero": false}]}}"#,
    )
    .unwrap();
    let store = JsonStore::new(&path);

    let mut log = store.load().unwrap();
    let result = log.append("d2", vec![game(("a", "c"), ("b", "d"), 'a', false)]);

    assert!(matches!(result, Err(DomainError::IdExhausted(_))));
    assert_eq!(log.len(), 1);
}

#[test]
fn rosters_keep_their_written_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("events.json");
    let store = JsonStore::new(&path);
    let mut log = mistrz::domain::EventLog::new();
    log.append("d", vec![game(("ola", "ala"), ("iza", "ela"), 'b', false)])
        .unwrap();
    store.save(&log).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["1"]["games"][0]["team_a"], serde_json::json!(["ola", "ala"]));

    let reloaded = store.load().unwrap();
    assert_eq!(reloaded.events()[0].games()[0].team_a().to_string(), "[ola, ala]");
}
