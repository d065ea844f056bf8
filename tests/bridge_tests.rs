use std::path::PathBuf;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Value};

use playlog::bindings::{
    AccessTokenResponse, CatalogCover, CatalogGame, CatalogGameLookupResult, CatalogSearchResult,
    CurrentUsernameResult, DashboardStatistics, ExecutableDetails, InsertExecutableDetailsResult,
    InsertLogResult, LogFormResult, LogRecord, OpenDirectoryDialogResult, TimePlayed,
    UserSettings, UserSettingsResult,
};
use playlog::{
    build_log_record, default_statuses, reconstruct, reconstruct_text, Keyed, LogFormSubmission,
    Node, OperationResult, Scalar,
};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(fixture_path(name)).expect("Failed to read fixture")
}

fn fixture_value(name: &str) -> Value {
    serde_json::from_str(&read_fixture(name)).expect("Fixture should be valid JSON")
}

/// Reconstructing twice through the wire form gives the same result.
fn assert_stable<T>(raw: Value)
where
    T: DeserializeOwned + Serialize + PartialEq + std::fmt::Debug,
{
    let first: Node<T> = reconstruct(raw);
    let rewritten = serde_json::to_value(&first).expect("Failed to serialize node");
    let second: Node<T> = reconstruct(rewritten);
    assert_eq!(first, second);
}

fn assert_falsy_passthrough<T>()
where
    T: DeserializeOwned + PartialEq + std::fmt::Debug,
{
    assert_eq!(reconstruct::<T>(Value::Null), Node::Raw(Value::Null));
    assert_eq!(reconstruct::<T>(json!("")), Node::Raw(json!("")));
}

#[test]
fn test_null_payload_returned_for_every_shape() {
    assert_falsy_passthrough::<CatalogCover>();
    assert_falsy_passthrough::<CatalogGame>();
    assert_falsy_passthrough::<CatalogGameLookupResult>();
    assert_falsy_passthrough::<CatalogSearchResult>();
    assert_falsy_passthrough::<ExecutableDetails>();
    assert_falsy_passthrough::<UserSettings>();
    assert_falsy_passthrough::<UserSettingsResult>();
    assert_falsy_passthrough::<InsertExecutableDetailsResult>();
    assert_falsy_passthrough::<TimePlayed>();
    assert_falsy_passthrough::<LogRecord>();
    assert_falsy_passthrough::<LogFormResult>();
    assert_falsy_passthrough::<InsertLogResult>();
    assert_falsy_passthrough::<OpenDirectoryDialogResult>();
    assert_falsy_passthrough::<CurrentUsernameResult>();
    assert_falsy_passthrough::<AccessTokenResponse>();
    assert_falsy_passthrough::<DashboardStatistics>();
}

#[test]
fn test_search_fixture_reconstructs_every_game() {
    let node: Node<CatalogSearchResult> = reconstruct(fixture_value("search_result.json"));
    let result = node.into_item().expect("Search result should be an object");
    assert!(result.is_success());

    let games = match result.games.as_ref() {
        Some(Node::List(games)) => games,
        other => panic!("games should be a list, got {:?}", other),
    };
    assert_eq!(games.len(), 5, "Every element should be kept");
    assert_eq!(games[3], Node::Raw(json!(42)));

    let chrono = games[0].as_item().unwrap();
    assert_eq!(chrono.cover_image_id(), Some("abc123"));

    let earthbound = games[1].as_item().unwrap();
    assert!(earthbound.cover.is_none(), "null cover must stay absent");

    let mana = games[2].as_item().unwrap();
    assert!(mana.cover.is_none());

    let gaia = games[4].as_item().unwrap();
    assert_eq!(gaia.id, Some(Scalar::Foreign(json!("10"))));
    assert_eq!(gaia.id(), None);
    assert_eq!(gaia.cover().and_then(CatalogCover::id), Some(3));
    assert!(gaia.cover().unwrap().image_id.is_none());
}

#[test]
fn test_search_fixture_from_text_matches_value() {
    let from_text: Node<CatalogSearchResult> =
        reconstruct_text(&read_fixture("search_result.json"));
    let from_value: Node<CatalogSearchResult> = reconstruct(fixture_value("search_result.json"));
    assert_eq!(from_text, from_value);

    let encoded = Value::String(read_fixture("search_result.json"));
    let from_encoded: Node<CatalogSearchResult> = reconstruct(encoded);
    assert_eq!(from_encoded, from_value);
}

#[test]
fn test_present_fields_preserved_and_omitted_fields_absent() {
    let payloads = [
        json!({ "id": 7 }),
        json!({ "name": "Chrono Trigger" }),
        json!({ "id": 7, "cover": { "image_id": "abc123" } }),
        json!({}),
    ];
    for raw in payloads {
        let node: Node<CatalogGame> = reconstruct(raw.clone());
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            raw,
            "Reconstruction changed the set of present fields"
        );
    }
}

#[test]
fn test_sequence_length_and_order_preserved() {
    for n in [0usize, 1, 2, 17] {
        let raw: Vec<Value> = (0..n)
            .map(|i| json!({ "id": i, "name": format!("game {}", i) }))
            .collect();
        let node: Node<CatalogGame> = reconstruct(Value::Array(raw));
        assert_eq!(node.len(), n);
        let ids: Vec<i64> = node.items().iter().filter_map(|game| game.id()).collect();
        let expected: Vec<i64> = (0..n as i64).collect();
        assert_eq!(ids, expected);
    }
}

#[test]
fn test_reconstruction_is_stable() {
    assert_stable::<CatalogSearchResult>(fixture_value("search_result.json"));
    assert_stable::<InsertLogResult>(fixture_value("insert_log_result.json"));
    assert_stable::<UserSettingsResult>(fixture_value("user_settings_result.json"));
    assert_stable::<LogFormResult>(fixture_value("log_form_result.json"));
    assert_stable::<CatalogGame>(json!([{ "id": 1 }, "loose", null, { "cover": 0 }]));
}

#[test]
fn test_insert_log_errors_map_keeps_both_keys() {
    let node: Node<InsertLogResult> = reconstruct(fixture_value("insert_log_result.json"));
    let result = node.into_item().unwrap();

    let errors = result.errors.as_ref().expect("errors should be present");
    assert_eq!(errors.keys(), vec!["title", "rating"], "Producer order must be kept");
    assert_eq!(
        errors.get("title"),
        Some(&Node::Item("too short".to_string()))
    );
    assert_eq!(
        errors.get("rating"),
        Some(&Node::Item("out of range".to_string()))
    );
    assert!(matches!(errors, Keyed::Map(_)));
    assert_eq!(
        serde_json::to_value(errors).unwrap().to_string(),
        r#"{"title":"too short","rating":"out of range"}"#
    );
    assert!(!result.is_success());
    assert!(result.into_result().is_err());
}

#[test]
fn test_insert_log_zero_value_record_forwarded() {
    let node: Node<InsertLogResult> = reconstruct(fixture_value("insert_log_result.json"));
    let result = node.into_item().unwrap();
    let log = result.log().expect("log object should reconstruct");
    assert_eq!(log.date, Some(json!("0001-01-01T00:00:00Z")));
    assert_eq!(log.status_tag(), None);
    assert_eq!(log.time_played_minutes(), Some(0));
}

#[test]
fn test_user_settings_fixture() {
    let node: Node<UserSettingsResult> =
        reconstruct_text(&read_fixture("user_settings_result.json"));
    let result = node.into_item().unwrap();
    let settings = result.preferences().expect("preferences should reconstruct");
    assert_eq!(
        settings.executable_paths(),
        vec!["C:\\Games\\Steam", "D:\\Emulators"]
    );
    assert!(settings.process_monitoring_enabled());
    assert!(result.into_result().is_ok());
}

#[test]
fn test_log_form_result_fixture() {
    let node: Node<LogFormResult> = reconstruct(fixture_value("log_form_result.json"));
    let form = node.into_item().unwrap();
    assert_eq!(form.title(), Some("Hollow Knight"));
    assert_eq!(form.date, Some(json!("2024-02-14T00:00:00Z")));
    assert!(form.notes.is_none(), "omitted notes must stay absent");
    assert_eq!(form.time_played().and_then(TimePlayed::total_minutes), Some(41 * 60 + 7));
    assert!(default_statuses().contains(form.status().unwrap()));
}

#[test]
fn test_searched_game_maps_to_log_data() {
    let node: Node<CatalogSearchResult> = reconstruct(fixture_value("search_result.json"));
    let result = node.into_item().unwrap();
    let games = result.games();
    let form = LogFormSubmission {
        status: "Completed".to_string(),
        rating: 9,
        log_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        notes: None,
        time_played_hours: 12,
        time_played_minutes: 30,
    };

    let with_cover = build_log_record(games[0], &form);
    assert_eq!(
        serde_json::to_value(&with_cover).unwrap(),
        json!({
            "status": "completed",
            "rating": 9,
            "date": "2024-03-01T00:00:00.000Z",
            "notes": "",
            "minutes_played": 750,
            "game": { "id": 7, "title": "Chrono Trigger", "cover_id": "abc123" }
        })
    );

    let without_cover = build_log_record(games[1], &form);
    assert_eq!(without_cover.game.cover_id, None);
    assert_eq!(without_cover.game.title.as_deref(), Some("Earthbound"));

    let stored_tag = default_statuses().find(&form.status).map(|s| s.tag());
    assert_eq!(stored_tag.as_deref(), Some(with_cover.status.as_str()));
}
