//! Behavioural properties of the scan history core, exercised through the
//! public API only.

use isbnscanapp::model::{BookRecord, ScanCollection, ScanRecord};
use isbnscanapp::store::file::{export_to_string, import_str};
use isbnscanapp::store::mem_backend::MemKvBackend;
use isbnscanapp::store::persistent::{PersistentStore, STORAGE_KEY};
use isbnscanapp::store::ScanStore;
use isbnscanapp::{merge, normalize, sanitize};
use serde_json::{json, Value};

fn samples() -> Vec<Value> {
    vec![
        json!(null),
        json!(0),
        json!("str"),
        json!([]),
        json!({}),
        json!([{"isbn": "1"}, {"isbn": "1", "book": {"title": "dup"}}, {"isbn": "2", "book": {"authors": [1, "a"]}}]),
        json!({"version": 1, "items": [{"isbn": "3", "book": {"pageCount": 10, "title": null}}, [1, 2], {"isbn": false}]}),
        json!({"version": 7, "items": [{"isbn": "x", "book": {"categories": ["c"], "buyLink": "l"}}]}),
        json!({"items": [{"isbn": {"nested": {"deeper": [null]}}}, {"isbn": "ok", "book": [[]]}]}),
    ]
}

#[test]
fn test_normalize_is_idempotent() {
    for raw in samples() {
        let once = normalize(&raw);
        let again = normalize(&serde_json::to_value(&once).unwrap());
        assert_eq!(again, once, "not idempotent for {raw}");

        let from_items = normalize(&serde_json::to_value(&once.items).unwrap());
        assert_eq!(from_items.items, once.items);
    }
}

#[test]
fn test_export_import_round_trip() {
    for raw in samples() {
        let normalized = normalize(&raw);
        let exported = export_to_string(&normalized.items).unwrap();
        let imported = import_str(&exported).unwrap();
        assert_eq!(imported.items, normalized.items, "round trip lost data for {raw}");
    }
}

#[test]
fn test_first_wins_regardless_of_later_content() {
    let a = json!({"isbn": "9", "book": {"title": "A"}});
    for b in [
        json!({"isbn": "9"}),
        json!({"isbn": "9", "book": {"title": "B", "pageCount": 3}}),
        json!({"isbn": "9", "book": "junk"}),
    ] {
        let c = normalize(&json!([a.clone(), b]));
        assert_eq!(c.items, vec![sanitize(&a).unwrap()]);
    }
}

#[test]
fn test_scenario_duplicate_isbn() {
    let c = normalize(&json!([
        {"isbn": "123", "book": {"title": "A"}},
        {"isbn": "123", "book": {"title": "B"}}
    ]));
    assert_eq!(
        serde_json::to_value(&c.items).unwrap(),
        json!([{"isbn": "123", "book": {"title": "A"}}])
    );
}

#[test]
fn test_scenario_numeric_isbn() {
    assert_eq!(sanitize(&json!({"isbn": 42})), None);
}

#[test]
fn test_scenario_merge_precedence() {
    let merged = merge(
        &[ScanRecord::new("1", None)],
        &[
            ScanRecord::new("1", Some(BookRecord::titled("X"))),
            ScanRecord::new("2", None),
        ],
    );
    assert_eq!(
        serde_json::to_value(&merged).unwrap(),
        json!({"version": 1, "items": [{"isbn": "1", "book": null}, {"isbn": "2", "book": null}]})
    );
}

#[test]
fn test_scenario_unparsable_stored_value() {
    let backend = MemKvBackend::new();
    backend.insert_raw(STORAGE_KEY, "not json");
    let store = PersistentStore::new(backend);
    assert_eq!(store.load(), ScanCollection::empty());
}

#[test]
fn test_scenario_broken_import() {
    let err = import_str("{broken").unwrap_err();
    assert!(matches!(
        err,
        isbnscanapp::error::ScanError::InvalidFormat(_)
    ));
}
