//! # Collection Normalizer
//!
//! Validates, sanitizes and deduplicates a raw collection.
//!
//! Two input shapes are accepted: a bare array of records, or an envelope
//! object `{ "version"?, "items"? }`. Every other value normalizes to the
//! empty collection. Elements rejected by [`crate::sanitize`] are dropped.
//!
//! Deduplication keeps the **first** record seen for each ISBN. Merge
//! precedence in [`crate::merge`] falls out of this rule: whatever is placed
//! first wins.

use crate::model::{ScanCollection, ScanRecord, SCHEMA_VERSION};
use crate::sanitize::sanitize;
use serde_json::{Number, Value};
use std::collections::HashSet;

/// What normalization discarded. Informational only; normalization itself
/// never fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NormalizeReport {
    /// Elements rejected by the sanitizer.
    pub dropped: usize,
    /// Valid records discarded because an earlier one had the same ISBN.
    pub duplicates: usize,
}

impl NormalizeReport {
    pub fn discarded(&self) -> usize {
        self.dropped + self.duplicates
    }
}

pub fn normalize(raw: &Value) -> ScanCollection {
    normalize_with_report(raw).0
}

pub fn normalize_with_report(raw: &Value) -> (ScanCollection, NormalizeReport) {
    let (version, elements): (Number, &[Value]) = match raw {
        Value::Array(items) => (Number::from(SCHEMA_VERSION), items.as_slice()),
        Value::Object(obj) => {
            let version = schema_version(obj.get("version"));
            let items = obj
                .get("items")
                .and_then(Value::as_array)
                .map_or(&[][..], Vec::as_slice);
            (version, items)
        }
        _ => (Number::from(SCHEMA_VERSION), &[][..]),
    };

    let mut report = NormalizeReport::default();
    let mut records = Vec::with_capacity(elements.len());
    for element in elements {
        match sanitize(element) {
            Some(record) => records.push(record),
            None => report.dropped += 1,
        }
    }

    let before = records.len();
    let items = dedupe(records);
    report.duplicates = before - items.len();

    (ScanCollection { version, items }, report)
}

/// Keep the first record for each ISBN, preserving order.
pub fn dedupe(records: impl IntoIterator<Item = ScanRecord>) -> Vec<ScanRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(r.isbn.clone()))
        .collect()
}

/// Re-run normalization over typed records: the last step before any store
/// persists a collection.
pub fn normalize_records(records: &[ScanRecord]) -> ScanCollection {
    ScanCollection::new(dedupe(records.iter().cloned()))
}

// Any JSON number passes through; everything else is the current schema.
fn schema_version(v: Option<&Value>) -> Number {
    match v {
        Some(Value::Number(n)) => n.clone(),
        _ => Number::from(SCHEMA_VERSION),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookRecord;
    use serde_json::json;

    #[test]
    fn test_first_occurrence_wins() {
        let raw = json!([
            {"isbn": "123", "book": {"title": "A"}},
            {"isbn": "123", "book": {"title": "B"}}
        ]);
        let c = normalize(&raw);
        assert_eq!(
            c.items,
            vec![ScanRecord::new("123", Some(BookRecord::titled("A")))]
        );
        assert_eq!(c.version, Number::from(1));
    }

    #[test]
    fn test_envelope_shape() {
        let raw = json!({"version": 1, "items": [{"isbn": "1", "book": null}]});
        let c = normalize(&raw);
        assert_eq!(c.items, vec![ScanRecord::new("1", None)]);
    }

    #[test]
    fn test_version_passthrough_and_defaults() {
        let version = |raw: Value| serde_json::to_value(normalize(&raw).version).unwrap();
        assert_eq!(version(json!({"version": 3, "items": []})), json!(3));
        assert_eq!(version(json!({"version": -4})), json!(-4));
        assert_eq!(version(json!({"version": 1.5})), json!(1.5));
        assert_eq!(version(json!({"version": "2", "items": []})), json!(1));
        assert_eq!(version(json!({"version": null})), json!(1));
        assert_eq!(version(json!({"items": []})), json!(1));
        assert_eq!(version(json!([])), json!(1));
    }

    #[test]
    fn test_wrong_shapes_yield_empty() {
        for raw in [
            json!(null),
            json!(7),
            json!("items"),
            json!(true),
            json!({}),
            json!({"items": "nope"}),
            json!({"items": {"isbn": "1"}}),
            json!({"records": [{"isbn": "1"}]}),
        ] {
            let c = normalize(&raw);
            assert!(c.items.is_empty(), "expected empty for {raw}");
            assert_eq!(c.version, Number::from(1));
        }
    }

    #[test]
    fn test_invalid_elements_dropped_silently_with_report() {
        let raw = json!([
            {"isbn": "1"},
            42,
            null,
            {"isbn": 5},
            {"isbn": ""},
            {"isbn": "2", "book": "junk"},
            {"isbn": "1", "book": {"title": "later"}}
        ]);
        let (c, report) = normalize_with_report(&raw);
        assert_eq!(
            c.items,
            vec![ScanRecord::new("1", None), ScanRecord::new("2", None)]
        );
        assert_eq!(report.dropped, 4);
        assert_eq!(report.duplicates, 1);
        assert_eq!(report.discarded(), 5);
    }

    #[test]
    fn test_idempotent_on_items() {
        let raw = json!({"version": 1, "items": [
            {"isbn": "b", "book": {"title": "B", "authors": ["x", 3]}},
            {"isbn": "a"},
            {"isbn": "b"},
            "noise"
        ]});
        let once = normalize(&raw);
        let items = serde_json::to_value(&once.items).unwrap();
        let twice = normalize(&items);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_deeply_nested_junk_is_total() {
        let raw = json!({"items": [[[[{"isbn": "1"}]]], {"isbn": {"isbn": "1"}}, {"isbn": "ok", "book": {"title": [[["t"]]]}}]});
        let c = normalize(&raw);
        assert_eq!(c.items.len(), 1);
        assert_eq!(c.items[0].isbn, "ok");
        assert_eq!(c.items[0].book, Some(BookRecord::default()));
    }

    #[test]
    fn test_normalize_records_dedupes_typed_input() {
        let records = vec![
            ScanRecord::new("1", Some(BookRecord::titled("first"))),
            ScanRecord::new("1", None),
            ScanRecord::new("2", None),
        ];
        let c = normalize_records(&records);
        assert_eq!(c.len(), 2);
        assert_eq!(c.items[0].book, Some(BookRecord::titled("first")));
    }
}
