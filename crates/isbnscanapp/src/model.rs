use serde::Serialize;
use serde_json::Number;

/// Schema tag written with every persisted or exported collection.
pub const SCHEMA_VERSION: u32 = 1;

/// The subset of catalog metadata kept for a scanned book.
///
/// Every field is optional on its own: `None` means "unknown", which is
/// different from an empty string or an empty list.
///
/// The model types only serialize. External JSON comes in through
/// [`crate::normalize`] or [`crate::sanitize`], never through serde.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
    // Kept as a JSON number so integers and fractions survive a round trip unchanged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buy_link: Option<String>,
}

impl BookRecord {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }
}

/// One scan: an ISBN and whatever the catalog knew about it.
///
/// Identity is the `isbn`; two records with the same ISBN are the same
/// logical entry whatever their `book` holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanRecord {
    pub isbn: String,
    pub book: Option<BookRecord>,
}

impl ScanRecord {
    pub fn new(isbn: impl Into<String>, book: Option<BookRecord>) -> Self {
        Self {
            isbn: isbn.into(),
            book,
        }
    }
}

/// The canonical persisted shape: `{ "version": 1, "items": [...] }`.
///
/// Collections produced by [`crate::normalize`] never hold two records with
/// the same ISBN.
///
/// There is no `Deserialize` impl, so untrusted JSON cannot skip the
/// normalizer:
///
/// ```compile_fail
/// let _: isbnscanapp::model::ScanCollection =
///     serde_json::from_str(r#"{"version":1,"items":[]}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanCollection {
    /// Schema tag. Any JSON number read from outside is kept as-is.
    pub version: Number,
    pub items: Vec<ScanRecord>,
}

impl ScanCollection {
    pub fn new(items: Vec<ScanRecord>) -> Self {
        Self {
            version: Number::from(SCHEMA_VERSION),
            items,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, isbn: &str) -> Option<&ScanRecord> {
        self.items.iter().find(|r| r.isbn == isbn)
    }
}

impl Default for ScanCollection {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_book_serializes_camel_case_and_skips_unknown() {
        let book = BookRecord {
            title: Some("Dune".into()),
            published_date: Some("1965".into()),
            buy_link: Some("https://example.com".into()),
            ..Default::default()
        };
        let value = serde_json::to_value(&book).unwrap();
        assert_eq!(
            value,
            json!({"title": "Dune", "publishedDate": "1965", "buyLink": "https://example.com"})
        );
    }

    #[test]
    fn test_missing_book_serializes_as_null() {
        let record = ScanRecord::new("123", None);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value, json!({"isbn": "123", "book": null}));
    }

    #[test]
    fn test_empty_collection_shape() {
        let value = serde_json::to_value(ScanCollection::empty()).unwrap();
        assert_eq!(value, json!({"version": 1, "items": []}));
    }

    #[test]
    fn test_get_by_isbn() {
        let c = ScanCollection::new(vec![
            ScanRecord::new("1", None),
            ScanRecord::new("2", Some(BookRecord::titled("Two"))),
        ]);
        assert_eq!(c.len(), 2);
        assert_eq!(
            c.get("2").and_then(|r| r.book.as_ref()).and_then(|b| b.title.as_deref()),
            Some("Two")
        );
        assert!(c.get("3").is_none());
    }
}
