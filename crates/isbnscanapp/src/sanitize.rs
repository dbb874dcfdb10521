//! # Record Sanitizer
//!
//! Turns one untrusted JSON value into a typed [`ScanRecord`], or rejects it.
//!
//! This is the schema check that guards every boundary where scan data enters
//! the process: files picked by the user, the key/value store, the remote
//! mirror and its HTTP clients. Code past this point works on typed records
//! only.
//!
//! ## Rules
//!
//! - The value must be an object with a string `isbn`. Anything else is
//!   rejected (`None`).
//! - An empty `isbn` is rejected as well. A record keyed by `""` cannot be
//!   told apart from "no ISBN" anywhere downstream.
//! - `book` is projected field by field when it is an object, and becomes
//!   `None` otherwise. A field survives only when it has its declared type;
//!   string lists keep their string elements and drop the rest.
//!
//! Nothing here fails: a bad field is dropped, a bad record is rejected.

use crate::model::{BookRecord, ScanRecord};
use serde_json::{Map, Number, Value};

/// Sanitize a single raw record.
pub fn sanitize(raw: &Value) -> Option<ScanRecord> {
    let obj = raw.as_object()?;
    let isbn = obj.get("isbn")?.as_str()?;
    if isbn.is_empty() {
        return None;
    }

    let book = obj.get("book").and_then(Value::as_object).map(sanitize_book);

    Some(ScanRecord::new(isbn, book))
}

/// Project an object onto [`BookRecord`], keeping only well-typed fields.
pub fn sanitize_book(book: &Map<String, Value>) -> BookRecord {
    BookRecord {
        title: string_field(book.get("title")),
        authors: string_list_field(book.get("authors")),
        publisher: string_field(book.get("publisher")),
        published_date: string_field(book.get("publishedDate")),
        page_count: number_field(book.get("pageCount")),
        categories: string_list_field(book.get("categories")),
        description: string_field(book.get("description")),
        thumbnail: string_field(book.get("thumbnail")),
        buy_link: string_field(book.get("buyLink")),
    }
}

pub(crate) fn string_field(v: Option<&Value>) -> Option<String> {
    v.and_then(Value::as_str).map(str::to_string)
}

pub(crate) fn number_field(v: Option<&Value>) -> Option<Number> {
    match v {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    }
}

pub(crate) fn string_list_field(v: Option<&Value>) -> Option<Vec<String>> {
    v.and_then(Value::as_array).map(|items| {
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    })
}
