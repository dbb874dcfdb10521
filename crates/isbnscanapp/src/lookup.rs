//! Book lookup against a Google Books style catalog.
//!
//! The catalog answers `GET <base>?q=isbn:<isbn>` with
//! `{ "items": [ { "volumeInfo": {...}, "saleInfo": {...} } ] }`. Only the
//! first item is used, projected onto [`BookRecord`] with the same field rules
//! as the sanitizer.

use crate::error::{Result, ScanError};
use crate::model::BookRecord;
use crate::sanitize::{number_field, string_field, string_list_field};
use reqwest::Client;
use serde_json::{Map, Value};
use tracing::debug;

pub const DEFAULT_LOOKUP_URL: &str = "https://www.googleapis.com/books/v1/volumes";

/// Project a raw catalog response onto a [`BookRecord`].
///
/// Returns `None` when the response has no items or its first item is not
/// an object.
pub fn to_book_record(result: &Value) -> Option<BookRecord> {
    let first = result.get("items")?.as_array()?.first()?.as_object()?;

    let empty = Map::new();
    let vi = first
        .get("volumeInfo")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let si = first
        .get("saleInfo")
        .and_then(Value::as_object)
        .unwrap_or(&empty);
    let image_links = vi.get("imageLinks").and_then(Value::as_object);

    Some(BookRecord {
        title: string_field(vi.get("title")),
        authors: string_list_field(vi.get("authors")),
        publisher: string_field(vi.get("publisher")),
        published_date: string_field(vi.get("publishedDate")),
        page_count: number_field(vi.get("pageCount")),
        categories: string_list_field(vi.get("categories")),
        description: string_field(vi.get("description")),
        thumbnail: image_links.and_then(|links| string_field(links.get("thumbnail"))),
        buy_link: string_field(si.get("buyLink")),
    })
}

pub struct LookupClient {
    client: Client,
    base_url: String,
}

impl LookupClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up one ISBN. `Ok(None)` means the catalog answered but knows no
    /// such book.
    pub async fn lookup(&self, isbn: &str) -> Result<Option<BookRecord>> {
        let isbn = isbn.trim();
        if isbn.is_empty() {
            return Err(ScanError::Lookup("Please enter an ISBN.".to_string()));
        }

        let query = format!("isbn:{}", isbn);
        debug!("Looking up {} at {}", isbn, self.base_url);
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("q", query.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScanError::Lookup(format!("Request failed: {}", status)));
        }

        let body: Value = response.json().await?;
        Ok(to_book_record(&body))
    }
}
