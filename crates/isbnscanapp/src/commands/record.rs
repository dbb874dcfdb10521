use crate::commands::{CmdMessage, CmdResult, ScanState};
use crate::error::{Result, ScanError};
use crate::merge::merge;
use crate::model::{BookRecord, ScanRecord};
use crate::store::ScanStore;

/// Record a successful lookup as the newest scan. A repeated ISBN moves to
/// the front and takes the new book data.
pub fn run<S: ScanStore>(
    state: &mut ScanState<S>,
    isbn: &str,
    book: Option<BookRecord>,
) -> Result<CmdResult> {
    let isbn = isbn.trim();
    if isbn.is_empty() {
        return Err(ScanError::Lookup("Please enter an ISBN.".to_string()));
    }

    let record = ScanRecord::new(isbn, book);
    let rescan = state.items().iter().any(|r| r.isbn == isbn);
    let merged = merge(std::slice::from_ref(&record), state.items());

    let mut result = CmdResult::default();
    match (&record.book, rescan) {
        (None, _) => result.add_message(CmdMessage::warning(format!(
            "No book found for ISBN {}; scan recorded without details.",
            isbn
        ))),
        (Some(_), true) => {
            result.add_message(CmdMessage::info(format!("Updated scan for ISBN {}", isbn)))
        }
        (Some(_), false) => {
            result.add_message(CmdMessage::success(format!("Recorded ISBN {}", isbn)))
        }
    }
    state.commit(merged, &mut result);

    Ok(result.with_affected_scans(vec![record]))
}
