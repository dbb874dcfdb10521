//! # Merge Engine
//!
//! `merge(incoming, existing)` concatenates `incoming ++ existing` and
//! deduplicates first-wins. Incoming records therefore win every ISBN
//! conflict and lead the result; existing records not covered follow in
//! their original order. Records are taken whole, never merged field by
//! field.

use crate::model::{ScanCollection, ScanRecord};
use crate::normalize::dedupe;

pub fn merge(incoming: &[ScanRecord], existing: &[ScanRecord]) -> ScanCollection {
    ScanCollection::new(dedupe(incoming.iter().chain(existing).cloned()))
}
