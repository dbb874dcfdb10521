use super::ScanStore;
use crate::model::{ScanCollection, ScanRecord};
use crate::normalize::normalize_records;

/// In-memory scan history for the current session.
#[derive(Debug, Default, Clone)]
pub struct SessionStore {
    collection: ScanCollection,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: &[ScanRecord]) -> Self {
        Self {
            collection: normalize_records(items),
        }
    }

    pub fn items(&self) -> &[ScanRecord] {
        &self.collection.items
    }
}

impl ScanStore for SessionStore {
    fn load(&self) -> ScanCollection {
        self.collection.clone()
    }

    fn save(&mut self, items: &[ScanRecord]) -> bool {
        self.collection = normalize_records(items);
        true
    }

    fn clear(&mut self) -> bool {
        self.collection = ScanCollection::empty();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_use_is_empty() {
        let store = SessionStore::new();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_replaces_and_dedupes() {
        let mut store = SessionStore::with_items(&[ScanRecord::new("old", None)]);
        assert!(store.save(&[
            ScanRecord::new("1", None),
            ScanRecord::new("1", None),
            ScanRecord::new("2", None),
        ]));
        let isbns: Vec<_> = store.items().iter().map(|r| r.isbn.as_str()).collect();
        assert_eq!(isbns, vec!["1", "2"]);
    }

    #[test]
    fn test_loaded_copy_is_a_snapshot() {
        let mut store = SessionStore::with_items(&[ScanRecord::new("1", None)]);
        let snapshot = store.load();
        store.clear();
        assert_eq!(snapshot.len(), 1);
        assert!(store.load().is_empty());
    }
}
