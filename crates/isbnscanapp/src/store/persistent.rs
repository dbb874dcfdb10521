use super::backend::KvBackend;
use super::ScanStore;
use crate::model::{ScanCollection, ScanRecord};
use crate::normalize::{normalize, normalize_records};
use tracing::{debug, warn};

/// Fixed, namespaced key holding the scan history. The `v1` suffix and the
/// document's `version` field leave room for later migrations.
pub const STORAGE_KEY: &str = "isbn:scans:v1";

/// Scan history persisted under [`STORAGE_KEY`] in a key/value backend.
///
/// Nothing here raises: a medium that is full, disabled or corrupt degrades
/// to "nothing happened", and the failure is logged.
pub struct PersistentStore<B: KvBackend> {
    backend: B,
    key: String,
}

impl<B: KvBackend> PersistentStore<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            key: STORAGE_KEY.to_string(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<B: KvBackend> ScanStore for PersistentStore<B> {
    fn load(&self) -> ScanCollection {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ScanCollection::empty(),
            Err(e) => {
                warn!("Failed to load scans from {}: {}", self.key, e);
                return ScanCollection::empty();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => normalize(&value),
            Err(e) => {
                warn!("Stored scans under {} are not valid JSON: {}", self.key, e);
                ScanCollection::empty()
            }
        }
    }

    fn save(&mut self, items: &[ScanRecord]) -> bool {
        let payload = normalize_records(items);
        let content = match serde_json::to_string(&payload) {
            Ok(content) => content,
            Err(e) => {
                warn!("Failed to serialize scans: {}", e);
                return false;
            }
        };

        match self.backend.set(&self.key, &content) {
            Ok(()) => {
                debug!("Saved {} scans under {}", payload.len(), self.key);
                true
            }
            Err(e) => {
                warn!("Failed to save scans under {}: {}", self.key, e);
                false
            }
        }
    }

    fn clear(&mut self) -> bool {
        match self.backend.remove(&self.key) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to clear scans under {}: {}", self.key, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookRecord;
    use crate::store::mem_backend::MemKvBackend;

    fn store() -> PersistentStore<MemKvBackend> {
        PersistentStore::new(MemKvBackend::new())
    }

    #[test]
    fn test_load_absent_key_is_empty() {
        assert_eq!(store().load(), ScanCollection::empty());
    }

    #[test]
    fn test_load_unparsable_value_is_empty() {
        let s = store();
        s.backend().insert_raw(STORAGE_KEY, "not json");
        assert_eq!(s.load(), ScanCollection::empty());
    }

    #[test]
    fn test_load_routes_through_normalizer() {
        let s = store();
        s.backend().insert_raw(
            STORAGE_KEY,
            r#"{"version":1,"items":[{"isbn":"1","book":{"title":"A"}},{"isbn":"1"},{"isbn":7}]}"#,
        );
        let loaded = s.load();
        assert_eq!(
            loaded.items,
            vec![ScanRecord::new("1", Some(BookRecord::titled("A")))]
        );
    }

    #[test]
    fn test_load_accepts_bare_array() {
        let s = store();
        s.backend().insert_raw(STORAGE_KEY, r#"[{"isbn":"9"}]"#);
        assert_eq!(s.load().items, vec![ScanRecord::new("9", None)]);
    }

    #[test]
    fn test_save_writes_canonical_shape() {
        let mut s = store();
        assert!(s.save(&[ScanRecord::new("1", None), ScanRecord::new("1", None)]));
        let raw = s.backend().raw(STORAGE_KEY).unwrap();
        assert_eq!(raw, r#"{"version":1,"items":[{"isbn":"1","book":null}]}"#);
    }

    #[test]
    fn test_save_failure_is_swallowed_and_keeps_previous() {
        let mut s = store();
        assert!(s.save(&[ScanRecord::new("old", None)]));

        s.backend().set_simulate_write_error(true);
        assert!(!s.save(&[ScanRecord::new("new", None)]));

        assert_eq!(s.load().items, vec![ScanRecord::new("old", None)]);
    }

    #[test]
    fn test_clear() {
        let mut s = store();
        s.save(&[ScanRecord::new("1", None)]);
        assert!(s.clear());
        assert!(s.backend().raw(STORAGE_KEY).is_none());
        assert!(s.load().is_empty());
    }

    #[test]
    fn test_clear_failure_is_swallowed() {
        let mut s = store();
        s.save(&[ScanRecord::new("1", None)]);
        s.backend().set_simulate_write_error(true);
        assert!(!s.clear());
        assert_eq!(s.load().len(), 1);
    }
}
