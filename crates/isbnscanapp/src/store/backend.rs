use crate::error::Result;

/// Raw key/value medium behind [`super::persistent::PersistentStore`].
///
/// This trait handles the "where" of storage (a directory, memory), while
/// `PersistentStore` handles the "what" (normalization, the fixed key,
/// swallowing failures).
pub trait KvBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic so readers never observe a partial write.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<()>;
}
