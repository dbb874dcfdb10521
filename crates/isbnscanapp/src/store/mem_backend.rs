use super::backend::KvBackend;
use crate::error::{Result, ScanError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory key/value backend for testing.
///
/// Uses `RefCell` for interior mutability since the client is single-threaded,
/// so `KvBackend` can take `&self` everywhere.
#[derive(Default)]
pub struct MemKvBackend {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemKvBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every `set` and `remove` fail, as a full or disabled store would.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Put a raw value in place, bypassing the write-error switch.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl KvBackend for MemKvBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ScanError::Store("Simulated write error".to_string()));
        }
        self.insert_raw(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(ScanError::Store("Simulated write error".to_string()));
        }
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}
