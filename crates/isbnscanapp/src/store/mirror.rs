//! Server-side copy of a scan history: one JSON document on disk, replaced
//! wholesale on every write.
//!
//! Reads are total. A missing, unreadable or corrupt file reads as the empty
//! collection, and stored data is normalized again on the way out. Writes
//! normalize the incoming payload first and are the only fallible operation.

use crate::error::{Result, ScanError};
use crate::model::ScanCollection;
use crate::normalize::normalize;
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct MirrorFile {
    path: PathBuf,
}

impl MirrorFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> ScanCollection {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return ScanCollection::empty(),
            Err(e) => {
                error!("Failed to read scans file {}: {}", self.path.display(), e);
                return ScanCollection::empty();
            }
        };

        match serde_json::from_str::<Value>(&content) {
            Ok(value) => normalize(&value),
            Err(e) => {
                error!("Failed to parse scans file {}: {}", self.path.display(), e);
                ScanCollection::empty()
            }
        }
    }

    /// Normalize `raw`, persist it as the new state and return what was stored.
    pub fn replace(&self, raw: &Value) -> Result<ScanCollection> {
        let validated = normalize(raw);
        self.write(&validated).inspect_err(|e| {
            error!("Failed to write scans file {}: {}", self.path.display(), e);
        })?;
        info!(
            "Stored {} scans in {}",
            validated.len(),
            self.path.display()
        );
        Ok(validated)
    }

    fn write(&self, collection: &ScanCollection) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(ScanError::Io)?;
        }

        let content = serde_json::to_string_pretty(collection).map_err(ScanError::Serialization)?;

        // Atomic write
        let tmp = dir.join(format!(".scans-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, content).map_err(ScanError::Io)?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(ScanError::Io(e));
        }
        Ok(())
    }
}
