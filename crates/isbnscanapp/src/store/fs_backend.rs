use super::backend::KvBackend;
use crate::error::{Result, ScanError};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Key/value backend keeping one file per key inside a directory.
///
/// Keys are mapped to file names by replacing anything outside
/// `[A-Za-z0-9._-]` with `_`, so `isbn:scans:v1` lives in `isbn_scans_v1.json`.
pub struct FsKvBackend {
    root: PathBuf,
}

impl FsKvBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn key_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key_filename(key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(ScanError::Io)?;
        }
        Ok(())
    }
}

fn key_filename(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

impl KvBackend for FsKvBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.key_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(ScanError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key_filename(key), Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(ScanError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, self.key_path(key)) {
            let _ = fs::remove_file(&tmp_path);
            return Err(ScanError::Io(e));
        }
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.key_path(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ScanError::Io(e)),
        }
    }
}
