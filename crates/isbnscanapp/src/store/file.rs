//! Interchange files: export the history for the user to keep or move, and
//! import files the user picks.
//!
//! Exports are pretty-printed with 2-space indentation and named
//! `isbn-scans-<YYYYMMDD-HHMMSS>.json`. Imports accept either the enveloped
//! document or a bare array. Invalid JSON syntax is the only import failure;
//! any parseable document normalizes, possibly to nothing.

use crate::error::{Result, ScanError};
use crate::model::{ScanCollection, ScanRecord};
use crate::normalize::{normalize_records, normalize_with_report, NormalizeReport};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub fn export_filename<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("isbn-scans-{}.json", at.format("%Y%m%d-%H%M%S"))
}

pub fn export_to_string(items: &[ScanRecord]) -> Result<String> {
    let payload = normalize_records(items);
    serde_json::to_string_pretty(&payload).map_err(ScanError::Serialization)
}

/// Write an export file into `dir` and return its path.
pub fn export_to_dir<Tz>(items: &[ScanRecord], dir: &Path, at: &DateTime<Tz>) -> Result<PathBuf>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let content = export_to_string(items)?;
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(ScanError::Io)?;
    }
    let path = dir.join(export_filename(at));
    fs::write(&path, content).map_err(ScanError::Io)?;
    Ok(path)
}

pub fn import_str(contents: &str) -> Result<ScanCollection> {
    import_str_with_report(contents).map(|(collection, _)| collection)
}

pub fn import_str_with_report(contents: &str) -> Result<(ScanCollection, NormalizeReport)> {
    let value: serde_json::Value = serde_json::from_str(contents).map_err(|e| {
        warn!("Failed to parse JSON file while importing scans: {}", e);
        ScanError::InvalidFormat("Invalid JSON file.".to_string())
    })?;
    Ok(normalize_with_report(&value))
}

pub fn import_file(path: &Path) -> Result<(ScanCollection, NormalizeReport)> {
    let contents = fs::read_to_string(path).map_err(ScanError::Io)?;
    import_str_with_report(&contents)
}
