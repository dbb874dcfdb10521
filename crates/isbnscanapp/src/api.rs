//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for
//! clients. It owns the [`ScanState`] and dispatches; it does no business
//! logic and no presentation.
//!
//! `ScanApi<S: ScanStore>` is generic over the store:
//! - Production: `ScanApi<PersistentStore<FsKvBackend>>`
//! - Testing: `ScanApi<SessionStore>` or `ScanApi<PersistentStore<MemKvBackend>>`
//!
//! Network calls (catalog lookup, remote mirror) stay outside: the caller
//! awaits them and hands the typed result in, so the facade stays
//! synchronous.

use crate::commands::{self, ScanState};
use crate::error::Result;
use crate::model::{BookRecord, ScanCollection, ScanRecord};
use crate::normalize::NormalizeReport;
use crate::store::ScanStore;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::{Path, PathBuf};

pub struct ScanApi<S: ScanStore> {
    state: ScanState<S>,
    config_dir: PathBuf,
}

impl<S: ScanStore> ScanApi<S> {
    pub fn new(store: S, config_dir: PathBuf) -> Self {
        Self {
            state: ScanState::open(store),
            config_dir,
        }
    }

    pub fn scans(&self) -> &[ScanRecord] {
        self.state.items()
    }

    pub fn record_scan(&mut self, isbn: &str, book: Option<BookRecord>) -> Result<CmdResult> {
        commands::record::run(&mut self.state, isbn, book)
    }

    pub fn list_scans(&self) -> Result<CmdResult> {
        commands::list::run(&self.state)
    }

    pub fn import_file(&mut self, path: &Path) -> Result<CmdResult> {
        commands::import::run(&mut self.state, path)
    }

    pub fn import_str(&mut self, contents: &str, source: &str) -> Result<CmdResult> {
        commands::import::run_str(&mut self.state, contents, source)
    }

    /// Merge a collection fetched from elsewhere (the remote mirror) with the
    /// same precedence as a file import.
    pub fn import_collection(&mut self, incoming: ScanCollection, source: &str) -> CmdResult {
        commands::import::apply(&mut self.state, incoming, NormalizeReport::default(), source)
    }

    pub fn export<Tz>(&self, dir: &Path, at: &DateTime<Tz>) -> Result<CmdResult>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        commands::export::run(&self.state, dir, at)
    }

    pub fn clear(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.state)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};
