use crate::config::ScanConfig;
use crate::model::{ScanCollection, ScanRecord};
use crate::normalize::NormalizeReport;
use crate::store::session::SessionStore;
use crate::store::ScanStore;
use std::path::PathBuf;

pub mod clear;
pub mod config;
pub mod export;
pub mod import;
pub mod list;
pub mod record;

/// The explicitly owned scan state handed to every command: the session
/// collection, which is authoritative, and the store that snapshots it.
pub struct ScanState<S: ScanStore> {
    session: SessionStore,
    store: S,
}

impl<S: ScanStore> ScanState<S> {
    /// Start a session from whatever the store holds.
    pub fn open(store: S) -> Self {
        let loaded = store.load();
        Self {
            session: SessionStore::with_items(&loaded.items),
            store,
        }
    }

    pub fn items(&self) -> &[ScanRecord] {
        self.session.items()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the session collection and persist it. A store that refuses
    /// the write leaves the session updated and adds a warning.
    pub(crate) fn commit(&mut self, collection: ScanCollection, result: &mut CmdResult) {
        self.session.save(&collection.items);
        if !self.store.save(self.session.items()) {
            result.add_message(CmdMessage::warning(
                "Scan history could not be saved; changes are kept for this session only.",
            ));
        }
    }

    pub(crate) fn reset(&mut self, result: &mut CmdResult) {
        self.session.clear();
        if !self.store.clear() {
            result.add_message(CmdMessage::warning(
                "Stored scan history could not be removed.",
            ));
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_scans: Vec<ScanRecord>,
    pub listed_scans: Vec<ScanRecord>,
    pub export_path: Option<PathBuf>,
    pub report: Option<NormalizeReport>,
    pub config: Option<ScanConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_scans(mut self, scans: Vec<ScanRecord>) -> Self {
        self.affected_scans = scans;
        self
    }

    pub fn with_listed_scans(mut self, scans: Vec<ScanRecord>) -> Self {
        self.listed_scans = scans;
        self
    }

    pub fn with_export_path(mut self, path: PathBuf) -> Self {
        self.export_path = Some(path);
        self
    }

    pub fn with_report(mut self, report: NormalizeReport) -> Self {
        self.report = Some(report);
        self
    }

    pub fn with_config(mut self, config: ScanConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn has_warnings(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning)
    }
}
