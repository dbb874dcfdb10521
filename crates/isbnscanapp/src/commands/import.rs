use crate::commands::{CmdMessage, CmdResult, ScanState};
use crate::error::Result;
use crate::merge::merge;
use crate::model::ScanCollection;
use crate::normalize::NormalizeReport;
use crate::store::file;
use crate::store::ScanStore;
use std::path::Path;

/// Import a user-selected file. Invalid JSON fails with `InvalidFormat` and
/// leaves the session untouched.
pub fn run<S: ScanStore>(state: &mut ScanState<S>, path: &Path) -> Result<CmdResult> {
    let (incoming, report) = file::import_file(path)?;
    Ok(apply(state, incoming, report, &path.display().to_string()))
}

/// Import already-read file contents.
pub fn run_str<S: ScanStore>(
    state: &mut ScanState<S>,
    contents: &str,
    source: &str,
) -> Result<CmdResult> {
    let (incoming, report) = file::import_str_with_report(contents)?;
    Ok(apply(state, incoming, report, source))
}

/// Merge a normalized collection into the session, incoming records winning.
pub fn apply<S: ScanStore>(
    state: &mut ScanState<S>,
    incoming: ScanCollection,
    report: NormalizeReport,
    source: &str,
) -> CmdResult {
    let merged = merge(&incoming.items, state.items());

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Imported {} scans from {}",
        incoming.len(),
        source
    )));
    if report.dropped > 0 {
        result.add_message(CmdMessage::warning(format!(
            "Skipped {} invalid entries",
            report.dropped
        )));
    }
    if report.duplicates > 0 {
        result.add_message(CmdMessage::info(format!(
            "Ignored {} duplicate entries",
            report.duplicates
        )));
    }

    state.commit(merged, &mut result);
    result
        .with_affected_scans(incoming.items)
        .with_report(report)
}
