use crate::commands::{CmdMessage, CmdResult, ScanState};
use crate::error::Result;
use crate::store::ScanStore;

pub fn run<S: ScanStore>(state: &mut ScanState<S>) -> Result<CmdResult> {
    let removed = state.items().to_vec();
    let mut result = CmdResult::default();
    state.reset(&mut result);
    result.add_message(CmdMessage::success(format!(
        "Cleared {} scans",
        removed.len()
    )));
    Ok(result.with_affected_scans(removed))
}
