use crate::commands::{CmdMessage, CmdResult, ScanState};
use crate::error::Result;
use crate::store::ScanStore;

pub fn run<S: ScanStore>(state: &ScanState<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_scans(state.items().to_vec());
    if result.listed_scans.is_empty() {
        result.add_message(CmdMessage::info("No successful scans yet."));
    }
    Ok(result)
}
