use crate::commands::{CmdMessage, CmdResult, ScanState};
use crate::error::Result;
use crate::store::file::export_to_dir;
use crate::store::ScanStore;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::path::Path;

pub fn run<S, Tz>(state: &ScanState<S>, dir: &Path, at: &DateTime<Tz>) -> Result<CmdResult>
where
    S: ScanStore,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let path = export_to_dir(state.items(), dir, at)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Exported {} scans to {}",
        state.items().len(),
        path.display()
    )));
    Ok(result.with_export_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScanRecord;
    use crate::store::file::import_file;
    use crate::store::session::SessionStore;
    use chrono::Utc;

    #[test]
    fn test_export_writes_session() {
        let dir = tempfile::tempdir().unwrap();
        let state = ScanState::open(SessionStore::with_items(&[
            ScanRecord::new("2", None),
            ScanRecord::new("1", None),
        ]));
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

        let res = run(&state, dir.path(), &at).unwrap();
        let path = res.export_path.unwrap();
        assert!(path.ends_with("isbn-scans-20250102-030405.json"));

        let (back, _) = import_file(&path).unwrap();
        assert_eq!(back.items, state.items());
    }

    #[test]
    fn test_export_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let state = ScanState::open(SessionStore::new());
        let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
        let res = run(&state, dir.path(), &at).unwrap();
        let content = std::fs::read_to_string(res.export_path.unwrap()).unwrap();
        assert_eq!(content, "{\n  \"version\": 1,\n  \"items\": []\n}");
    }
}
