pub mod date;
pub mod disruption;
pub mod model;
pub mod paths;
pub mod slug;

pub use disruption::{group_logs, Disruption};
pub use model::{DataFile, Log, LogEntry, Site};

use std::collections::HashSet;
use std::path::Path;

use chrono::NaiveDate;
use log::{debug, warn};

use crate::utils::error::{BoxResult, SiteError};
use crate::utils::fs;

/// Load and parse the JSON data file
pub fn load_data_file(path: &Path) -> BoxResult<DataFile> {
    let content = fs::read_file(path)?;

    let data: DataFile = serde_json::from_str(&content).map_err(|e| {
        SiteError::Data(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    debug!("Loaded {} log entries from {}", data.logs.len(), path.display());
    Ok(data)
}

/// Normalize every entry and sort newest first by numeric id.
///
/// Equal ids keep their data file order. Duplicates are reported but
/// not rejected.
pub fn normalize_logs(entries: &[LogEntry], today: NaiveDate, default_tag: &str) -> BoxResult<Vec<Log>> {
    let mut logs = entries
        .iter()
        .map(|entry| Log::from_entry(entry, today, default_tag))
        .collect::<BoxResult<Vec<Log>>>()?;

    {
        let mut seen = HashSet::new();
        for log in &logs {
            if !seen.insert(&log.number) {
                warn!("Duplicate log id {}; ordering among duplicates is unspecified", log.id);
            }
        }
    }

    logs.sort_by(|a, b| b.number.cmp(&a.number));
    Ok(logs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_sorts_newest_first() {
        let entries: Vec<LogEntry> = serde_json::from_str(
            r#"[{"id": "2", "title": "b"}, {"id": "10", "title": "c"}, {"id": "1", "title": "a"}]"#,
        )
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();

        let logs = normalize_logs(&entries, today, "LOG").unwrap();
        let ids: Vec<&str> = logs.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["10", "2", "1"]);
    }

    #[test]
    fn test_normalize_sorts_ids_wider_than_i64() {
        let entries: Vec<LogEntry> = serde_json::from_str(
            r#"[{"id": "9223372036854775807", "title": "max"},
                {"id": "12345678901234567890", "title": "wide"},
                {"id": "007", "title": "bond"}]"#,
        )
        .unwrap();
        let today = NaiveDate::from_ymd_opt(2025, 5, 5).unwrap();

        let logs = normalize_logs(&entries, today, "LOG").unwrap();
        let ids: Vec<&str> = logs.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["12345678901234567890", "9223372036854775807", "007"]);
    }

    #[test]
    fn test_load_rejects_missing_logs_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs.json");
        std::fs::write(&path, r#"{"site": {"base_url": "x", "og_image": "y", "youtube": "z"}}"#).unwrap();

        let err = load_data_file(&path).unwrap_err();
        assert!(err.to_string().contains("logs"));
    }
}
