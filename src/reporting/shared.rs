use crate::types::RunReport;
use std::time::Duration;

pub(crate) fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

pub(crate) fn duration(report: &RunReport) -> Duration {
    let ms = u64::try_from(report.duration_ms).unwrap_or(u64::MAX);
    Duration::from_millis(ms)
}
