//! Processing log view helpers for the admin dashboard

use crate::core::csv::{CsvQuoting, write_csv};
use crate::core::models::ProcessingLogEntry;
use crate::utils::error::{ConsoleError, Result};
use chrono::NaiveDate;

/// Entries at `level`; `None`, empty or `ALL` keeps everything
pub fn filter_logs<'a>(
    entries: &'a [ProcessingLogEntry],
    level: Option<&str>,
) -> Vec<&'a ProcessingLogEntry> {
    entries.iter().filter(|e| e.matches_level(level)).collect()
}

fn time_of(entry: &ProcessingLogEntry) -> String {
    entry
        .timestamp
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_default()
}

/// One terminal line: `[HH:MM:SS] [LEVEL] message`
pub fn log_line(entry: &ProcessingLogEntry) -> String {
    format!("[{}] [{}] {}", time_of(entry), entry.level, entry.message)
}

/// `Timestamp,Level,Message` export of the displayed entries
pub fn logs_csv(entries: &[&ProcessingLogEntry]) -> Result<String> {
    if entries.is_empty() {
        return Err(ConsoleError::empty_data("Aucun log à exporter"));
    }
    let rows = entries
        .iter()
        .map(|e| vec![time_of(e), e.level.clone(), e.message.trim().to_string()]);
    write_csv(
        &["Timestamp", "Level", "Message"],
        rows,
        CsvQuoting::Necessary,
        false,
    )
}

pub fn logs_csv_file_name(today: NaiveDate) -> String {
    format!("processing_logs_{}.csv", today.format("%Y-%m-%d"))
}
