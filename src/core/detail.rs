//! Batch detail viewer and full-data download

use crate::core::csv::{CsvQuoting, write_csv};
use crate::core::models::{BatchDetail, RowDetail, display_value, is_filled};
use crate::utils::error::{ConsoleError, Result};

/// Rows shown by the detail viewer
pub const DETAIL_PREVIEW_ROWS: usize = 10;

/// Keys of the first row's data that are filled in at least one of `rows`
fn filled_columns(rows: &[RowDetail]) -> Vec<String> {
    let Some(first) = rows.first() else {
        return Vec::new();
    };
    first
        .data
        .keys()
        .filter(|key| rows.iter().any(|r| is_filled(r.data.get(key.as_str()))))
        .cloned()
        .collect()
}

fn cells(row: &RowDetail, columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .map(|k| row.data.get(k).map(display_value).unwrap_or_default())
        .collect()
}

/// What the detail viewer shows for one batch
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPreview {
    pub batch_id: String,
    pub total_records: u64,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DetailPreview {
    pub fn from_detail(detail: &BatchDetail) -> Self {
        let preview = &detail.details[..detail.details.len().min(DETAIL_PREVIEW_ROWS)];
        let columns = filled_columns(preview);
        let rows = preview.iter().map(|r| cells(r, &columns)).collect();
        Self {
            batch_id: detail.batch_id.clone(),
            total_records: detail.total_records,
            columns,
            rows,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Full CSV of a batch's business data
///
/// Columns come from the first row and are dropped when empty in every row.
pub fn batch_csv(detail: &BatchDetail) -> Result<String> {
    if detail.details.is_empty() {
        return Err(ConsoleError::empty_data("Aucune donnée à télécharger"));
    }
    let columns = filled_columns(&detail.details);
    let rows = detail.details.iter().map(|r| cells(r, &columns));
    write_csv(&columns, rows, CsvQuoting::Necessary, false)
}

pub fn batch_csv_file_name(batch_id: &str) -> String {
    format!("batch_{batch_id}.csv")
}
