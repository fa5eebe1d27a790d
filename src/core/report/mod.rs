//! Reports page data: table rows, totals, CSV and PDF exports

mod document;
mod pdf;

pub use document::{ReportPdf, render_report_pdf, report_pdf_file_name};
pub use pdf::{Font, PdfDocument, Rgb};

use crate::core::csv::{CsvQuoting, write_csv};
use crate::core::models::{BatchStatus, BatchView};
use crate::utils::error::Result;
use chrono::{DateTime, NaiveDate, Utc};

/// Columns of the on-screen table and of the CSV export
pub const REPORT_CSV_HEADERS: [&str; 11] = [
    "Batch ID",
    "Application",
    "Statut",
    "Inputter",
    "Validateur",
    "Pays",
    "Département",
    "Records",
    "Erreurs",
    "Date Upload",
    "Date Validation",
];

fn local_datetime(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|dt| dt.format("%d/%m/%Y %H:%M:%S").to_string())
        .unwrap_or_default()
}

fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Cells of one batch as rendered in the reports table
pub fn table_cells(batch: &BatchView) -> Vec<String> {
    let uploaded = local_datetime(batch.uploaded_at.as_ref());
    let validated = local_datetime(batch.validated_at.as_ref());
    vec![
        or_dash(Some(&batch.batch_id)),
        or_dash(Some(&batch.application)),
        batch.status.to_string(),
        or_dash(batch.uploaded_by.as_deref()),
        batch
            .validated_by
            .clone()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "Non validé".to_string()),
        or_dash(batch.country.as_deref()),
        or_dash(batch.department.as_deref()),
        batch.total_records.to_string(),
        batch.error_count.to_string(),
        or_dash(Some(&uploaded)),
        or_dash(Some(&validated)),
    ]
}

/// Rows of the current page whose rendered text contains `term`
pub fn search_rows<'a>(rows: &'a [BatchView], term: &str) -> Vec<&'a BatchView> {
    let needle = term.to_lowercase();
    rows.iter()
        .filter(|b| {
            needle.is_empty()
                || table_cells(b)
                    .iter()
                    .any(|cell| cell.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Aggregate line of the PDF export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportTotals {
    pub batches: usize,
    pub processed: usize,
    pub with_errors: usize,
    pub records: u64,
    pub errors: u64,
}

impl ReportTotals {
    pub fn from_batches(batches: &[BatchView]) -> Self {
        Self {
            batches: batches.len(),
            processed: batches
                .iter()
                .filter(|b| b.status == BatchStatus::Processed)
                .count(),
            with_errors: batches
                .iter()
                .filter(|b| b.status == BatchStatus::ProcessedWithError)
                .count(),
            records: batches.iter().map(|b| b.total_records).sum(),
            errors: batches.iter().map(|b| b.error_count).sum(),
        }
    }
}

/// CSV export of the filtered batches
pub fn reports_csv(batches: &[BatchView]) -> Result<String> {
    let rows = batches.iter().map(|b| {
        vec![
            b.batch_id.clone(),
            b.application.clone(),
            b.status.to_string(),
            b.uploaded_by.clone().unwrap_or_default(),
            b.validated_by.clone().unwrap_or_default(),
            b.country.clone().unwrap_or_default(),
            b.department.clone().unwrap_or_default(),
            b.total_records.to_string(),
            b.error_count.to_string(),
            local_datetime(b.uploaded_at.as_ref()),
            local_datetime(b.validated_at.as_ref()),
        ]
    });
    write_csv(&REPORT_CSV_HEADERS, rows, CsvQuoting::Necessary, false)
}

pub fn reports_csv_file_name(today: NaiveDate) -> String {
    format!("batches_report_{}.csv", today.format("%Y-%m-%d"))
}
