//! Pre-upload and post-execution summaries

use crate::core::csv::{CsvQuoting, ParsedCsv, write_csv};
use crate::core::models::{BatchDetail, RowStatus, display_value};
use crate::core::number::{format_fr, format_xof, json_amount, parse_number_prefix};
use crate::utils::error::Result;
use serde_json::Value;
use std::collections::BTreeSet;

/// Application whose rows carry a debit and a credit amount
pub const FUNDS_TRANSFER: &str = "FUNDS_TRANSFER";
/// Application whose uploads are balanced entries
pub const DATA_CAPTURE: &str = "DATA_CAPTURE";

const DEBIT_AMOUNT: &str = "DEBIT.AMOUNT";
const CREDIT_AMOUNT: &str = "CREDIT.AMOUNT";
const BALANCE_TOLERANCE: f64 = 0.01;

/// Debit/credit balance of a DATA_CAPTURE file before upload
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataCaptureSummary {
    /// `AMOUNT_LCY`/`AMOUNT.LCY` or `SIGN` is not in the header
    FieldsMissing,
    Totals {
        total_debit: f64,
        total_credit: f64,
        mismatch: bool,
    },
}

impl DataCaptureSummary {
    pub fn compute(csv: &ParsedCsv) -> Self {
        let amount_idx = csv.find_column(|h| h == "AMOUNT_LCY" || h == "AMOUNT.LCY");
        let sign_idx = csv.find_column(|h| h == "SIGN");
        let (Some(amount_idx), Some(sign_idx)) = (amount_idx, sign_idx) else {
            return Self::FieldsMissing;
        };

        let (mut debit, mut credit) = (0.0, 0.0);
        for row in &csv.rows {
            let raw = row.get(amount_idx).map(String::as_str).unwrap_or("0");
            let amount = parse_number_prefix(&raw.replace(',', "")).unwrap_or(f64::NAN);
            if amount.is_nan() || amount <= 0.0 {
                continue;
            }
            match row.get(sign_idx).map(|s| s.trim().to_uppercase()).as_deref() {
                Some("D") => debit += amount,
                Some("C") => credit += amount,
                _ => {}
            }
        }

        Self::Totals {
            total_debit: debit,
            total_credit: credit,
            mismatch: (debit - credit).abs() > BALANCE_TOLERANCE,
        }
    }

    pub fn render(&self) -> String {
        match self {
            Self::FieldsMissing => {
                "Résumé indisponible : colonnes AMOUNT_LCY/AMOUNT.LCY ou SIGN absentes.".to_string()
            }
            Self::Totals {
                total_debit,
                total_credit,
                mismatch,
            } => {
                let verdict = if *mismatch {
                    "Déséquilibre détecté."
                } else {
                    "Balance équilibrée."
                };
                format!(
                    "Total Débit: {}\nTotal Crédit: {}\n{}",
                    format_fr(*total_debit, 3),
                    format_fr(*total_credit, 3),
                    verdict
                )
            }
        }
    }
}

/// Readable form of a T24 error message
///
/// T24 errors arrive as JSON text; the first `error.errorDetails[].message`
/// wins, then a top-level `message`, then the raw text.
pub fn clean_error_message(raw: &str) -> String {
    match serde_json::from_str::<Value>(raw) {
        Ok(parsed) => t24_error_detail(&parsed)
            .or_else(|| {
                parsed
                    .get("message")
                    .and_then(Value::as_str)
                    .filter(|m| !m.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| raw.to_string()),
        Err(_) => raw.to_string(),
    }
}

fn t24_error_detail(parsed: &Value) -> Option<String> {
    parsed
        .pointer("/error/errorDetails/0/message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// One failed row in the execution journal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorJournalEntry {
    pub line: u64,
    pub reference: Option<String>,
    pub message: String,
}

/// Outcome of a processed batch
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    pub batch_id: String,
    pub application: String,
    pub total_records: u64,
    pub success: usize,
    pub failure: usize,
    /// Debit plus credit volume, only for FUNDS_TRANSFER
    pub financial_total: Option<f64>,
    pub errors: Vec<ErrorJournalEntry>,
}

impl ExecutionSummary {
    pub fn from_detail(detail: &BatchDetail) -> Self {
        let success = detail
            .details
            .iter()
            .filter(|r| r.status == RowStatus::Success)
            .count();

        let errors: Vec<_> = detail
            .details
            .iter()
            .filter(|r| r.status == RowStatus::Failed)
            .map(|r| ErrorJournalEntry {
                line: r.line_number,
                reference: r.t24_reference.clone(),
                message: match r.error_message.as_deref() {
                    Some(m) if !m.is_empty() => clean_error_message(m),
                    _ => "Erreur inconnue".to_string(),
                },
            })
            .collect();

        let financial_total = (detail.application == FUNDS_TRANSFER).then(|| {
            detail
                .details
                .iter()
                .map(|r| {
                    json_amount(r.data.get(DEBIT_AMOUNT)) + json_amount(r.data.get(CREDIT_AMOUNT))
                })
                .sum::<f64>()
        });

        Self {
            batch_id: detail.batch_id.clone(),
            application: detail.application.clone(),
            total_records: detail.total_records,
            success,
            failure: errors.len(),
            financial_total,
            errors,
        }
    }

    pub fn render(&self) -> String {
        let mut out = format!(
            "Batch {} ({})\nTotal: {}  Succès: {}  Échecs: {}\n",
            self.batch_id,
            if self.application.is_empty() {
                "N/A"
            } else {
                self.application.as_str()
            },
            self.total_records,
            self.success,
            self.failure
        );
        if let Some(total) = self.financial_total {
            out.push_str(&format!("Volume Financier: {}\n", format_xof(total)));
        }
        if self.errors.is_empty() {
            out.push_str("Toutes les lignes traitées avec succès. Aucune erreur détectée.\n");
        } else {
            out.push_str("Journal des anomalies:\n");
            for e in &self.errors {
                let line = if e.line == 0 { "?".to_string() } else { e.line.to_string() };
                out.push_str(&format!("  Ligne {}: {}\n", line, e.message));
            }
        }
        out
    }
}

/// Technical columns leading the execution report
pub const EXECUTION_REPORT_HEADERS: [&str; 4] = [
    "Ligne",
    "Statut T24",
    "Reference T24",
    "Message Erreur (Propre)",
];

/// Download name of the execution report
pub fn execution_report_file_name(detail: &BatchDetail) -> String {
    let id = &detail.batch_id;
    let tail_start = id
        .char_indices()
        .rev()
        .nth(7)
        .map(|(i, _)| i)
        .unwrap_or(0);
    format!("Report_{}_{}.csv", detail.application, &id[tail_start..])
}

/// Execution report CSV with a BOM, one line per detail row
pub fn execution_report_csv(detail: &BatchDetail) -> Result<String> {
    let business_fields: Vec<String> = detail
        .details
        .iter()
        .flat_map(|r| r.data.iter())
        .filter(|(_, v)| !v.is_null())
        .map(|(k, _)| k.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let header: Vec<&str> = EXECUTION_REPORT_HEADERS
        .iter()
        .copied()
        .chain(business_fields.iter().map(String::as_str))
        .collect();

    let rows = detail.details.iter().map(|r| {
        let raw_error = r.error_message.clone().unwrap_or_default();
        let error = if r.status == RowStatus::Failed && raw_error.starts_with('{') {
            serde_json::from_str::<Value>(&raw_error)
                .ok()
                .and_then(|v| t24_error_detail(&v))
                .unwrap_or(raw_error)
        } else {
            raw_error
        };

        let mut row = vec![
            r.line_number.to_string(),
            r.status.to_string(),
            r.t24_reference
                .clone()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            error,
        ];
        row.extend(
            business_fields
                .iter()
                .map(|f| r.data.get(f).map(display_value).unwrap_or_default()),
        );
        row
    });

    write_csv(&header, rows, CsvQuoting::NonNumeric, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::csv::parse_csv;
    use crate::core::models::RowDetail;
    use serde_json::json;

    fn row(line: u64, status: RowStatus, data: Value, error: Option<&str>) -> RowDetail {
        RowDetail {
            line_number: line,
            data: data.as_object().cloned().unwrap_or_default(),
            status,
            t24_reference: None,
            error_message: error.map(str::to_string),
        }
    }

    fn detail(application: &str, details: Vec<RowDetail>) -> BatchDetail {
        BatchDetail {
            batch_id: "65f1a2b3c4d5e6f7a8b9c0d1".to_string(),
            application: application.to_string(),
            original_filename: Some("ft.csv".to_string()),
            status: crate::core::models::BatchStatus::Processed,
            uploaded_at: None,
            total_records: details.len() as u64,
            details,
        }
    }

    #[test]
    fn test_data_capture_balanced() {
        let csv = parse_csv("AMOUNT.LCY,SIGN\n\"1,000.50\",D\n1000.50,c\n-5,D\nabc,C").unwrap();
        let summary = DataCaptureSummary::compute(&csv);
        assert_eq!(
            summary,
            DataCaptureSummary::Totals {
                total_debit: 1000.5,
                total_credit: 1000.5,
                mismatch: false
            }
        );
    }

    #[test]
    fn test_data_capture_mismatch_and_missing_fields() {
        let csv = parse_csv("AMOUNT_LCY,SIGN\n10,D\n9.98,C").unwrap();
        assert!(matches!(
            DataCaptureSummary::compute(&csv),
            DataCaptureSummary::Totals { mismatch: true, .. }
        ));

        let csv = parse_csv("AMOUNT,SIGN\n10,D").unwrap();
        assert_eq!(DataCaptureSummary::compute(&csv), DataCaptureSummary::FieldsMissing);
    }

    #[test]
    fn test_clean_error_message() {
        let t24 = r#"{"error":{"errorDetails":[{"message":"ACCOUNT INACTIVE"}]}}"#;
        assert_eq!(clean_error_message(t24), "ACCOUNT INACTIVE");
        assert_eq!(clean_error_message(r#"{"message":"Timeout"}"#), "Timeout");
        assert_eq!(clean_error_message("plain failure"), "plain failure");
        assert_eq!(clean_error_message(r#"{"other":1}"#), r#"{"other":1}"#);
    }

    #[test]
    fn test_financial_total_sums_debit_and_credit() {
        let d = detail(
            FUNDS_TRANSFER,
            vec![row(2, RowStatus::Success, json!({"DEBIT.AMOUNT": "100", "CREDIT.AMOUNT": "50"}), None)],
        );
        let summary = ExecutionSummary::from_detail(&d);
        assert_eq!(summary.financial_total, Some(150.0));
        assert_eq!(summary.success, 1);
        assert_eq!(summary.failure, 0);
    }

    #[test]
    fn test_financial_total_adds_across_records() {
        let d = detail(
            FUNDS_TRANSFER,
            vec![
                row(2, RowStatus::Success, json!({"DEBIT.AMOUNT": "100"}), None),
                row(3, RowStatus::Success, json!({"CREDIT.AMOUNT": "50"}), None),
            ],
        );
        let summary = ExecutionSummary::from_detail(&d);
        assert_eq!(summary.financial_total, Some(150.0));
        assert_eq!(summary.success, 2);
    }

    #[test]
    fn test_financial_total_only_for_funds_transfer() {
        let d = detail(
            DATA_CAPTURE,
            vec![row(2, RowStatus::Success, json!({"DEBIT.AMOUNT": "100"}), None)],
        );
        assert_eq!(ExecutionSummary::from_detail(&d).financial_total, None);
    }

    #[test]
    fn test_unparsable_amounts_count_zero() {
        let d = detail(
            FUNDS_TRANSFER,
            vec![
                row(2, RowStatus::Success, json!({"DEBIT.AMOUNT": "abc", "CREDIT.AMOUNT": 25}), None),
                row(3, RowStatus::Failed, json!({}), Some("boom")),
            ],
        );
        let summary = ExecutionSummary::from_detail(&d);
        assert_eq!(summary.financial_total, Some(25.0));
        assert_eq!(summary.failure, 1);
        assert_eq!(summary.errors[0].message, "boom");
        assert!(summary.render().contains("Ligne 3: boom"));
    }

    #[test]
    fn test_execution_report_csv() {
        let mut ok = row(2, RowStatus::Success, json!({"B": "x,y", "A": 1, "C": null}), None);
        ok.t24_reference = Some("FT26001".to_string());
        let failed = row(
            3,
            RowStatus::Failed,
            json!({"A": 2}),
            Some(r#"{"error":{"errorDetails":[{"message":"NO FUNDS"}]}}"#),
        );
        let d = detail(FUNDS_TRANSFER, vec![ok, failed]);

        let csv = execution_report_csv(&d).unwrap();
        assert!(csv.starts_with('\u{feff}'));

        let parsed = parse_csv(&csv).unwrap();
        assert_eq!(
            parsed.header,
            vec!["Ligne", "Statut T24", "Reference T24", "Message Erreur (Propre)", "A", "B"]
        );
        assert_eq!(parsed.rows[0], vec!["2", "SUCCESS", "FT26001", "", "1", "x,y"]);
        assert_eq!(parsed.rows[1], vec!["3", "FAILED", "N/A", "NO FUNDS", "2", ""]);
    }

    #[test]
    fn test_execution_report_file_name() {
        let d = detail(FUNDS_TRANSFER, vec![]);
        assert_eq!(execution_report_file_name(&d), "Report_FUNDS_TRANSFER_a8b9c0d1.csv");
    }
}
