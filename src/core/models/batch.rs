//! Batch listing and detail payloads

use super::null_as_default;
use super::status::{BatchStatus, RowStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One row of a batch listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchView {
    pub batch_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub application: String,
    #[serde(default)]
    pub original_filename: Option<String>,
    pub status: BatchStatus,
    #[serde(default, with = "super::time")]
    pub uploaded_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_records: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub error_count: u64,
    #[serde(default)]
    pub uploaded_by: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub validated_by: Option<String>,
    #[serde(default, with = "super::time")]
    pub validated_at: Option<DateTime<Utc>>,
}

/// Paginated listing envelope
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPage {
    #[serde(default)]
    pub content: Vec<BatchView>,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub total_pages: u64,
}

/// Either the paginated envelope or a bare array
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BatchListing {
    Page(BatchPage),
    Rows(Vec<BatchView>),
}

impl BatchListing {
    /// Total page count; a bare array is a single page
    pub fn total_pages(&self) -> u64 {
        match self {
            Self::Page(p) => p.total_pages,
            Self::Rows(_) => 1,
        }
    }

    pub fn into_rows(self) -> Vec<BatchView> {
        match self {
            Self::Page(p) => p.content,
            Self::Rows(rows) => rows,
        }
    }
}

/// One executed (or pending) row of a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowDetail {
    #[serde(default)]
    pub line_number: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: Map<String, Value>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: RowStatus,
    #[serde(default)]
    pub t24_reference: Option<String>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// Full detail of one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDetail {
    pub batch_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub application: String,
    #[serde(default)]
    pub original_filename: Option<String>,
    pub status: BatchStatus,
    #[serde(default, with = "super::time")]
    pub uploaded_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_records: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: Vec<RowDetail>,
}

/// Entry of the admin "recent batches" panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentBatch {
    pub id: String,
    pub status: BatchStatus,
    #[serde(default, with = "super::time")]
    pub uploaded_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub filename: Option<String>,
}

/// Per-status batch counts as returned by `/api/batches/counts`
pub type StatusCounts = BTreeMap<String, u64>;

/// Render a JSON cell value as text
///
/// Strings are shown raw, `null` is empty, everything else uses its JSON text.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Whether a cell counts as filled (non-null and not an empty string)
pub fn is_filled(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}
