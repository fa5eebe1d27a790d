//! Batch and row lifecycle statuses

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a batch
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BatchStatus {
    Uploaded,
    Validated,
    Processing,
    Processed,
    ProcessedWithError,
    UploadedFailed,
    ValidatedFailed,
    ProcessedFailed,
    /// Any status this console does not know about
    Other(String),
}

impl BatchStatus {
    /// Every known status, in lifecycle order
    pub const ALL: [BatchStatus; 8] = [
        BatchStatus::Uploaded,
        BatchStatus::Validated,
        BatchStatus::Processing,
        BatchStatus::Processed,
        BatchStatus::ProcessedWithError,
        BatchStatus::UploadedFailed,
        BatchStatus::ValidatedFailed,
        BatchStatus::ProcessedFailed,
    ];

    /// Wire name of the status
    pub fn as_str(&self) -> &str {
        match self {
            Self::Uploaded => "UPLOADED",
            Self::Validated => "VALIDATED",
            Self::Processing => "PROCESSING",
            Self::Processed => "PROCESSED",
            Self::ProcessedWithError => "PROCESSED_WITH_ERROR",
            Self::UploadedFailed => "UPLOADED_FAILED",
            Self::ValidatedFailed => "VALIDATED_FAILED",
            Self::ProcessedFailed => "PROCESSED_FAILED",
            Self::Other(s) => s,
        }
    }

    /// Statuses the backend allows to be deleted
    pub fn is_deletable(&self) -> bool {
        matches!(
            self,
            Self::Uploaded | Self::UploadedFailed | Self::ValidatedFailed
        )
    }

    /// Whether T24 execution has started or finished for this batch
    pub fn has_execution_results(&self) -> bool {
        matches!(
            self,
            Self::Processing | Self::Processed | Self::ProcessedWithError | Self::ProcessedFailed
        )
    }
}

impl From<&str> for BatchStatus {
    fn from(s: &str) -> Self {
        match s.trim() {
            "UPLOADED" => Self::Uploaded,
            "VALIDATED" => Self::Validated,
            "PROCESSING" => Self::Processing,
            "PROCESSED" => Self::Processed,
            "PROCESSED_WITH_ERROR" => Self::ProcessedWithError,
            "UPLOADED_FAILED" => Self::UploadedFailed,
            "VALIDATED_FAILED" => Self::ValidatedFailed,
            "PROCESSED_FAILED" => Self::ProcessedFailed,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for BatchStatus {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<BatchStatus> for String {
    fn from(status: BatchStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// T24 execution status of one detail row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RowStatus {
    Success,
    Failed,
    /// Not executed yet (`EN_ATTENTE`) or unknown
    #[default]
    Pending,
    Other(String),
}

impl RowStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "SUCCESS",
            Self::Failed => "FAILED",
            Self::Pending => "EN_ATTENTE",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for RowStatus {
    fn from(s: String) -> Self {
        match s.trim() {
            "SUCCESS" => Self::Success,
            "FAILED" => Self::Failed,
            "" | "EN_ATTENTE" => Self::Pending,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<RowStatus> for String {
    fn from(status: RowStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
