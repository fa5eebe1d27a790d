//! Upload endpoint payloads

use serde::{Deserialize, Serialize};

/// Successful upload acknowledgement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadReceipt {
    pub batch_id: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub record_count: u64,
}

/// Answer of the duplicate file-name pre-check
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct FilenameCheck {
    #[serde(default)]
    pub exists: bool,
}
