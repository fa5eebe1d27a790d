//! Upload endpoints of the inputter role

use super::ConsoleApi;
use super::response::read_json;
use crate::core::models::{FilenameCheck, UploadReceipt};
use crate::utils::error::{ConsoleError, Result, RowValidationError, extract_error_message};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct UploadFailure {
    #[serde(default)]
    details: Option<Vec<RowValidationError>>,
}

impl ConsoleApi {
    /// Whether `filename` was already submitted for `application`
    pub async fn check_filename(&self, application: &str, filename: &str) -> Result<bool> {
        let request = self
            .client()
            .get("/api/inputter/check-filename")?
            .query(&[("applicationName", application), ("filename", filename)]);
        let response = self.client().send(request).await?;
        let check: FilenameCheck = read_json(response).await?;
        debug!("Duplicate check for {}: exists={}", filename, check.exists);
        Ok(check.exists)
    }

    /// Multipart upload of a CSV file
    ///
    /// Row-level rejections come back as [`ConsoleError::Validation`].
    pub async fn upload_batch(
        &self,
        application: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<UploadReceipt> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str("text/csv")?;
        let form = Form::new()
            .part("file", part)
            .text("applicationName", application.to_string());

        let request = self.client().post("/api/inputter/upload")?.multipart(form);
        let response = self.client().send(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if let Ok(UploadFailure {
                details: Some(details),
            }) = serde_json::from_str(&body)
            {
                if !details.is_empty() {
                    return Err(ConsoleError::Validation(details));
                }
            }
            return Err(ConsoleError::api(status.as_u16(), extract_error_message(&body)));
        }

        let receipt: UploadReceipt = serde_json::from_str(&body)?;
        info!(
            "Uploaded {} as batch {} ({} records)",
            filename, receipt.batch_id, receipt.record_count
        );
        Ok(receipt)
    }
}
