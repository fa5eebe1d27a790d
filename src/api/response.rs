//! Response decoding shared by every endpoint

use crate::utils::error::{ConsoleError, Result, extract_error_message};
use reqwest::Response;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Turn a non-2xx response into [`ConsoleError::Api`] with the body's message
pub async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!("Request failed with {}: {}", status, body);
    Err(ConsoleError::api(status.as_u16(), extract_error_message(&body)))
}

/// Check the status, then decode the JSON body
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = ensure_success(response).await?;
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Check the status, then return the body as text
pub async fn read_text(response: Response) -> Result<String> {
    let response = ensure_success(response).await?;
    Ok(response.text().await?)
}
