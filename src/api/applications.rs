//! Application catalogue endpoints

use super::ConsoleApi;
use super::response::read_json;
use crate::core::models::{Application, ApplicationFields};
use crate::utils::error::Result;

impl ConsoleApi {
    pub async fn list_applications(&self) -> Result<Vec<Application>> {
        let request = self.client().get("/api/applications")?;
        let response = self.client().send(request).await?;
        read_json(response).await
    }

    /// Mandatory and optional fields of one application
    pub async fn application_fields(&self, code: &str) -> Result<ApplicationFields> {
        let request = self
            .client()
            .get(&format!("/api/applications/{}/fields", code))?;
        let response = self.client().send(request).await?;
        read_json(response).await
    }
}
