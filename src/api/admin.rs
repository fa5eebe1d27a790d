//! Admin dashboard endpoints

use super::ConsoleApi;
use super::response::{ensure_success, read_json};
use crate::core::models::FeatureConfig;
use crate::utils::error::Result;
use tracing::info;

impl ConsoleApi {
    pub async fn list_features(&self) -> Result<Vec<FeatureConfig>> {
        let request = self.client().get("/api/admin/features")?;
        let response = self.client().send(request).await?;
        read_json(response).await
    }

    pub async fn toggle_feature(&self, key: &str, enabled: bool) -> Result<()> {
        let request = self
            .client()
            .post(&format!("/api/admin/features/toggle/{}", key))?
            .query(&[("enabled", enabled)]);
        let response = self.client().send(request).await?;
        ensure_success(response).await?;
        info!("Feature {} set to {}", key, enabled);
        Ok(())
    }
}
