//! `/api/batches` endpoints

use super::ConsoleApi;
use super::response::{ensure_success, read_json};
use crate::core::models::{
    BatchDetail, BatchListing, BatchStatus, BatchView, ProcessingLogEntry, RecentBatch,
    StatusCounts,
};
use crate::utils::error::Result;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, info};

/// Largest page the backend returns
pub const MAX_PAGE_SIZE: u32 = 50;

/// Query string of `GET /api/batches`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchQuery {
    pub application: Option<String>,
    pub statuses: Vec<BatchStatus>,
    pub uploaded_by: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub page: Option<u32>,
    pub size: Option<u32>,
}

impl BatchQuery {
    pub fn with_statuses(statuses: &[BatchStatus]) -> Self {
        Self {
            statuses: statuses.to_vec(),
            ..Self::default()
        }
    }

    pub fn uploaded_by(mut self, username: Option<String>) -> Self {
        self.uploaded_by = username;
        self
    }

    pub fn between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    pub fn page(mut self, page: u32, size: u32) -> Self {
        self.page = Some(page);
        self.size = Some(size);
        self
    }

    /// Key/value pairs; statuses repeat the `status` key
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(app) = &self.application {
            pairs.push(("application", app.clone()));
        }
        for status in &self.statuses {
            pairs.push(("status", status.to_string()));
        }
        if let Some(user) = &self.uploaded_by {
            pairs.push(("uploadedById", user.clone()));
        }
        if let Some(from) = self.from {
            pairs.push(("from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.to {
            pairs.push(("to", to.format("%Y-%m-%d").to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(size) = self.size {
            pairs.push(("size", size.to_string()));
        }
        pairs
    }
}

#[derive(Debug, Deserialize)]
struct ValidationReply {
    #[serde(default)]
    message: Option<String>,
}

impl ConsoleApi {
    /// One listing page, envelope or bare array
    pub async fn list_batches(&self, query: &BatchQuery) -> Result<BatchListing> {
        let request = self.client().get("/api/batches")?.query(&query.to_pairs());
        let response = self.client().send(request).await?;
        read_json(response).await
    }

    /// Every page of a listing
    ///
    /// Pages are requested at the query's size, capped at [`MAX_PAGE_SIZE`].
    pub async fn list_all_batches(&self, query: &BatchQuery) -> Result<Vec<BatchView>> {
        let size = query.size.unwrap_or(MAX_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
        let mut rows = Vec::new();
        let mut page = 0;
        loop {
            let listing = self
                .list_batches(&query.clone().page(page, size))
                .await?;
            let total_pages = listing.total_pages();
            let batch = listing.into_rows();
            let fetched = batch.len();
            rows.extend(batch);
            page += 1;
            if fetched == 0 || u64::from(page) >= total_pages {
                break;
            }
        }
        debug!("Fetched {} batches over {} page(s)", rows.len(), page);
        Ok(rows)
    }

    pub async fn batch_detail(&self, batch_id: &str) -> Result<BatchDetail> {
        let request = self.client().get(&format!("/api/batches/{}", batch_id))?;
        let response = self.client().send(request).await?;
        read_json(response).await
    }

    pub async fn delete_batch(&self, batch_id: &str) -> Result<()> {
        let request = self.client().delete(&format!("/api/batches/{}", batch_id))?;
        let response = self.client().send(request).await?;
        ensure_success(response).await?;
        info!("Batch {} deleted", batch_id);
        Ok(())
    }

    /// Mark an uploaded batch as validated; returns the backend's message
    pub async fn validate_batch(&self, batch_id: &str) -> Result<String> {
        let request = self
            .client()
            .put(&format!("/api/batches/{}", batch_id))?
            .json(&json!({ "status": BatchStatus::Validated.as_str() }));
        let response = self.client().send(request).await?;
        let response = ensure_success(response).await?;
        let text = response.text().await?;
        let message = serde_json::from_str::<ValidationReply>(&text)
            .ok()
            .and_then(|r| r.message)
            .unwrap_or_else(|| "Lot validé avec succès".to_string());
        info!("Batch {} validated", batch_id);
        Ok(message)
    }

    pub async fn status_counts(&self) -> Result<StatusCounts> {
        let request = self.client().get("/api/batches/counts")?;
        let response = self.client().send(request).await?;
        read_json(response).await
    }

    pub async fn recent_batches(&self) -> Result<Vec<RecentBatch>> {
        let request = self.client().get("/api/batches/recent-batches")?;
        let response = self.client().send(request).await?;
        read_json(response).await
    }

    /// Processing logs, optionally of one batch
    pub async fn processing_logs(&self, batch_id: Option<&str>) -> Result<Vec<ProcessingLogEntry>> {
        let mut request = self.client().get("/api/batches/processing-logs")?;
        if let Some(id) = batch_id.filter(|id| !id.is_empty()) {
            request = request.query(&[("batchId", id)]);
        }
        let response = self.client().send(request).await?;
        read_json(response).await
    }
}
