//! Reports and dashboard configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Reports page configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportsConfig {
    /// Rows per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Days covered by the report when no start date is given
    #[serde(default = "default_window_days")]
    pub default_window_days: u32,
    /// Page size requested when walking the batch listing
    #[serde(default = "default_fetch_size")]
    pub fetch_size: usize,
}

fn default_window_days() -> u32 {
    30
}

fn default_fetch_size() -> usize {
    50
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            default_window_days: default_window_days(),
            fetch_size: default_fetch_size(),
        }
    }
}

/// Admin dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Auto refresh interval in seconds
    #[serde(default = "default_refresh_interval")]
    pub refresh_interval: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval: default_refresh_interval(),
        }
    }
}

impl DashboardConfig {
    pub fn refresh_duration(&self) -> Duration {
        Duration::from_secs(self.refresh_interval)
    }
}
