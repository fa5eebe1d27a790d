//! Backend API configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the batch backend
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Route the backend redirects to when the session is gone
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Name of the session cookie set by `POST /api/login`
    #[serde(default = "default_auth_cookie")]
    pub auth_cookie: String,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    format!("batch-console/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            login_path: default_login_path(),
            auth_cookie: default_auth_cookie(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiConfig {
    /// Request timeout as a duration
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}
