//! Section validators

use super::trait_def::Validate;
use crate::api::MAX_PAGE_SIZE;
use crate::config::models::*;
use tracing::debug;
use url::Url;

impl Validate for ApiConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating api configuration");

        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid base_url '{}': {}", self.base_url, e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "base_url must use http or https, got '{}'",
                url.scheme()
            ));
        }

        if !self.login_path.starts_with('/') {
            return Err("login_path must start with '/'".to_string());
        }

        if self.auth_cookie.trim().is_empty() {
            return Err("auth_cookie cannot be empty".to_string());
        }

        if self.timeout == 0 {
            return Err("Request timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating session configuration");

        if self.file.as_os_str().is_empty() {
            return Err("Session file path cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for ReportsConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating reports configuration");

        if self.page_size == 0 {
            return Err("Reports page_size must be greater than 0".to_string());
        }
        if self.fetch_size == 0 {
            return Err("Reports fetch_size must be greater than 0".to_string());
        }
        if self.fetch_size > MAX_PAGE_SIZE as usize {
            return Err(format!(
                "Reports fetch_size must be at most {}",
                MAX_PAGE_SIZE
            ));
        }
        Ok(())
    }
}

impl Validate for DashboardConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating dashboard configuration");

        if self.refresh_interval == 0 {
            return Err("Dashboard refresh_interval must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating logging configuration");

        if self.level.trim().is_empty() {
            return Err("Log level cannot be empty".to_string());
        }
        Ok(())
    }
}
