//! Configuration management for the console
//!
//! Configuration comes from an optional YAML file, then environment
//! overrides (`BATCH_CONSOLE_*`), then command-line flags.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{ConsoleError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Environment variable overriding `api.base_url`
pub const ENV_API_URL: &str = "BATCH_CONSOLE_API_URL";
/// Environment variable overriding `api.timeout`
pub const ENV_TIMEOUT: &str = "BATCH_CONSOLE_TIMEOUT";
/// Environment variable overriding `session.file`
pub const ENV_SESSION_FILE: &str = "BATCH_CONSOLE_SESSION_FILE";
/// Environment variable overriding `logging.level`
pub const ENV_LOG_LEVEL: &str = "BATCH_CONSOLE_LOG_LEVEL";

/// Default config file looked up when no path is given
pub const DEFAULT_CONFIG_PATH: &str = "config/console.yaml";

/// Main configuration struct for the console
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ConsoleError::Config(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_yaml(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)
            .map_err(|e| ConsoleError::Config(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// File (explicit path, or the default path when present) plus env overrides
    pub async fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(p) => Self::from_file(p).await?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::from_file(DEFAULT_CONFIG_PATH).await?
            }
            None => Self::default(),
        };
        config.apply_env_with(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `BATCH_CONSOLE_*` overrides from a variable lookup
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(timeout) = lookup(ENV_TIMEOUT) {
            self.api.timeout = timeout.trim().parse().map_err(|_| {
                ConsoleError::Config(format!("{} must be a number of seconds", ENV_TIMEOUT))
            })?;
        }
        if let Some(file) = lookup(ENV_SESSION_FILE) {
            self.session.file = file.into();
        }
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.logging.level = level;
        }
        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.api
            .validate()
            .map_err(|e| ConsoleError::Config(format!("Api config error: {}", e)))?;
        self.session
            .validate()
            .map_err(|e| ConsoleError::Config(format!("Session config error: {}", e)))?;
        self.reports
            .validate()
            .map_err(|e| ConsoleError::Config(format!("Reports config error: {}", e)))?;
        self.dashboard
            .validate()
            .map_err(|e| ConsoleError::Config(format!("Dashboard config error: {}", e)))?;
        self.logging
            .validate()
            .map_err(|e| ConsoleError::Config(format!("Logging config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| ConsoleError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}
