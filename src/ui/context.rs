//! What every page needs: the API, the notifier and the settings

use crate::api::ConsoleApi;
use crate::config::Config;
use crate::utils::error::{ConsoleError, Result};
use crate::utils::notify::Notifier;
use std::sync::Arc;
use tracing::warn;

/// Shared page dependencies
#[derive(Clone)]
pub struct Console {
    pub api: ConsoleApi,
    pub notifier: Arc<dyn Notifier>,
    pub config: Arc<Config>,
}

impl Console {
    pub fn new(api: ConsoleApi, notifier: Arc<dyn Notifier>, config: Arc<Config>) -> Self {
        Self {
            api,
            notifier,
            config,
        }
    }

    /// Show a failed action as one error notification
    ///
    /// Session expiry is not shown: the navigation to login already
    /// happened.
    pub fn report<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            match e {
                ConsoleError::SessionExpired => {}
                other => {
                    warn!("Action failed: {}", other);
                    self.notifier.error(&other.to_string());
                }
            }
        }
        result
    }
}

impl std::fmt::Debug for Console {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Console").field("api", &self.api).finish()
    }
}
