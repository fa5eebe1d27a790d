//! Typed client for the batch backend REST API
//!
//! Every endpoint the console uses is one async method on [`ConsoleApi`].
//! Responses are decoded into the types of [`crate::core::models`] here, so
//! pages never see raw JSON.

mod admin;
mod applications;
mod auth;
mod batches;
mod inputter;
mod reference;
mod response;


pub use batches::{BatchQuery, MAX_PAGE_SIZE};
pub use response::{ensure_success, read_json, read_text};

use crate::client::{Navigator, SecureClient, SessionStore};
use crate::config::ApiConfig;
use crate::utils::error::Result;
use std::sync::Arc;

/// Backend API bound to one session
#[derive(Debug, Clone)]
pub struct ConsoleApi {
    client: Arc<SecureClient>,
}

impl ConsoleApi {
    pub fn new(
        config: &ApiConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        Ok(Self {
            client: Arc::new(SecureClient::new(config, session, navigator)?),
        })
    }

    pub fn from_client(client: Arc<SecureClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &SecureClient {
        &self.client
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        self.client.session()
    }
}
