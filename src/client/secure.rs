//! Authenticated HTTP access to the backend

use super::navigation::{Navigator, Route};
use super::session::SessionStore;
use crate::config::ApiConfig;
use crate::utils::error::{ConsoleError, Result};
use reqwest::header::{COOKIE, HeaderValue};
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{debug, warn};
use url::Url;

/// HTTP client that turns an expired session into a navigation to login
///
/// A 401 or 403, or a response whose final URL is the login page, clears the
/// session, navigates once and yields [`ConsoleError::SessionExpired`]. Once
/// expired, every later guarded call fails the same way without a request.
pub struct SecureClient {
    http: reqwest::Client,
    base_url: String,
    login_path: String,
    auth_cookie: String,
    session: Arc<SessionStore>,
    navigator: Arc<dyn Navigator>,
    expired: AtomicBool,
}

impl SecureClient {
    pub fn new(
        config: &ApiConfig,
        session: Arc<SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Result<Self> {
        Url::parse(&config.base_url)?;
        let http = reqwest::Client::builder()
            .timeout(config.timeout_duration())
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ConsoleError::config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            login_path: config.login_path.clone(),
            auth_cookie: config.auth_cookie.clone(),
            session,
            navigator,
            expired: AtomicBool::new(false),
        })
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub fn navigator(&self) -> &Arc<dyn Navigator> {
        &self.navigator
    }

    pub fn auth_cookie(&self) -> &str {
        &self.auth_cookie
    }

    /// Absolute URL of a backend path such as `/api/batches`
    pub fn url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Request builder carrying the session cookie, if any
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self.url(path)?;
        debug!("{} {}", method, url);
        let mut builder = self.http.request(method, url);
        if let Some(token) = self.session.auth_token() {
            let cookie = format!("{}={}", self.auth_cookie, token);
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                builder = builder.header(COOKIE, value);
            }
        }
        Ok(builder)
    }

    pub fn get(&self, path: &str) -> Result<RequestBuilder> {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> Result<RequestBuilder> {
        self.request(Method::POST, path)
    }

    pub fn put(&self, path: &str) -> Result<RequestBuilder> {
        self.request(Method::PUT, path)
    }

    pub fn delete(&self, path: &str) -> Result<RequestBuilder> {
        self.request(Method::DELETE, path)
    }

    pub fn is_expired(&self) -> bool {
        self.expired.load(Ordering::SeqCst)
    }

    /// Re-arm the guard after a successful login
    pub fn reset(&self) {
        self.expired.store(false, Ordering::SeqCst);
    }

    /// Send through the session guard
    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        if self.is_expired() {
            return Err(ConsoleError::SessionExpired);
        }

        let response = request.send().await?;
        let status = response.status();
        let on_login_page = response.url().path() == self.login_path;

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN || on_login_page {
            self.expire(status).await;
            return Err(ConsoleError::SessionExpired);
        }
        Ok(response)
    }

    /// Send without the guard, for login and logout
    pub async fn send_unguarded(&self, request: RequestBuilder) -> Result<Response> {
        Ok(request.send().await?)
    }

    async fn expire(&self, status: StatusCode) {
        if self.expired.swap(true, Ordering::SeqCst) {
            return;
        }
        warn!("Session rejected by the backend ({}), returning to login", status);
        if let Err(e) = self.session.clear().await {
            warn!("Failed to clear session: {}", e);
        }
        self.navigator.navigate(Route::Login {
            session_expired: true,
        });
    }
}

impl std::fmt::Debug for SecureClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecureClient")
            .field("base_url", &self.base_url)
            .field("login_path", &self.login_path)
            .field("expired", &self.is_expired())
            .finish()
    }
}
