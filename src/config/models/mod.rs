//! Configuration data models
//!
//! This module defines all configuration structures used by the console.

#![allow(missing_docs)]

pub mod api;
pub mod logging;
pub mod reports;
pub mod session;

pub use api::*;
pub use logging::*;
pub use reports::*;
pub use session::*;

/// Default backend base URL
pub fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

/// Default login route
pub fn default_login_path() -> String {
    "/login".to_string()
}

/// Default auth cookie name
pub fn default_auth_cookie() -> String {
    "AuthToken".to_string()
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default reports page size
pub fn default_page_size() -> usize {
    20
}

/// Default dashboard refresh interval in seconds
pub fn default_refresh_interval() -> u64 {
    30
}
