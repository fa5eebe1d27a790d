//! # batch-console
//!
//! Terminal console for the batch upload backend of a T24 core banking
//! integration.
//!
//! ## Features
//!
//! - **Upload**: pick an application, preview a CSV, check the file name is
//!   new, upload it and read back row validation errors
//! - **Batch lists**: the inputter's uploads, the validation queue and the
//!   validated history, with per-status counters
//! - **Execution summaries**: success/failure counts, financial totals and a
//!   CSV execution report
//! - **Reports**: processed batches over a date window with filters, paging,
//!   and CSV or PDF export
//! - **Settings and admin**: countries, departments, users, feature flags and
//!   processing logs
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use batch_console::{Config, cli::build_console};
//! use batch_console::ui::{BatchListPage, BatchListRole, View};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(None).await?;
//!     let console = build_console(config).await?;
//!
//!     let mut page = BatchListPage::new(BatchListRole::Validator);
//!     page.load(&console).await?;
//!     println!("{}", page.render());
//!     Ok(())
//! }
//! ```
//!
//! Every request goes through [`client::SecureClient`]: a 401 or 403, or a
//! redirect to the login page, clears the stored session and navigates back
//! to login exactly once.

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod api;
pub mod cli;
pub mod client;
pub mod config;
pub mod core;
pub mod ui;
pub mod utils;

// Re-export main types
pub use api::ConsoleApi;
pub use client::{Navigator, Route, SecureClient, SessionStore};
pub use config::Config;
pub use ui::Console;
pub use utils::error::{ConsoleError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Console build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            version: VERSION,
            build_time: option_env!("BUILD_TIME").unwrap_or("unknown"),
            git_hash: option_env!("GIT_HASH").unwrap_or("unknown"),
            rust_version: option_env!("RUST_VERSION").unwrap_or("unknown"),
        }
    }
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo::default()
}
