//! Utility modules for the batch console
//!
//! - **error**: crate error type and backend error-body parsing
//! - **logging**: tracing setup and masking of sensitive values
//! - **notify**: user-facing notifications

pub mod error;
pub mod logging;
pub mod notify;

pub use error::{ConsoleError, Result, RowValidationError};
pub use logging::Sanitization;
pub use notify::{NoticeLevel, Notifier, RecordingNotifier, TerminalNotifier};
