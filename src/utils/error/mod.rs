//! Error handling for the console
//!
//! This module defines the crate error type and the helpers that turn
//! backend error bodies into a single human-readable message.

mod body;
mod helpers;
mod types;

pub use body::{ErrorBody, GENERIC_ERROR_MESSAGE, extract_error_message};
pub use types::{ConsoleError, Result, RowValidationError};
