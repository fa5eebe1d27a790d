//! Error types for the console

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for the console
pub type Result<T> = std::result::Result<T, ConsoleError>;

/// One row-level failure reported by the upload endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowValidationError {
    /// CSV line number (header is line 1)
    #[serde(default)]
    pub line: Option<u64>,
    /// Offending field, when the backend knows it
    #[serde(default)]
    pub field: Option<String>,
    /// Backend message
    #[serde(default)]
    pub message: String,
}

/// Main error type for the console
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid URL in configuration or request building
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The backend rejected the session; the console navigated to login
    #[error("Session expired, please log in again")]
    SessionExpired,

    /// Login rejected or malformed login response
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Non-2xx backend response
    #[error("{message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message extracted from the response body
        message: String,
    },

    /// Row-level validation failures returned by the upload endpoint
    #[error("Validation failed with {} error(s)", .0.len())]
    Validation(Vec<RowValidationError>),

    /// A file with the same name was already submitted for the application
    #[error("The file \"{0}\" has already been submitted")]
    DuplicateFile(String),

    /// Local input validation errors
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Nothing to parse, render or export
    #[error("No data: {0}")]
    EmptyData(String),

    /// The user declined a confirmation prompt
    #[error("Action cancelled")]
    Cancelled,

    /// The terminal prompt could not be shown or read
    #[error("Prompt error: {0}")]
    Prompt(String),
}
