//! Helper functions for creating specific error types

use super::types::ConsoleError;

/// Helper functions for creating specific errors
impl ConsoleError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn auth<S: Into<String>>(message: S) -> Self {
        Self::Auth(message.into())
    }

    pub fn api<S: Into<String>>(status: u16, message: S) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn duplicate_file<S: Into<String>>(filename: S) -> Self {
        Self::DuplicateFile(filename.into())
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn empty_data<S: Into<String>>(message: S) -> Self {
        Self::EmptyData(message.into())
    }

    /// Whether the error ended the session (callers must stop, not notify)
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// HTTP status carried by the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::HttpClient(e) => e.status().map(|s| s.as_u16()),
            Self::SessionExpired => Some(401),
            _ => None,
        }
    }
}
