//! Logging setup and log-safe rendering of sensitive values

mod init;
mod sanitization;

pub use init::{LogFormat, init_tracing};
pub use sanitization::Sanitization;
