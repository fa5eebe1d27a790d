//! User-facing notifications
//!
//! Notifications are what the operator sees after an action. They are
//! independent from `tracing` output.

use console::{Term, style};
use parking_lot::Mutex;
use std::fmt;

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

impl fmt::Display for NoticeLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Info => "info",
            Self::Success => "ok",
            Self::Error => "error",
        };
        f.write_str(tag)
    }
}

/// Sink for user-facing messages
pub trait Notifier: Send + Sync {
    fn notify(&self, level: NoticeLevel, message: &str);

    fn info(&self, message: &str) {
        self.notify(NoticeLevel::Info, message);
    }

    fn success(&self, message: &str) {
        self.notify(NoticeLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(NoticeLevel::Error, message);
    }
}

/// Writes notifications to stderr
#[derive(Debug, Default)]
pub struct TerminalNotifier;

/// Styled one-line rendering of a notification
pub fn format_notice(level: NoticeLevel, message: &str) -> String {
    match level {
        NoticeLevel::Info => format!("{} {}", style("i").cyan(), style(message).cyan()),
        NoticeLevel::Success => format!("{} {}", style("✓").green(), style(message).green()),
        NoticeLevel::Error => format!("{} {}", style("✗").red(), style(message).red()),
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        if Term::stderr().write_line(&format_notice(level, message)).is_err() {
            tracing::warn!("[{}] {}", level, message);
        }
    }
}

/// Keeps every notification in memory
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    entries: Mutex<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(NoticeLevel, String)> {
        self.entries.lock().clone()
    }

    pub fn messages(&self, level: NoticeLevel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.entries.lock().push((level, message.to_string()));
    }
}
