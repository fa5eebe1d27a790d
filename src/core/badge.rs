//! Status badges shown next to every batch

use console::Style;
use std::fmt;

/// Colour family of a badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeTone {
    Yellow,
    Green,
    Blue,
    Red,
    Amber,
    Orange,
    /// Stronger red for terminal execution failures
    DarkRed,
    Gray,
}

impl BadgeTone {
    /// Terminal style of the tone
    pub fn style(&self) -> Style {
        let style = Style::new();
        match self {
            Self::Yellow => style.yellow(),
            Self::Green => style.green(),
            Self::Blue => style.blue(),
            Self::Red => style.red(),
            Self::Amber => style.yellow().bright(),
            Self::Orange => style.color256(208),
            Self::DarkRed => style.red().bold(),
            Self::Gray => style.black().bright(),
        }
    }
}

/// Label, icon and tone for a status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: String,
    /// Lucide icon name
    pub icon: &'static str,
    pub tone: BadgeTone,
}

impl StatusBadge {
    pub fn for_status(status: &str) -> Self {
        let (tone, icon) = match status {
            "UPLOADED" => (BadgeTone::Yellow, "clock"),
            "VALIDATED" => (BadgeTone::Green, "check-circle"),
            "PROCESSED" => (BadgeTone::Blue, "check-square"),
            "UPLOADED_FAILED" => (BadgeTone::Red, "alert-triangle"),
            "VALIDATED_FAILED" => (BadgeTone::Red, "x-circle"),
            "PROCESSING" => (BadgeTone::Amber, "refresh-cw"),
            "PROCESSED_WITH_ERROR" => (BadgeTone::Orange, "alert-circle"),
            "PROCESSED_FAILED" => (BadgeTone::DarkRed, "circle-slash"),
            _ => (BadgeTone::Gray, "help-circle"),
        };
        Self {
            label: status.replace('_', " "),
            icon,
            tone,
        }
    }

    /// Coloured label; plain when the terminal has no colour support
    pub fn colored(&self) -> String {
        self.tone.style().apply_to(&self.label).to_string()
    }
}

impl fmt::Display for StatusBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
