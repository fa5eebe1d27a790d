//! Extraction of human-readable messages from backend error bodies

use serde::Deserialize;
use serde_json::Value;

/// Message shown when the body carries nothing usable
pub const GENERIC_ERROR_MESSAGE: &str = "Une erreur inattendue est survenue";

/// Loose shape of a backend error body
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub violations: Option<Vec<Value>>,
}

impl ErrorBody {
    /// First present of `message`, `error`, `title`, `violations`
    pub fn message(&self) -> Option<String> {
        if let Some(m) = non_empty(self.message.as_deref()) {
            return Some(m);
        }
        match &self.error {
            Some(Value::String(s)) if !s.trim().is_empty() => return Some(s.clone()),
            Some(Value::Object(obj)) => {
                if let Some(m) = non_empty(obj.get("message").and_then(Value::as_str)) {
                    return Some(m);
                }
            }
            _ => {}
        }
        if let Some(t) = non_empty(self.title.as_deref()) {
            return Some(t);
        }
        let joined = self
            .violations
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s.clone()),
                Value::Object(o) => o.get("message").and_then(Value::as_str).map(str::to_string),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("; ");
        non_empty(Some(&joined))
    }
}

fn non_empty(s: Option<&str>) -> Option<String> {
    s.map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// Longest plain-text body shown verbatim
const MAX_PLAIN_TEXT: usize = 300;

/// Human-readable message for a non-2xx response body
///
/// Short plain-text bodies are shown as they are. HTML, empty and
/// unusable bodies fall back to a generic message.
pub fn extract_error_message(body: &str) -> String {
    let trimmed = body.trim();
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(trimmed) {
        return parsed
            .message()
            .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string());
    }
    let looks_structured =
        trimmed.starts_with('<') || trimmed.starts_with('{') || trimmed.starts_with('[');
    if trimmed.is_empty() || looks_structured || trimmed.chars().count() > MAX_PLAIN_TEXT {
        return GENERIC_ERROR_MESSAGE.to_string();
    }
    trimmed.to_string()
}
