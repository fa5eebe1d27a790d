//! Admin dashboard payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Scheduler feature flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureConfig {
    pub config_key: String,
    #[serde(default)]
    pub is_enabled: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, with = "super::time")]
    pub last_updated: Option<DateTime<Utc>>,
}

/// Processing log line written by the T24 processors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingLogEntry {
    /// Batch id; the backend may serialize it as a string or an object id
    #[serde(default)]
    pub batch_id: Option<Value>,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub message: String,
    #[serde(default, with = "super::time")]
    pub timestamp: Option<DateTime<Utc>>,
}

fn default_level() -> String {
    "INFO".to_string()
}

impl ProcessingLogEntry {
    /// Batch id as text, empty when absent
    pub fn batch_id_text(&self) -> String {
        match &self.batch_id {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(Value::Object(o)) => o
                .get("$oid")
                .or_else(|| o.get("id"))
                .and_then(Value::as_str)
                .map(str::to_string)
                .unwrap_or_else(|| Value::Object(o.clone()).to_string()),
            Some(other) => other.to_string(),
        }
    }

    /// Case-insensitive level match; `None` or `ALL` matches everything
    pub fn matches_level(&self, level: Option<&str>) -> bool {
        match level.map(str::trim) {
            None | Some("") => true,
            Some(l) if l.eq_ignore_ascii_case("ALL") => true,
            Some(l) => self.level.eq_ignore_ascii_case(l),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_log_entry_level_filter() {
        let entry: ProcessingLogEntry = serde_json::from_value(json!({
            "batchId": "65f0c0ffee", "level": "ERROR", "message": "T24 timeout",
            "timestamp": "2026-02-01T09:00:00Z"
        }))
        .unwrap();
        assert!(entry.matches_level(Some("error")));
        assert!(entry.matches_level(Some("ALL")));
        assert!(entry.matches_level(None));
        assert!(!entry.matches_level(Some("INFO")));
        assert_eq!(entry.batch_id_text(), "65f0c0ffee");
    }

    #[test]
    fn test_log_entry_object_id() {
        let entry: ProcessingLogEntry = serde_json::from_value(json!({
            "batchId": {"$oid": "abc"}, "message": "started"
        }))
        .unwrap();
        assert_eq!(entry.batch_id_text(), "abc");
        assert_eq!(entry.level, "INFO");
    }

    #[test]
    fn test_feature_config() {
        let feature: FeatureConfig = serde_json::from_value(json!({
            "configKey": "FT_PROCESSOR", "isEnabled": true, "description": "Funds transfer job",
            "lastUpdated": "2026-02-01T09:00:00Z"
        }))
        .unwrap();
        assert!(feature.is_enabled);
        assert!(feature.last_updated.is_some());
    }
}
