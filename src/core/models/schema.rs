//! Application catalogue and upload schemas

use super::null_as_default;
use serde::{Deserialize, Serialize};

/// Application a batch can be uploaded for (e.g. `FUNDS_TRANSFER`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub label: String,
}

/// One column of an application schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    pub field_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data_type: String,
}

/// Mandatory and optional columns of an application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationFields {
    #[serde(default, deserialize_with = "null_as_default")]
    pub application: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mandatory: Vec<FieldInfo>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub optional: Vec<FieldInfo>,
}

impl ApplicationFields {
    pub fn mandatory_names(&self) -> Vec<&str> {
        self.mandatory.iter().map(|f| f.field_name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.mandatory
            .iter()
            .chain(self.optional.iter())
            .any(|f| f.field_name == name)
    }
}
