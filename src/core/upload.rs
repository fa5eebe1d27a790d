//! Upload flow state and CSV header layout

use crate::core::csv::{ParsedCsv, parse_csv};
use crate::core::models::ApplicationFields;
use crate::utils::error::{ConsoleError, Result};
use std::collections::HashSet;
use std::fmt;

/// Where an upload currently stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum UploadState {
    #[default]
    Idle,
    FileSelected,
    DuplicateCheck,
    Submitting,
    Success { batch_id: String },
    Failed { message: String },
}

impl UploadState {
    pub fn can_submit(&self) -> bool {
        matches!(self, Self::FileSelected | Self::Failed { .. })
    }
}

impl fmt::Display for UploadState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => f.write_str("idle"),
            Self::FileSelected => f.write_str("file selected"),
            Self::DuplicateCheck => f.write_str("checking file name"),
            Self::Submitting => f.write_str("submitting"),
            Self::Success { batch_id } => write!(f, "uploaded as batch {}", batch_id),
            Self::Failed { message } => write!(f, "failed: {}", message),
        }
    }
}

/// A CSV file picked for upload, already parsed for the preview
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub parsed: ParsedCsv,
}

impl SelectedFile {
    /// Accept only `.csv` names (any case) with at least a header line
    pub fn from_bytes(name: &str, bytes: Vec<u8>) -> Result<Self> {
        if !name.to_lowercase().ends_with(".csv") {
            return Err(ConsoleError::invalid_input(
                "Seuls les fichiers CSV sont autorisés.",
            ));
        }
        let text = String::from_utf8_lossy(&bytes);
        let parsed = parse_csv(&text)?;
        Ok(Self {
            name: name.to_string(),
            bytes,
            parsed,
        })
    }
}

/// Columns the operator puts in the CSV header, and the rest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldLayout {
    header: Vec<String>,
    others: Vec<String>,
}

impl FieldLayout {
    /// Mandatory fields form the header, optional ones are left aside
    pub fn from_fields(fields: &ApplicationFields) -> Self {
        Self {
            header: fields.mandatory.iter().map(|f| f.field_name.clone()).collect(),
            others: fields.optional.iter().map(|f| f.field_name.clone()).collect(),
        }
    }

    pub fn header_fields(&self) -> &[String] {
        &self.header
    }

    pub fn other_fields(&self) -> &[String] {
        &self.others
    }

    /// Header line to copy into the CSV
    pub fn header_line(&self) -> String {
        self.header.join(",")
    }

    /// Replace the header with `order`; every name must be a known field, once
    pub fn set_order<S: AsRef<str>>(&mut self, order: &[S]) -> Result<()> {
        let known: HashSet<&str> = self
            .header
            .iter()
            .chain(self.others.iter())
            .map(String::as_str)
            .collect();

        let mut seen = HashSet::new();
        for name in order {
            let name = name.as_ref();
            if !known.contains(name) {
                return Err(ConsoleError::invalid_input(format!("Champ inconnu: {}", name)));
            }
            if !seen.insert(name) {
                return Err(ConsoleError::invalid_input(format!("Champ en double: {}", name)));
            }
        }

        let others = self
            .header
            .iter()
            .chain(self.others.iter())
            .filter(|f| !seen.contains(f.as_str()))
            .cloned()
            .collect();
        self.header = order.iter().map(|s| s.as_ref().to_string()).collect();
        self.others = others;
        Ok(())
    }
}
