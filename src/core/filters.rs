//! Report filters and country display helpers

use crate::core::models::{BatchStatus, BatchView};
use std::collections::BTreeSet;

/// Equality filters of the reports page; `None` means no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilters {
    pub country: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
    pub inputter: Option<String>,
    pub validator: Option<String>,
}

/// Which filter a chip belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Country,
    Department,
    Status,
    Inputter,
    Validator,
}

/// Label and value of an active filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterChip {
    pub key: FilterKey,
    pub label: &'static str,
    pub value: String,
}

fn constraint(filter: &Option<String>) -> Option<&str> {
    filter.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn satisfies(filter: &Option<String>, value: Option<&str>) -> bool {
    match constraint(filter) {
        None => true,
        Some(wanted) => value == Some(wanted),
    }
}

impl ReportFilters {
    pub fn matches(&self, batch: &BatchView) -> bool {
        satisfies(&self.country, batch.country.as_deref())
            && satisfies(&self.department, batch.department.as_deref())
            && satisfies(&self.status, Some(batch.status.as_str()))
            && satisfies(&self.inputter, batch.uploaded_by.as_deref())
            && satisfies(&self.validator, batch.validated_by.as_deref())
    }

    pub fn apply(&self, batches: &[BatchView]) -> Vec<BatchView> {
        batches.iter().filter(|b| self.matches(b)).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.chips().is_empty()
    }

    pub fn clear(&mut self, key: FilterKey) {
        match key {
            FilterKey::Country => self.country = None,
            FilterKey::Department => self.department = None,
            FilterKey::Status => self.status = None,
            FilterKey::Inputter => self.inputter = None,
            FilterKey::Validator => self.validator = None,
        }
    }

    /// Active filters as chips, country shown by name
    pub fn chips(&self) -> Vec<FilterChip> {
        let mut chips = Vec::new();
        let mut push = |key, label, value: Option<String>| {
            if let Some(value) = value {
                chips.push(FilterChip { key, label, value });
            }
        };
        push(
            FilterKey::Country,
            "Pays",
            constraint(&self.country).map(country_name),
        );
        push(
            FilterKey::Department,
            "Département",
            constraint(&self.department).map(str::to_string),
        );
        push(
            FilterKey::Status,
            "Statut",
            constraint(&self.status).map(str::to_string),
        );
        push(
            FilterKey::Inputter,
            "Inputter",
            constraint(&self.inputter).map(str::to_string),
        );
        push(
            FilterKey::Validator,
            "Validateur",
            constraint(&self.validator).map(str::to_string),
        );
        chips
    }

    /// `Pays: SN | Statut: PROCESSED`, raw values as printed on the PDF
    pub fn summary_parts(&self) -> Vec<String> {
        [
            ("Pays", &self.country),
            ("Département", &self.department),
            ("Statut", &self.status),
            ("Inputter", &self.inputter),
            ("Validateur", &self.validator),
        ]
        .into_iter()
        .filter_map(|(label, f)| constraint(f).map(|v| format!("{}: {}", label, v)))
        .collect()
    }
}

/// Statuses kept on the reports page
pub fn is_reportable(status: &BatchStatus) -> bool {
    matches!(status, BatchStatus::Processed | BatchStatus::ProcessedWithError)
}

/// Distinct, sorted, non-empty inputters and validators
pub fn filter_options(batches: &[BatchView]) -> (Vec<String>, Vec<String>) {
    let distinct = |f: fn(&BatchView) -> Option<&String>| -> Vec<String> {
        batches
            .iter()
            .filter_map(f)
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    };
    (
        distinct(|b| b.uploaded_by.as_ref()),
        distinct(|b| b.validated_by.as_ref()),
    )
}

const COUNTRY_NAMES: &[(&str, &str)] = &[
    ("BF", "Burkina Faso"),
    ("BJ", "Bénin"),
    ("CD", "Congo-Kinshasa"),
    ("CG", "Congo-Brazzaville"),
    ("CI", "Côte d’Ivoire"),
    ("CM", "Cameroun"),
    ("DE", "Allemagne"),
    ("ES", "Espagne"),
    ("FR", "France"),
    ("GA", "Gabon"),
    ("GB", "Royaume-Uni"),
    ("GH", "Ghana"),
    ("GN", "Guinée"),
    ("GW", "Guinée-Bissau"),
    ("LR", "Liberia"),
    ("MA", "Maroc"),
    ("MG", "Madagascar"),
    ("ML", "Mali"),
    ("MR", "Mauritanie"),
    ("NE", "Niger"),
    ("NG", "Nigeria"),
    ("SL", "Sierra Leone"),
    ("SN", "Sénégal"),
    ("TD", "Tchad"),
    ("TG", "Togo"),
    ("TN", "Tunisie"),
    ("US", "États-Unis"),
];

/// French name of an ISO 3166-1 alpha-2 code, the code itself when unknown
pub fn country_name(code: &str) -> String {
    let upper = code.trim().to_uppercase();
    COUNTRY_NAMES
        .iter()
        .find(|(c, _)| *c == upper)
        .map(|(_, name)| name.to_string())
        .unwrap_or(upper)
}

/// Regional-indicator flag of a two-letter code, a globe otherwise
pub fn country_flag(code: &str) -> String {
    let upper = code.trim().to_uppercase();
    if upper.len() != 2 || !upper.chars().all(|c| c.is_ascii_uppercase()) {
        return "🌐".to_string();
    }
    upper
        .chars()
        .filter_map(|c| char::from_u32(c as u32 + 127_397))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(id: &str, status: BatchStatus, country: &str, by: &str, validator: Option<&str>) -> BatchView {
        BatchView {
            batch_id: id.to_string(),
            application: "FUNDS_TRANSFER".to_string(),
            original_filename: None,
            status,
            uploaded_at: None,
            total_records: 10,
            error_count: 0,
            uploaded_by: Some(by.to_string()),
            country: Some(country.to_string()),
            department: Some("10".to_string()),
            validated_by: validator.map(str::to_string),
            validated_at: None,
        }
    }

    #[test]
    fn test_empty_filters_match_everything() {
        let b = batch("1", BatchStatus::Processed, "SN", "ana", None);
        assert!(ReportFilters::default().matches(&b));
        let blank = ReportFilters {
            country: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(blank.matches(&b));
        assert!(blank.is_empty());
    }

    #[test]
    fn test_equality_filters() {
        let batches = vec![
            batch("1", BatchStatus::Processed, "SN", "ana", Some("val")),
            batch("2", BatchStatus::ProcessedWithError, "CI", "bob", Some("val")),
            batch("3", BatchStatus::Processed, "SN", "bob", None),
        ];
        let f = ReportFilters {
            country: Some("SN".to_string()),
            inputter: Some("bob".to_string()),
            ..Default::default()
        };
        let kept = f.apply(&batches);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].batch_id, "3");

        let f = ReportFilters {
            validator: Some("val".to_string()),
            status: Some("PROCESSED_WITH_ERROR".to_string()),
            ..Default::default()
        };
        assert_eq!(f.apply(&batches)[0].batch_id, "2");
    }

    #[test]
    fn test_chips_and_clear() {
        let mut f = ReportFilters {
            country: Some("SN".to_string()),
            status: Some("PROCESSED".to_string()),
            ..Default::default()
        };
        let chips = f.chips();
        assert_eq!(chips.len(), 2);
        assert_eq!(chips[0].label, "Pays");
        assert_eq!(chips[0].value, "Sénégal");
        assert_eq!(f.summary_parts(), vec!["Pays: SN", "Statut: PROCESSED"]);

        f.clear(FilterKey::Country);
        assert_eq!(f.chips().len(), 1);
    }

    #[test]
    fn test_filter_options_are_distinct_and_sorted() {
        let batches = vec![
            batch("1", BatchStatus::Processed, "SN", "zoe", Some("val")),
            batch("2", BatchStatus::Processed, "SN", "ana", None),
            batch("3", BatchStatus::Processed, "SN", "zoe", Some("")),
        ];
        let (inputters, validators) = filter_options(&batches);
        assert_eq!(inputters, vec!["ana", "zoe"]);
        assert_eq!(validators, vec!["val"]);
    }

    #[test]
    fn test_reportable_statuses() {
        assert!(is_reportable(&BatchStatus::Processed));
        assert!(is_reportable(&BatchStatus::ProcessedWithError));
        assert!(!is_reportable(&BatchStatus::ProcessedFailed));
    }

    #[test]
    fn test_country_helpers() {
        assert_eq!(country_flag("sn"), "🇸🇳");
        assert_eq!(country_flag("x1"), "🌐");
        assert_eq!(country_name("ci"), "Côte d’Ivoire");
        assert_eq!(country_name("ZZ"), "ZZ");
    }
}
