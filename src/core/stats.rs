//! Counter cards fed by `/api/batches/counts`

use crate::core::models::{BatchStatus, StatusCounts};
use std::collections::BTreeMap;

/// Maps statuses onto named counters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsMapping {
    entries: Vec<(BatchStatus, &'static str)>,
}

/// Counter name for batches waiting for validation
pub const UPLOADED_COUNT: &str = "uploadedCount";
/// Counter name for validated (and later) batches
pub const VALIDATED_COUNT: &str = "validatedCount";
/// Counter name for batches that reached T24
pub const PROCESSED_COUNT: &str = "processedCount";

impl StatsMapping {
    pub fn new(entries: Vec<(BatchStatus, &'static str)>) -> Self {
        Self { entries }
    }

    /// Upload page: pending vs. everything past validation
    pub fn inputter() -> Self {
        Self::new(vec![
            (BatchStatus::Uploaded, UPLOADED_COUNT),
            (BatchStatus::Validated, VALIDATED_COUNT),
            (BatchStatus::Processing, VALIDATED_COUNT),
            (BatchStatus::Processed, VALIDATED_COUNT),
            (BatchStatus::ProcessedWithError, VALIDATED_COUNT),
            (BatchStatus::ProcessedFailed, VALIDATED_COUNT),
        ])
    }

    /// Validation and validated-history pages
    pub fn validator() -> Self {
        Self::new(vec![
            (BatchStatus::Validated, VALIDATED_COUNT),
            (BatchStatus::Processing, PROCESSED_COUNT),
            (BatchStatus::Processed, PROCESSED_COUNT),
            (BatchStatus::ProcessedWithError, PROCESSED_COUNT),
            (BatchStatus::ProcessedFailed, PROCESSED_COUNT),
        ])
    }

    /// Validated-history page; same counters as the validation page
    pub fn validated() -> Self {
        Self::validator()
    }

    /// Counter names in first-seen order
    pub fn counters(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for (_, name) in &self.entries {
            if !names.contains(name) {
                names.push(*name);
            }
        }
        names
    }

    /// Sum the counts of each counter's statuses; missing statuses count zero
    pub fn aggregate(&self, counts: &StatusCounts) -> BTreeMap<&'static str, u64> {
        let mut totals: BTreeMap<&'static str, u64> =
            self.counters().into_iter().map(|n| (n, 0)).collect();
        for (status, name) in &self.entries {
            let count = counts.get(status.as_str()).copied().unwrap_or(0);
            *totals.entry(*name).or_insert(0) += count;
        }
        totals
    }
}

/// Headline numbers of the admin dashboard
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: u64,
    /// UPLOADED + VALIDATED
    pub pending: u64,
    /// PROCESSED + PROCESSED_WITH_ERROR
    pub processed: u64,
    /// Every failed status, plus PROCESSED_WITH_ERROR
    pub errors: u64,
    /// Count per known status, zero-filled
    pub details: Vec<(BatchStatus, u64)>,
}

impl DashboardStats {
    pub fn from_counts(counts: &StatusCounts) -> Self {
        let get = |s: BatchStatus| counts.get(s.as_str()).copied().unwrap_or(0);

        Self {
            total: counts.values().sum(),
            pending: get(BatchStatus::Uploaded) + get(BatchStatus::Validated),
            processed: get(BatchStatus::Processed) + get(BatchStatus::ProcessedWithError),
            errors: get(BatchStatus::UploadedFailed)
                + get(BatchStatus::ValidatedFailed)
                + get(BatchStatus::ProcessedFailed)
                + get(BatchStatus::ProcessedWithError),
            details: BatchStatus::ALL.into_iter().map(|s| (s.clone(), get(s))).collect(),
        }
    }
}
