//! Drift between a baseline contract and an observed one.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Differences found when comparing contract A (baseline) to contract B (observed).
///
/// "Old" values come from A, "new" values from B.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriftReport {
    /// Columns present in B but not in A
    pub added_columns: BTreeSet<String>,

    /// Columns present in A but not in B
    pub removed_columns: BTreeSet<String>,

    /// Column -> (old dtype, new dtype)
    pub dtype_changes: BTreeMap<String, (String, String)>,

    /// Columns whose min/max bounds changed (dtype unchanged)
    pub range_changes: BTreeSet<String>,

    /// Columns whose allowed-value set changed (dtype unchanged)
    pub category_changes: BTreeSet<String>,

    /// Column -> (old max_missing_frac, new max_missing_frac)
    pub missingness_changes: BTreeMap<String, (f64, f64)>,
}

impl DriftReport {
    /// Returns true if any difference was recorded.
    pub fn has_drift(&self) -> bool {
        !(self.added_columns.is_empty()
            && self.removed_columns.is_empty()
            && self.dtype_changes.is_empty()
            && self.range_changes.is_empty()
            && self.category_changes.is_empty()
            && self.missingness_changes.is_empty())
    }

    /// Total number of recorded differences.
    pub fn change_count(&self) -> usize {
        self.added_columns.len()
            + self.removed_columns.len()
            + self.dtype_changes.len()
            + self.range_changes.len()
            + self.category_changes.len()
            + self.missingness_changes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_has_no_drift() {
        let report = DriftReport::default();
        assert!(!report.has_drift());
        assert_eq!(report.change_count(), 0);
    }

    #[test]
    fn test_any_field_counts_as_drift() {
        let mut report = DriftReport::default();
        report
            .missingness_changes
            .insert("age".to_string(), (0.0, 0.1));
        assert!(report.has_drift());

        let mut report = DriftReport::default();
        report.category_changes.insert("city".to_string());
        assert!(report.has_drift());
        assert_eq!(report.change_count(), 1);
    }
}
