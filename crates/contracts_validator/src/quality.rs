//! Quality check validation logic.
//!
//! Compares a column's missing fraction against the rule's allowance.

use contracts_core::{ColumnRule, ColumnView, Issue};

/// Validates data quality of a single column.
pub struct QualityValidator;

impl QualityValidator {
    /// Creates a new quality validator.
    pub fn new() -> Self {
        Self
    }

    /// Reports a missingness issue when the observed missing fraction strictly
    /// exceeds `max_missing_frac`. A fraction exactly at the limit passes.
    pub fn check_missingness(
        &self,
        column_name: &str,
        rule: &ColumnRule,
        column: &dyn ColumnView,
    ) -> Option<Issue> {
        let observed = column.missing_fraction();
        if observed > rule.max_missing_frac {
            Some(Issue::missingness(column_name, observed, rule.max_missing_frac))
        } else {
            None
        }
    }
}

impl Default for QualityValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Column;
    use contracts_core::{IssueKind, IssuePayload};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missingness_within_limit() {
        let column = Column::new("x", [Some(1_i64), None, Some(3), Some(4)]);
        let rule = ColumnRule::new("int64").with_max_missing_frac(0.5);
        assert!(QualityValidator::new()
            .check_missingness("x", &rule, &column)
            .is_none());
    }

    #[test]
    fn test_missingness_at_limit_passes() {
        let column = Column::new("x", [Some(1_i64), None]);
        let rule = ColumnRule::new("int64").with_max_missing_frac(0.5);
        assert!(QualityValidator::new()
            .check_missingness("x", &rule, &column)
            .is_none());
    }

    #[test]
    fn test_missingness_exceeded() {
        let column = Column::new("x", [Some(1_i64), None, None, None]);
        let rule = ColumnRule::new("int64").with_max_missing_frac(0.5);
        let issue = QualityValidator::new()
            .check_missingness("x", &rule, &column)
            .expect("missingness issue");

        assert_eq!(issue.kind, IssueKind::Missingness);
        assert_eq!(issue.observed, Some(IssuePayload::Number(0.75)));
        assert_eq!(issue.expected, Some(IssuePayload::Number(0.5)));
    }

    #[test]
    fn test_empty_column_has_no_missingness() {
        let column = Column::new("x", Vec::<i64>::new());
        let rule = ColumnRule::new("int64");
        assert!(QualityValidator::new()
            .check_missingness("x", &rule, &column)
            .is_none());
    }
}
