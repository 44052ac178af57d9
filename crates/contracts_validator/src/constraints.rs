//! Constraint validation logic.
//!
//! This module handles the value-level constraints of a column rule:
//! - Range: observed numeric min/max must lie within the rule's bounds
//! - Category: every distinct non-missing value must belong to the allowed set

use contracts_core::{ColumnRule, ColumnView, Issue};

/// Validates value constraints of a single column.
pub struct ConstraintValidator;

impl ConstraintValidator {
    /// Creates a new constraint validator.
    pub fn new() -> Self {
        Self
    }

    /// Checks numeric bounds.
    ///
    /// Only numeric columns are checked. A breached lower bound and a breached
    /// upper bound each yield their own issue, lower first.
    pub fn check_range(
        &self,
        column_name: &str,
        rule: &ColumnRule,
        column: &dyn ColumnView,
    ) -> Vec<Issue> {
        let mut issues = Vec::new();

        if !column.is_numeric() {
            return issues;
        }

        if let (Some(min), Some(observed)) = (rule.min_value, column.min()) {
            if observed < min {
                issues.push(Issue::below_min(column_name, observed, min));
            }
        }

        if let (Some(max), Some(observed)) = (rule.max_value, column.max()) {
            if observed > max {
                issues.push(Issue::above_max(column_name, observed, max));
            }
        }

        issues
    }

    /// Checks that every distinct value belongs to the allowed set.
    ///
    /// All offending values are reported together in a single issue.
    pub fn check_category(
        &self,
        column_name: &str,
        rule: &ColumnRule,
        column: &dyn ColumnView,
    ) -> Option<Issue> {
        let allowed = rule.allowed_values.as_ref()?;

        let invalid: std::collections::BTreeSet<String> = column
            .distinct_values()
            .into_iter()
            .filter(|value| !allowed.contains(value))
            .collect();

        if invalid.is_empty() {
            None
        } else {
            Some(Issue::category(column_name, invalid, allowed.clone()))
        }
    }
}

impl Default for ConstraintValidator {
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
    use std::collections::BTreeSet;

    fn set(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_range_within_bounds() {
        let column = Column::new("age", [10_i64, 50, 90]);
        let rule = ColumnRule::new("int64").with_range(0.0, 100.0);
        assert!(ConstraintValidator::new()
            .check_range("age", &rule, &column)
            .is_empty());
    }

    #[test]
    fn test_range_above_max() {
        let column = Column::new("age", [150_i64]);
        let rule = ColumnRule::new("int64").with_range(0.0, 100.0);
        let issues = ConstraintValidator::new().check_range("age", &rule, &column);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::Range);
        assert_eq!(issues[0].column.as_deref(), Some("age"));
        assert_eq!(issues[0].observed, Some(IssuePayload::Number(150.0)));
        assert_eq!(issues[0].expected, Some(IssuePayload::Number(100.0)));
    }

    #[test]
    fn test_range_both_bounds_breached() {
        let column = Column::new("temp", [-5.0_f64, 120.0]);
        let rule = ColumnRule::new("float64").with_range(0.0, 100.0);
        let issues = ConstraintValidator::new().check_range("temp", &rule, &column);

        assert_eq!(issues.len(), 2);
        assert!(issues[0].message.contains("below"));
        assert!(issues[1].message.contains("above"));
    }

    #[test]
    fn test_range_single_bound() {
        let column = Column::new("x", [-1_i64, 1000]);
        let rule = ColumnRule::new("int64").with_min_value(0.0);
        let issues = ConstraintValidator::new().check_range("x", &rule, &column);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].expected, Some(IssuePayload::Number(0.0)));
    }

    #[test]
    fn test_range_skipped_for_non_numeric_column() {
        let column = Column::new("age", ["150"]);
        let rule = ColumnRule::new("int64").with_range(0.0, 100.0);
        assert!(ConstraintValidator::new()
            .check_range("age", &rule, &column)
            .is_empty());
    }

    #[test]
    fn test_range_skipped_for_all_missing_column() {
        let column = Column::new("x", [None::<i64>, None]);
        let rule = ColumnRule::new("int64").with_range(0.0, 1.0);
        assert!(ConstraintValidator::new()
            .check_range("x", &rule, &column)
            .is_empty());
    }

    #[test]
    fn test_category_without_allowed_set() {
        let column = Column::new("city", ["Paris"]);
        assert!(ConstraintValidator::new()
            .check_category("city", &ColumnRule::new("object"), &column)
            .is_none());
    }

    #[test]
    fn test_category_lists_all_invalid_values() {
        let column = Column::new(
            "city",
            [Some("Vancouver"), Some("Paris"), None, Some("Berlin"), Some("Paris")],
        );
        let rule = ColumnRule::new("object").with_allowed_values(["Vancouver", "Toronto"]);
        let issue = ConstraintValidator::new()
            .check_category("city", &rule, &column)
            .expect("category issue");

        assert_eq!(issue.kind, IssueKind::Category);
        assert_eq!(
            issue.observed,
            Some(IssuePayload::Values(set(&["Berlin", "Paris"])))
        );
        assert_eq!(
            issue.expected,
            Some(IssuePayload::Values(set(&["Toronto", "Vancouver"])))
        );
    }

    #[test]
    fn test_category_empty_allowed_set_rejects_everything() {
        let column = Column::new("flag", [true]);
        let rule = ColumnRule::new("bool").with_allowed_values(Vec::<String>::new());
        let issue = ConstraintValidator::new()
            .check_category("flag", &rule, &column)
            .expect("category issue");
        assert_eq!(issue.observed, Some(IssuePayload::Values(set(&["True"]))));
    }
}
