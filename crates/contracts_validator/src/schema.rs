//! Schema validation logic.
//!
//! Column presence (missing and extra columns) and dtype compatibility.

use contracts_core::dtype::dtypes_equivalent;
use contracts_core::{ColumnRule, ColumnView, Contract, Issue, TabularData};
use tracing::debug;

/// Validates the schema of a dataset against a contract.
pub struct SchemaValidator;

impl SchemaValidator {
    /// Creates a new schema validator.
    pub fn new() -> Self {
        Self
    }

    /// Checks column presence.
    ///
    /// Every contract column absent from the dataset is reported, regardless of
    /// mode. Dataset columns absent from the contract are reported only in
    /// strict mode. Missing columns come first, each group in its own order.
    pub fn check_presence(
        &self,
        data: &dyn TabularData,
        contract: &Contract,
        strict: bool,
    ) -> Vec<Issue> {
        let mut issues: Vec<Issue> = contract
            .column_names()
            .filter(|name| !data.has_column(name))
            .map(Issue::missing_column)
            .collect();

        if strict {
            issues.extend(
                data.column_names()
                    .into_iter()
                    .filter(|name| !contract.contains(name))
                    .map(Issue::extra_column),
            );
        }

        debug!(
            strict,
            issues = issues.len(),
            "Checked column presence"
        );
        issues
    }

    /// Checks that the column's dtype matches the rule, up to text-alias equivalence.
    pub fn check_dtype(
        &self,
        column_name: &str,
        rule: &ColumnRule,
        column: &dyn ColumnView,
    ) -> Option<Issue> {
        if dtypes_equivalent(column.dtype(), &rule.dtype) {
            return None;
        }
        Some(Issue::dtype(column_name, column.dtype(), &rule.dtype))
    }
}

impl Default for SchemaValidator {
    fn default() -> Self {
        Self::new()
    }
}
