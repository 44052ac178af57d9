//! Main validation engine.
//!
//! This module provides the `DataValidator` that orchestrates the schema,
//! quality, and constraint checks of a contract against a dataset.

use crate::{ConstraintValidator, QualityValidator, SchemaValidator};
use contracts_core::{
    ColumnRule, ColumnView, Contract, ContractError, Issue, Result, TabularData,
    ValidationContext, ValidationResult,
};
use std::time::Instant;
use tracing::{debug, info};

/// Main validation engine for data contracts.
///
/// Issues are collected in a fixed order: missing columns, extra columns
/// (strict mode only), then for each contract column present in the dataset,
/// in contract order, its dtype, missingness, range, and category findings.
///
/// # Example
///
/// ```rust
/// use contracts_core::{ColumnRule, Contract, ValidationContext};
/// use contracts_validator::{Column, DataSet, DataValidator};
///
/// let contract = Contract::new("people")
///     .with_column("age", ColumnRule::new("int64").with_range(0.0, 100.0));
/// let dataset = DataSet::from_columns(vec![Column::new("age", [150_i64])]).unwrap();
///
/// let validator = DataValidator::new();
/// let result = validator.validate(&dataset, &contract, &ValidationContext::new());
///
/// assert!(!result.ok);
/// for issue in &result.issues {
///     println!("{issue}");
/// }
/// ```
pub struct DataValidator {
    schema_validator: SchemaValidator,
    quality_validator: QualityValidator,
    constraint_validator: ConstraintValidator,
}

impl DataValidator {
    /// Creates a new data validator.
    pub fn new() -> Self {
        Self {
            schema_validator: SchemaValidator::new(),
            quality_validator: QualityValidator::new(),
            constraint_validator: ConstraintValidator::new(),
        }
    }

    /// Validates a dataset against a contract.
    ///
    /// Findings are never raised as errors; they are returned as issues in the
    /// result. `ok` is true iff no issue was found.
    pub fn validate(
        &self,
        data: &dyn TabularData,
        contract: &Contract,
        context: &ValidationContext,
    ) -> ValidationResult {
        let start = Instant::now();

        let mut issues = self
            .schema_validator
            .check_presence(data, contract, context.strict);

        for (column_name, rule) in &contract.columns {
            let Some(column) = data.column(column_name) else {
                continue;
            };

            let before = issues.len();
            issues.extend(self.check_column(column_name, rule, column));

            debug!(
                column = column_name.as_str(),
                issues = issues.len() - before,
                "Validated column"
            );
        }

        let result = ValidationResult::from_issues(issues);

        info!(
            contract = contract.name.as_str(),
            ok = result.ok,
            issues = result.issues.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Validation finished"
        );

        result
    }

    /// Runs the per-column checks: dtype, missingness, range, then category.
    fn check_column(
        &self,
        column_name: &str,
        rule: &ColumnRule,
        column: &dyn ColumnView,
    ) -> Vec<Issue> {
        let mut issues = Vec::new();
        issues.extend(self.schema_validator.check_dtype(column_name, rule, column));
        issues.extend(
            self.quality_validator
                .check_missingness(column_name, rule, column),
        );
        issues.extend(
            self.constraint_validator
                .check_range(column_name, rule, column),
        );
        issues.extend(
            self.constraint_validator
                .check_category(column_name, rule, column),
        );
        issues
    }

    /// Validates a dataset and escalates any finding into an error.
    ///
    /// Returns the passing result on success, or
    /// [`ContractError::Violation`] carrying every issue otherwise.
    pub fn validate_or_fail(
        &self,
        data: &dyn TabularData,
        contract: &Contract,
        context: &ValidationContext,
    ) -> Result<ValidationResult> {
        let result = self.validate(data, contract, context);
        if result.ok {
            Ok(result)
        } else {
            Err(ContractError::Violation {
                contract: contract.name.clone(),
                issues: result.issues,
            })
        }
    }
}

impl Default for DataValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Validates a dataset against a contract in strict mode.
pub fn validate_contract(data: &dyn TabularData, contract: &Contract) -> ValidationResult {
    DataValidator::new().validate(data, contract, &ValidationContext::default())
}

/// Validates a dataset in strict mode, failing with the collected issues.
pub fn validate_or_fail(data: &dyn TabularData, contract: &Contract) -> Result<ValidationResult> {
    DataValidator::new().validate_or_fail(data, contract, &ValidationContext::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Column, DataSet};
    use contracts_core::IssueKind;
    use pretty_assertions::assert_eq;

    fn create_test_contract() -> Contract {
        Contract::new("people")
            .with_column(
                "age",
                ColumnRule::new("int64")
                    .with_range(0.0, 100.0)
                    .with_max_missing_frac(0.0),
            )
            .with_column(
                "city",
                ColumnRule::new("object").with_allowed_values(["Vancouver", "Toronto"]),
            )
    }

    fn kinds(result: &ValidationResult) -> Vec<IssueKind> {
        result.issues.iter().map(|i| i.kind).collect()
    }

    #[test]
    fn test_empty_dataset() {
        let validator = DataValidator::new();
        let result = validator.validate(
            &DataSet::empty(),
            &create_test_contract(),
            &ValidationContext::new(),
        );

        assert!(!result.ok);
        assert_eq!(
            kinds(&result),
            vec![IssueKind::MissingColumn, IssueKind::MissingColumn]
        );
    }

    #[test]
    fn test_valid_data() {
        let dataset = DataSet::from_columns(vec![
            Column::new("age", [25_i64, 40]),
            Column::new("city", ["Vancouver", "Toronto"]),
        ])
        .unwrap();

        let result = validate_contract(&dataset, &create_test_contract());
        assert!(result.ok, "Expected no issues, got: {:?}", result.issues);
        assert!(result.issues.is_empty());
    }

    #[test]
    fn test_issue_order() {
        let dataset = DataSet::from_columns(vec![
            Column::new("extra", [1_i64, 2]),
            Column::new("city", [Some("Paris"), None]),
            Column::new("age", [Some(150_i64), None]),
        ])
        .unwrap();

        let result = validate_contract(&dataset, &create_test_contract());
        assert_eq!(
            kinds(&result),
            vec![
                IssueKind::ExtraColumn,
                IssueKind::Missingness,
                IssueKind::Range,
                IssueKind::Missingness,
                IssueKind::Category,
            ]
        );
        let columns: Vec<_> = result
            .issues
            .iter()
            .map(|i| i.column.as_deref().unwrap())
            .collect();
        assert_eq!(columns, vec!["extra", "age", "age", "city", "city"]);
    }

    #[test]
    fn test_lenient_mode_ignores_extra_columns() {
        let dataset = DataSet::from_columns(vec![
            Column::new("age", [25_i64]),
            Column::new("city", ["Toronto"]),
            Column::new("extra", [true]),
        ])
        .unwrap();

        let lenient = ValidationContext::new().with_strict(false);
        let result = DataValidator::new().validate(&dataset, &create_test_contract(), &lenient);
        assert!(result.ok);

        let strict = validate_contract(&dataset, &create_test_contract());
        assert_eq!(kinds(&strict), vec![IssueKind::ExtraColumn]);
    }

    #[test]
    fn test_missing_column_is_unconditional() {
        let dataset = DataSet::from_columns(vec![Column::new("age", [25_i64])]).unwrap();
        let lenient = ValidationContext::new().with_strict(false);
        let result = DataValidator::new().validate(&dataset, &create_test_contract(), &lenient);

        assert_eq!(kinds(&result), vec![IssueKind::MissingColumn]);
        assert_eq!(result.issues[0].column.as_deref(), Some("city"));
    }

    #[test]
    fn test_dtype_mismatch_does_not_stop_other_checks() {
        let dataset = DataSet::from_columns(vec![
            Column::new("age", [25.5_f64, 130.0]),
            Column::new("city", ["Toronto", "Toronto"]),
        ])
        .unwrap();

        let result = validate_contract(&dataset, &create_test_contract());
        assert_eq!(kinds(&result), vec![IssueKind::Dtype, IssueKind::Range]);
    }

    #[test]
    fn test_validate_or_fail() {
        let dataset = DataSet::from_columns(vec![
            Column::new("age", [150_i64]),
            Column::new("city", ["Toronto"]),
        ])
        .unwrap();

        let err = validate_or_fail(&dataset, &create_test_contract()).unwrap_err();
        match err {
            ContractError::Violation { contract, issues } => {
                assert_eq!(contract, "people");
                assert_eq!(issues.len(), 1);
                assert_eq!(issues[0].kind, IssueKind::Range);
            }
            other => panic!("Expected violation, got: {other}"),
        }
    }

    #[test]
    fn test_validate_or_fail_passes_through_success() {
        let dataset = DataSet::from_columns(vec![
            Column::new("age", [1_i64]),
            Column::new("city", ["Toronto"]),
        ])
        .unwrap();

        let result = validate_or_fail(&dataset, &create_test_contract()).unwrap();
        assert!(result.ok);
    }

    #[test]
    fn test_column_check_order() {
        let column = Column::new("age", [Some(-1_i64), None]);
        let rule = ColumnRule::new("float64").with_range(0.0, 10.0);
        let issues = DataValidator::new().check_column("age", &rule, &column);
        assert_eq!(
            issues.iter().map(|i| i.kind).collect::<Vec<_>>(),
            vec![IssueKind::Dtype, IssueKind::Missingness, IssueKind::Range]
        );
    }
}
