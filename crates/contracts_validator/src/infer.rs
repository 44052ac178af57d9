//! Contract inference.
//!
//! Derives a [`Contract`] from a sample of "good" data: one rule per column,
//! capturing its dtype, its exact missing fraction, and either its numeric
//! bounds or its set of observed values.

use contracts_core::dtype::is_categorical_like;
use contracts_core::{ColumnRule, ColumnView, Contract, DEFAULT_CONTRACT_NAME, TabularData};
use indexmap::IndexMap;
use tracing::{debug, info};

/// Infers a contract named `"contract"` from a dataset.
///
/// # Example
///
/// ```rust
/// use contracts_validator::{Column, DataSet, infer_contract};
///
/// let dataset = DataSet::from_columns(vec![Column::new("age", [1_i64, 2, 3])]).unwrap();
/// let contract = infer_contract(&dataset);
///
/// let age = contract.rule("age").unwrap();
/// assert_eq!(age.min_value, Some(1.0));
/// assert_eq!(age.max_value, Some(3.0));
/// assert_eq!(age.allowed_values, None);
/// ```
pub fn infer_contract<D: TabularData + ?Sized>(data: &D) -> Contract {
    infer_named_contract(data, DEFAULT_CONTRACT_NAME)
}

/// Infers a contract with the given name from a dataset.
pub fn infer_named_contract<D: TabularData + ?Sized>(data: &D, name: &str) -> Contract {
    let mut columns = IndexMap::new();

    for column_name in data.column_names() {
        let Some(column) = data.column(column_name) else {
            continue;
        };
        columns.insert(column_name.to_string(), infer_rule(column_name, column));
    }

    info!("Inferred contract '{}' with {} column(s)", name, columns.len());

    Contract {
        name: name.to_string(),
        columns,
    }
}

/// Derives the rule of a single column.
///
/// Categorical-like dtypes get an allowed-value set; other numeric columns get
/// bounds. A column never gets both.
pub fn infer_rule(column_name: &str, column: &dyn ColumnView) -> ColumnRule {
    let dtype = column.dtype().to_string();
    let mut rule = ColumnRule::new(dtype).with_max_missing_frac(column.missing_fraction());

    if is_categorical_like(column.dtype()) {
        rule.allowed_values = Some(column.distinct_values());
    } else if column.is_numeric() {
        rule.min_value = column.min();
        rule.max_value = column.max();
    }

    debug!(
        column = column_name,
        dtype = %rule.dtype,
        max_missing_frac = rule.max_missing_frac,
        bounded = rule.has_bounds(),
        categorical = rule.allowed_values.is_some(),
        "Inferred column rule"
    );

    rule
}
