//! Drift detection between two contracts.

use contracts_core::{ColumnRule, Contract, DriftReport, Result};
use tracing::{debug, info};

/// Compares a baseline contract `a` with an observed contract `b`.
///
/// Both contracts are checked first, `a` before `b`, and the first malformed
/// rule aborts the comparison. For each column shared by both contracts, a
/// dtype change is recorded alone: bound and category differences are only
/// meaningful when the dtype is unchanged. Missing-fraction changes are
/// recorded regardless of dtype.
///
/// # Example
///
/// ```rust
/// use contracts_core::{ColumnRule, Contract};
/// use contracts_validator::compare_contracts;
///
/// let a = Contract::new("a").with_column("x", ColumnRule::new("int64").with_range(0.0, 1.0));
/// let b = Contract::new("b").with_column("x", ColumnRule::new("float64").with_range(0.0, 9.0));
///
/// let report = compare_contracts(&a, &b).unwrap();
/// assert!(report.dtype_changes.contains_key("x"));
/// assert!(report.range_changes.is_empty());
/// ```
pub fn compare_contracts(a: &Contract, b: &Contract) -> Result<DriftReport> {
    a.check()?;
    b.check()?;

    let mut report = DriftReport::default();

    report.added_columns = b
        .column_names()
        .filter(|name| !a.contains(name))
        .map(str::to_string)
        .collect();
    report.removed_columns = a
        .column_names()
        .filter(|name| !b.contains(name))
        .map(str::to_string)
        .collect();

    for (column, old) in &a.columns {
        let Some(new) = b.rule(column) else {
            continue;
        };
        compare_rules(column, old, new, &mut report);
    }

    info!(
        baseline = a.name.as_str(),
        observed = b.name.as_str(),
        changes = report.change_count(),
        "Compared contracts"
    );

    Ok(report)
}

fn compare_rules(column: &str, old: &ColumnRule, new: &ColumnRule, report: &mut DriftReport) {
    if old.dtype != new.dtype {
        debug!(column, old = %old.dtype, new = %new.dtype, "Dtype changed");
        report
            .dtype_changes
            .insert(column.to_string(), (old.dtype.clone(), new.dtype.clone()));
    } else {
        if (old.min_value, old.max_value) != (new.min_value, new.max_value) {
            report.range_changes.insert(column.to_string());
        }
        if old.allowed_values != new.allowed_values {
            report.category_changes.insert(column.to_string());
        }
    }

    if old.max_missing_frac != new.max_missing_frac {
        report.missingness_changes.insert(
            column.to_string(),
            (old.max_missing_frac, new.max_missing_frac),
        );
    }
}
