//! Tabular data adapter traits.
//!
//! Inference and validation read datasets only through these traits, so any
//! columnar source (an in-memory table, a CSV file, a DataFrame binding) can be
//! plugged in by implementing them.

use std::collections::BTreeSet;

/// Read-only view of one column.
pub trait ColumnView {
    /// Native dtype name (e.g. "int64", "object").
    fn dtype(&self) -> &str;

    /// Total number of entries, missing ones included.
    fn len(&self) -> usize;

    /// Returns true if the column has no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of missing entries.
    fn missing_count(&self) -> usize;

    /// Fraction of missing entries; 0.0 for a column without entries.
    fn missing_fraction(&self) -> f64 {
        let total = self.len();
        if total == 0 {
            return 0.0;
        }
        self.missing_count() as f64 / total as f64
    }

    /// Returns true if the column holds numbers.
    fn is_numeric(&self) -> bool;

    /// Smallest non-missing value, if any.
    fn min(&self) -> Option<f64>;

    /// Largest non-missing value, if any.
    fn max(&self) -> Option<f64>;

    /// Distinct non-missing values rendered as strings.
    fn distinct_values(&self) -> BTreeSet<String>;
}

/// Read-only view of a dataset.
pub trait TabularData {
    /// Column names in a stable order.
    fn column_names(&self) -> Vec<&str>;

    /// Looks up a column by name.
    fn column(&self, name: &str) -> Option<&dyn ColumnView>;

    /// Returns true if the dataset has the column.
    fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }
}
