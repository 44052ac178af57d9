//! Error types for building and loading datasets.

use thiserror::Error;

/// Errors that can occur while assembling or reading a dataset.
#[derive(Debug, Error)]
pub enum DataSetError {
    /// Two columns share a name
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    /// A column's length differs from the others
    #[error("Column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Malformed CSV input
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
}
