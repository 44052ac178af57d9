//! Error types for data contracts.
//!
//! These errors describe usage problems: malformed rules, out-of-domain
//! parameters and the explicit "validate or fail" escalation. Data-quality
//! findings are never errors; they are reported as [`Issue`]s.

use crate::Issue;
use thiserror::Error;

/// Result type for data contract operations.
pub type Result<T> = std::result::Result<T, ContractError>;

/// Main error type for data contract operations.
#[derive(Error, Debug)]
pub enum ContractError {
    /// A column rule has the wrong shape (e.g. both numeric bounds and an allowed-value set)
    #[error("Column rule for '{column}' is malformed: {message}")]
    MalformedRule {
        /// Column whose rule is malformed
        column: String,
        /// Description of the problem
        message: String,
    },

    /// A column rule carries an out-of-domain value
    #[error("Invalid rule for column '{column}': {message}")]
    InvalidRule {
        /// Column whose rule is invalid
        column: String,
        /// Description of the problem
        message: String,
    },

    /// An operation parameter is out of its domain
    #[error("Invalid argument '{argument}': {message}")]
    InvalidArgument {
        /// Parameter name
        argument: String,
        /// Description of the problem
        message: String,
    },

    /// Validation produced issues and the caller asked to fail on them
    #[error("Contract '{contract}' violated with {} issue(s)", .issues.len())]
    Violation {
        /// Name of the violated contract
        contract: String,
        /// Every issue found, in detection order
        issues: Vec<Issue>,
    },
}

impl ContractError {
    /// Creates a new malformed rule error.
    pub fn malformed_rule(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedRule {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Creates a new invalid rule error.
    pub fn invalid_rule(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRule {
            column: column.into(),
            message: message.into(),
        }
    }

    /// Creates a new invalid argument error.
    pub fn invalid_argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }
}
