//! Options for validation and summarization.

use crate::{ContractError, Result, SeverityWeights};

/// Number of issues highlighted by a summary unless told otherwise.
pub const DEFAULT_TOP_K: usize = 5;

/// Context for validation operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationContext {
    /// Whether dataset columns missing from the contract are violations
    pub strict: bool,
}

impl ValidationContext {
    /// Creates a new validation context with default settings (strict).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets strict validation mode.
    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for ValidationContext {
    fn default() -> Self {
        Self { strict: true }
    }
}

/// Options for summarizing a validation result.
///
/// # Example
///
/// ```rust
/// use contracts_core::{IssueKind, SeverityWeights, SummaryOptions};
///
/// let options = SummaryOptions::new()
///     .with_top_k(3)
///     .with_weights(SeverityWeights::custom([(IssueKind::Range, 20.0)]));
/// assert!(options.check().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryOptions {
    /// Maximum number of ranked issues to keep; must be positive
    pub top_k: usize,

    /// Custom severity table; `None` uses the defaults
    pub weights: Option<SeverityWeights>,
}

impl SummaryOptions {
    /// Creates options with `top_k = 5` and the default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of ranked issues to keep.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Replaces the default severity table.
    pub fn with_weights(mut self, weights: SeverityWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Checks `top_k` first, then the custom weights.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidArgument`] if `top_k` is zero or a weight is
    /// NaN or not strictly positive.
    pub fn check(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(ContractError::invalid_argument(
                "top_k",
                "top_k must be a positive integer",
            ));
        }
        if let Some(weights) = &self.weights {
            weights.check()?;
        }
        Ok(())
    }
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            weights: None,
        }
    }
}
