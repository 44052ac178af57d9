//! Severity weights and violation summaries.

use crate::{ContractError, Issue, IssueKind, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Default severity of each issue kind. Schema problems outrank distribution problems.
pub const DEFAULT_SEVERITY_WEIGHTS: [(IssueKind, f64); 6] = [
    (IssueKind::MissingColumn, 10.0),
    (IssueKind::ExtraColumn, 8.0),
    (IssueKind::Dtype, 7.0),
    (IssueKind::Range, 5.0),
    (IssueKind::Category, 5.0),
    (IssueKind::Missingness, 3.0),
];

/// Weight of kinds absent from a custom table.
pub const FALLBACK_WEIGHT: f64 = 1.0;

/// Severity weight per issue kind, used to rank issues.
///
/// The default table is [`DEFAULT_SEVERITY_WEIGHTS`]. A custom table replaces
/// it entirely: kinds it does not list weigh [`FALLBACK_WEIGHT`], not their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeverityWeights(IndexMap<IssueKind, f64>);

impl SeverityWeights {
    /// Builds a custom table. Entries are kept in the given order.
    pub fn custom<I>(weights: I) -> Self
    where
        I: IntoIterator<Item = (IssueKind, f64)>,
    {
        Self(weights.into_iter().collect())
    }

    /// Weight of a kind, or [`FALLBACK_WEIGHT`] if the table does not list it.
    pub fn weight_of(&self, kind: IssueKind) -> f64 {
        self.0.get(&kind).copied().unwrap_or(FALLBACK_WEIGHT)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (IssueKind, f64)> + '_ {
        self.0.iter().map(|(kind, weight)| (*kind, *weight))
    }

    /// Checks that every weight is a number strictly greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::InvalidArgument`] for the first offending entry.
    pub fn check(&self) -> Result<()> {
        for (kind, weight) in self.iter() {
            if weight.is_nan() {
                return Err(ContractError::invalid_argument(
                    "weights",
                    format!("Weight for '{kind}' must be numeric, got NaN"),
                ));
            }
            if weight <= 0.0 {
                return Err(ContractError::invalid_argument(
                    "weights",
                    format!("Weight for '{kind}' must be positive, got {weight}"),
                ));
            }
        }
        Ok(())
    }
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self::custom(DEFAULT_SEVERITY_WEIGHTS)
    }
}

/// Actionable summary of a validation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Mirrors `ValidationResult::ok`
    pub ok: bool,

    /// The most severe issues, at most `top_k`
    pub top_issues: Vec<Issue>,

    /// Issue count per kind over every issue, in order of first appearance
    pub counts_by_kind: IndexMap<IssueKind, usize>,
}

impl Summary {
    /// Total number of issues the summary was built from.
    pub fn total_issues(&self) -> usize {
        self.counts_by_kind.values().sum()
    }
}
