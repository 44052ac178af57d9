//! Validation issues and results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Category of a detected violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// A contract column is absent from the dataset
    MissingColumn,
    /// A dataset column is not declared in the contract (strict mode only)
    ExtraColumn,
    /// Observed dtype differs from the expected one
    Dtype,
    /// Too many missing values
    Missingness,
    /// Observed minimum or maximum outside the declared bounds
    Range,
    /// Values outside the allowed set
    Category,
}

impl IssueKind {
    /// Every kind, in declaration order.
    pub const ALL: [IssueKind; 6] = [
        IssueKind::MissingColumn,
        IssueKind::ExtraColumn,
        IssueKind::Dtype,
        IssueKind::Missingness,
        IssueKind::Range,
        IssueKind::Category,
    ];

    /// Returns the snake_case name of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueKind::MissingColumn => "missing_column",
            IssueKind::ExtraColumn => "extra_column",
            IssueKind::Dtype => "dtype",
            IssueKind::Missingness => "missingness",
            IssueKind::Range => "range",
            IssueKind::Category => "category",
        }
    }
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic value attached to an [`Issue`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IssuePayload {
    /// A dtype name or other text
    Text(String),
    /// A fraction or bound
    Number(f64),
    /// A set of rendered values
    Values(BTreeSet<String>),
}

impl fmt::Display for IssuePayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IssuePayload::Text(text) => f.write_str(text),
            IssuePayload::Number(n) => write!(f, "{n}"),
            IssuePayload::Values(values) => {
                let rendered: Vec<String> = values.iter().map(|v| format!("'{v}'")).collect();
                write!(f, "{{{}}}", rendered.join(", "))
            }
        }
    }
}

impl From<&str> for IssuePayload {
    fn from(s: &str) -> Self {
        IssuePayload::Text(s.to_string())
    }
}

impl From<String> for IssuePayload {
    fn from(s: String) -> Self {
        IssuePayload::Text(s)
    }
}

impl From<f64> for IssuePayload {
    fn from(n: f64) -> Self {
        IssuePayload::Number(n)
    }
}

impl From<BTreeSet<String>> for IssuePayload {
    fn from(values: BTreeSet<String>) -> Self {
        IssuePayload::Values(values)
    }
}

/// One detected violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Category of the violation
    pub kind: IssueKind,

    /// Human-readable description
    pub message: String,

    /// Offending column; `None` for dataset-level issues
    #[serde(default)]
    pub column: Option<String>,

    /// What was found
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed: Option<IssuePayload>,

    /// What the contract expects
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<IssuePayload>,
}

impl Issue {
    /// Creates a dataset-level issue with no payloads.
    pub fn new(kind: IssueKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            column: None,
            observed: None,
            expected: None,
        }
    }

    /// Attaches the offending column.
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Attaches the observed value.
    pub fn with_observed(mut self, observed: impl Into<IssuePayload>) -> Self {
        self.observed = Some(observed.into());
        self
    }

    /// Attaches the expected value.
    pub fn with_expected(mut self, expected: impl Into<IssuePayload>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// A contract column absent from the dataset.
    pub fn missing_column(column: &str) -> Self {
        Self::new(
            IssueKind::MissingColumn,
            format!("Column '{column}' is missing from the dataset"),
        )
        .with_column(column)
    }

    /// A dataset column not declared in the contract.
    pub fn extra_column(column: &str) -> Self {
        Self::new(
            IssueKind::ExtraColumn,
            format!("Column '{column}' is not declared in the contract"),
        )
        .with_column(column)
    }

    /// A dtype mismatch.
    pub fn dtype(column: &str, observed: &str, expected: &str) -> Self {
        Self::new(
            IssueKind::Dtype,
            format!("Column '{column}' has dtype '{observed}', expected '{expected}'"),
        )
        .with_column(column)
        .with_observed(observed)
        .with_expected(expected)
    }

    /// A missing fraction above the tolerated one.
    pub fn missingness(column: &str, observed: f64, expected: f64) -> Self {
        Self::new(
            IssueKind::Missingness,
            format!(
                "Column '{column}' has {:.2}% missing values, limit is {:.2}%",
                observed * 100.0,
                expected * 100.0
            ),
        )
        .with_column(column)
        .with_observed(observed)
        .with_expected(expected)
    }

    /// An observed minimum below the lower bound.
    pub fn below_min(column: &str, observed: f64, min: f64) -> Self {
        Self::new(
            IssueKind::Range,
            format!("Column '{column}' has minimum {observed}, below the lower bound {min}"),
        )
        .with_column(column)
        .with_observed(observed)
        .with_expected(min)
    }

    /// An observed maximum above the upper bound.
    pub fn above_max(column: &str, observed: f64, max: f64) -> Self {
        Self::new(
            IssueKind::Range,
            format!("Column '{column}' has maximum {observed}, above the upper bound {max}"),
        )
        .with_column(column)
        .with_observed(observed)
        .with_expected(max)
    }

    /// Values outside the allowed set.
    pub fn category(column: &str, invalid: BTreeSet<String>, allowed: BTreeSet<String>) -> Self {
        let listed: Vec<String> = invalid.iter().map(|v| format!("'{v}'")).collect();
        Self::new(
            IssueKind::Category,
            format!(
                "Column '{column}' has values outside the allowed set: {}",
                listed.join(", ")
            ),
        )
        .with_column(column)
        .with_observed(invalid)
        .with_expected(allowed)
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}

/// Outcome of validating a dataset against a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// True iff no issue was found
    pub ok: bool,

    /// Issues in detection order
    #[serde(default)]
    pub issues: Vec<Issue>,
}

impl ValidationResult {
    /// Creates a passing result.
    pub fn success() -> Self {
        Self {
            ok: true,
            issues: Vec::new(),
        }
    }

    /// Creates a result from detected issues; `ok` is true iff there are none.
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        Self {
            ok: issues.is_empty(),
            issues,
        }
    }

    /// Iterates over issues of one kind.
    pub fn issues_of(&self, kind: IssueKind) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(move |issue| issue.kind == kind)
    }
}
