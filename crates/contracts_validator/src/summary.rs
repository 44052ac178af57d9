//! Violation summaries.

use contracts_core::{
    Issue, IssueKind, Result, SeverityWeights, Summary, SummaryOptions, ValidationResult,
};
use indexmap::IndexMap;
use std::cmp::Ordering;
use tracing::info;

/// Ranks the issues of a validation result and counts them by kind.
///
/// Options are checked before anything else. Issues are ranked by descending
/// weight, then by column (dataset-level issues first, then alphabetically),
/// then by kind name; remaining ties keep their original order. Counts always
/// cover every issue, whatever `top_k` is.
///
/// # Example
///
/// ```rust
/// use contracts_core::{Issue, IssueKind, SummaryOptions, ValidationResult};
/// use contracts_validator::summarize_violations;
///
/// let result = ValidationResult::from_issues(vec![
///     Issue::missingness("a", 0.5, 0.0),
///     Issue::missing_column("b"),
/// ]);
///
/// let summary = summarize_violations(&result, &SummaryOptions::new().with_top_k(1)).unwrap();
/// assert_eq!(summary.top_issues[0].kind, IssueKind::MissingColumn);
/// assert_eq!(summary.counts_by_kind[&IssueKind::Missingness], 1);
/// ```
pub fn summarize_violations(
    result: &ValidationResult,
    options: &SummaryOptions,
) -> Result<Summary> {
    options.check()?;

    if result.issues.is_empty() {
        return Ok(Summary {
            ok: result.ok,
            top_issues: Vec::new(),
            counts_by_kind: IndexMap::new(),
        });
    }

    let default_weights;
    let weights = match &options.weights {
        Some(weights) => weights,
        None => {
            default_weights = SeverityWeights::default();
            &default_weights
        }
    };

    let mut counts_by_kind: IndexMap<IssueKind, usize> = IndexMap::new();
    for issue in &result.issues {
        *counts_by_kind.entry(issue.kind).or_insert(0) += 1;
    }

    let mut ranked: Vec<&Issue> = result.issues.iter().collect();
    ranked.sort_by(|a, b| rank(weights, a, b));

    let top_issues: Vec<Issue> = ranked
        .into_iter()
        .take(options.top_k)
        .cloned()
        .collect();

    info!(
        issues = result.issues.len(),
        kept = top_issues.len(),
        "Summarized violations"
    );

    Ok(Summary {
        ok: result.ok,
        top_issues,
        counts_by_kind,
    })
}

fn rank(weights: &SeverityWeights, a: &Issue, b: &Issue) -> Ordering {
    weights
        .weight_of(b.kind)
        .total_cmp(&weights.weight_of(a.kind))
        .then_with(|| a.column.as_deref().cmp(&b.column.as_deref()))
        .then_with(|| a.kind.as_str().cmp(b.kind.as_str()))
}
