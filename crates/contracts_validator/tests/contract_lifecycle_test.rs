//! End-to-end tests over the four operations: infer, validate, compare, summarize.

use contracts_core::{
    ColumnRule, Contract, ContractBuilder, ContractError, Issue, IssueKind, SeverityWeights,
    SummaryOptions, ValidationContext, ValidationResult,
};
use contracts_validator::{
    Column, DataSet, DataValidator, compare_contracts, infer_contract, summarize_violations,
    validate_contract, validate_or_fail,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn people_contract() -> Contract {
    ContractBuilder::new("test_contract")
        .column(
            "age",
            ColumnRule::new("int64")
                .with_range(0.0, 100.0)
                .with_max_missing_frac(0.0),
        )
        .column(
            "city",
            ColumnRule::new("object").with_allowed_values(["Vancouver", "Toronto"]),
        )
        .build()
}

fn people(ages: Vec<i64>, cities: Vec<&str>) -> DataSet {
    DataSet::from_columns(vec![Column::new("age", ages), Column::new("city", cities)]).unwrap()
}

fn names(values: &[&str]) -> BTreeSet<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn test_infer_numeric_bounds() {
    let dataset = DataSet::from_columns(vec![Column::new("x", [1_i64, 2, 3])]).unwrap();
    let rule = infer_contract(&dataset).rule("x").cloned().unwrap();

    assert_eq!(rule.min_value, Some(1.0));
    assert_eq!(rule.max_value, Some(3.0));
    assert_eq!(rule.allowed_values, None);
}

#[test]
fn test_infer_exact_missing_fraction() {
    let dataset =
        DataSet::from_columns(vec![Column::new("x", [Some(1_i64), None, None, Some(4)])]).unwrap();
    let rule = infer_contract(&dataset).rule("x").cloned().unwrap();
    assert_eq!(rule.max_missing_frac, 0.5);
}

#[test]
fn test_validate_success_path() {
    let result = validate_contract(&people(vec![25, 30], vec!["Vancouver", "Toronto"]), &people_contract());
    assert!(result.ok);
    assert!(result.issues.is_empty());
}

#[test]
fn test_validate_missing_required_column() {
    let dataset = DataSet::from_columns(vec![Column::new("city", ["Vancouver"])]).unwrap();
    let result = validate_contract(&dataset, &people_contract());

    assert!(!result.ok);
    assert!(result.issues_of(IssueKind::MissingColumn).any(|i| i.column.as_deref() == Some("age")));
}

#[test]
fn test_validate_dtype_mismatch() {
    let dataset = DataSet::from_columns(vec![
        Column::new("age", ["25", "30"]),
        Column::new("city", ["Vancouver", "Toronto"]),
    ])
    .unwrap();

    let result = validate_contract(&dataset, &people_contract());
    assert!(!result.ok);
    let dtype: Vec<_> = result.issues_of(IssueKind::Dtype).collect();
    assert_eq!(dtype.len(), 1);
    assert_eq!(dtype[0].observed.as_ref().unwrap().to_string(), "object");
    assert_eq!(dtype[0].expected.as_ref().unwrap().to_string(), "int64");
}

#[test]
fn test_validate_range_violation() {
    let result = validate_contract(&people(vec![150], vec!["Toronto"]), &people_contract());

    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].kind, IssueKind::Range);
    assert_eq!(result.issues[0].column.as_deref(), Some("age"));
}

#[test]
fn test_validate_category_violation() {
    let result = validate_contract(&people(vec![25], vec!["Seattle"]), &people_contract());

    assert!(!result.ok);
    let category: Vec<_> = result.issues_of(IssueKind::Category).collect();
    assert_eq!(category.len(), 1);
    assert!(category[0].message.contains("'Seattle'"));
}

#[test]
fn test_validate_or_fail_escalates() {
    let err = validate_or_fail(&people(vec![150], vec!["Seattle"]), &people_contract())
        .unwrap_err();

    assert_eq!(err.to_string(), "Contract 'test_contract' violated with 2 issue(s)");
}

#[test]
fn test_compare_added_and_removed() {
    let a = Contract::new("a").with_column("age", ColumnRule::new("int64"));
    let b = Contract::new("b").with_column("height", ColumnRule::new("int64"));

    let report = compare_contracts(&a, &b).unwrap();
    assert_eq!(report.added_columns, names(&["height"]));
    assert_eq!(report.removed_columns, names(&["age"]));
    assert!(report.has_drift());
}

#[test]
fn test_compare_inferred_batches() {
    let week_one = people(vec![20, 30, 40], vec!["Vancouver", "Toronto", "Toronto"]);
    let week_two = DataSet::from_columns(vec![
        Column::new("age", [22.5_f64, 31.0, 90.0]),
        Column::new("city", ["Vancouver", "Toronto", "Montreal"]),
    ])
    .unwrap();

    let report = compare_contracts(&infer_contract(&week_one), &infer_contract(&week_two)).unwrap();

    assert_eq!(
        report.dtype_changes.get("age"),
        Some(&("int64".to_string(), "float64".to_string()))
    );
    assert!(report.range_changes.is_empty());
    assert_eq!(report.category_changes, names(&["city"]));
    assert!(report.missingness_changes.is_empty());
}

#[test]
fn test_compare_rejects_inverted_bounds() {
    let bad = Contract::new("bad").with_column(
        "age",
        ColumnRule {
            min_value: Some(10.0),
            max_value: Some(1.0),
            ..ColumnRule::new("int64")
        },
    );

    let err = compare_contracts(&people_contract(), &bad).unwrap_err();
    assert!(matches!(err, ContractError::InvalidRule { ref column, .. } if column == "age"));
}

#[test]
fn test_summarize_default_severity_order() {
    let result = ValidationResult::from_issues(vec![
        Issue::missing_column("col1"),
        Issue::extra_column("col2"),
        Issue::dtype("col3", "object", "int64"),
        Issue::above_max("col4", 150.0, 100.0),
        Issue::category("col5", names(&["x"]), names(&["y"])),
        Issue::missingness("col6", 0.5, 0.0),
    ]);

    let summary = summarize_violations(&result, &SummaryOptions::new().with_top_k(6)).unwrap();
    let kinds: Vec<_> = summary.top_issues.iter().map(|i| i.kind).collect();
    assert_eq!(
        kinds,
        vec![
            IssueKind::MissingColumn,
            IssueKind::ExtraColumn,
            IssueKind::Dtype,
            IssueKind::Range,
            IssueKind::Category,
            IssueKind::Missingness,
        ]
    );
}

#[test]
fn test_summarize_validation_output() {
    let dataset = DataSet::from_columns(vec![
        Column::new("age", [Some(150_i64), None]),
        Column::new("city", ["Seattle", "Toronto"]),
        Column::new("extra", [1_i64, 2]),
    ])
    .unwrap();

    let result = DataValidator::new().validate(&dataset, &people_contract(), &ValidationContext::new());
    let summary = summarize_violations(&result, &SummaryOptions::new().with_top_k(2)).unwrap();

    assert!(!summary.ok);
    assert_eq!(summary.total_issues(), result.issues.len());
    assert_eq!(summary.top_issues.len(), 2);
    assert_eq!(summary.top_issues[0].kind, IssueKind::ExtraColumn);
    assert_eq!(summary.top_issues[1].kind, IssueKind::Range);
}

#[test]
fn test_summarize_with_partial_custom_weights() {
    let result = ValidationResult::from_issues(vec![
        Issue::missing_column("a"),
        Issue::missingness("b", 0.2, 0.1),
    ]);
    let options = SummaryOptions::new()
        .with_weights(SeverityWeights::custom([(IssueKind::Missingness, 2.0)]));

    let summary = summarize_violations(&result, &options).unwrap();
    assert_eq!(summary.top_issues[0].kind, IssueKind::Missingness);
    assert_eq!(summary.top_issues[1].kind, IssueKind::MissingColumn);
}
