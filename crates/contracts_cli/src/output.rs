use anyhow::Result;
use colored::*;
use contracts_core::{ColumnRule, Contract, DriftReport, Summary, ValidationResult};
use serde_json::json;
use std::collections::BTreeSet;

pub fn is_json(format: &str) -> bool {
    format == "json"
}

pub fn print_validation_report(
    contract: &str,
    result: &ValidationResult,
    summary: &Summary,
    format: &str,
) -> Result<()> {
    match format {
        "json" => print_json_report(contract, result, summary),
        _ => {
            print_text_report(contract, result, summary);
            Ok(())
        }
    }
}

fn print_text_report(contract: &str, result: &ValidationResult, summary: &Summary) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));
    println!("  Contract: {}", contract);

    if result.ok {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if !summary.top_issues.is_empty() {
        println!("\n{}", "Top issues:".red().bold());
        for (i, issue) in summary.top_issues.iter().enumerate() {
            println!("  {}. {}", i + 1, issue.to_string().red());
        }
    }

    if !summary.counts_by_kind.is_empty() {
        println!("\n{}", "Issues by kind:".yellow().bold());
        for (kind, count) in &summary.counts_by_kind {
            println!("  {:<16} {}", kind.as_str(), count);
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Total issues: {}", result.issues.len());
    println!("  Shown:        {}", summary.top_issues.len());
    println!("{}", "═".repeat(60));
}

fn print_json_report(contract: &str, result: &ValidationResult, summary: &Summary) -> Result<()> {
    let output = json!({
        "contract": contract,
        "ok": result.ok,
        "issues": serde_json::to_value(&result.issues)?,
        "summary": serde_json::to_value(summary)?,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn print_drift_report(
    baseline: &str,
    observed: &str,
    report: &DriftReport,
    format: &str,
) -> Result<()> {
    if is_json(format) {
        let output = json!({
            "baseline": baseline,
            "observed": observed,
            "has_drift": report.has_drift(),
            "report": serde_json::to_value(report)?,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("\n{}", "═".repeat(60));
    println!("{}", "  DRIFT REPORT".bold());
    println!("{}", "═".repeat(60));
    println!("  Baseline: {}", baseline);
    println!("  Observed: {}", observed);

    if !report.has_drift() {
        println!("\n{} {}", "✓".green().bold(), "No drift detected".green().bold());
        println!("{}", "═".repeat(60));
        return Ok(());
    }

    println!(
        "\n{} {}",
        "⚠".yellow().bold(),
        format!("Drift detected ({} change(s))", report.change_count())
            .yellow()
            .bold()
    );

    print_column_set("Added columns:", &report.added_columns);
    print_column_set("Removed columns:", &report.removed_columns);

    if !report.dtype_changes.is_empty() {
        println!("\n{}", "Dtype changes:".bold());
        for (column, (old, new)) in &report.dtype_changes {
            println!("  {}: {} → {}", column, old, new.red());
        }
    }

    print_column_set("Range changes:", &report.range_changes);
    print_column_set("Category changes:", &report.category_changes);

    if !report.missingness_changes.is_empty() {
        println!("\n{}", "Missingness changes:".bold());
        for (column, (old, new)) in &report.missingness_changes {
            println!("  {}: {:.2}% → {:.2}%", column, old * 100.0, new * 100.0);
        }
    }

    println!("{}", "═".repeat(60));
    Ok(())
}

fn print_column_set(title: &str, columns: &BTreeSet<String>) {
    if columns.is_empty() {
        return;
    }
    println!("\n{}", title.bold());
    println!(
        "  {}",
        columns.iter().cloned().collect::<Vec<_>>().join(", ")
    );
}

pub fn print_contract_summary(contract: &Contract, format: &str) -> Result<()> {
    if is_json(format) {
        let output = json!({
            "valid": true,
            "contract": serde_json::to_value(contract)?,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_success("Contract is well formed");

    println!("\nContract Summary:");
    println!("  Name:    {}", contract.name);
    println!("  Columns: {}", contract.len());

    for (column, rule) in &contract.columns {
        println!("  - {:<20} {}", column, describe_rule(rule));
    }

    Ok(())
}

fn describe_rule(rule: &ColumnRule) -> String {
    let mut parts = vec![
        rule.dtype.clone(),
        format!("missing ≤ {:.2}%", rule.max_missing_frac * 100.0),
    ];

    if rule.has_bounds() {
        let min = rule.min_value.map_or("-∞".to_string(), |v| v.to_string());
        let max = rule.max_value.map_or("∞".to_string(), |v| v.to_string());
        parts.push(format!("range [{}, {}]", min, max));
    }

    if let Some(allowed) = &rule.allowed_values {
        parts.push(format!("{} allowed value(s)", allowed.len()));
    }

    parts.join(", ")
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
