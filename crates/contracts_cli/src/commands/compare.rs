use anyhow::{Context, Result};
use contracts_parser::parse_file;
use contracts_validator::compare_contracts;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    baseline_path: &str,
    observed_path: &str,
    fail_on_drift: bool,
    format: &str,
) -> Result<()> {
    info!("Comparing {} with {}", baseline_path, observed_path);

    let baseline = parse_file(Path::new(baseline_path))
        .with_context(|| format!("Failed to parse contract file: {}", baseline_path))?;
    let observed = parse_file(Path::new(observed_path))
        .with_context(|| format!("Failed to parse contract file: {}", observed_path))?;

    let report = compare_contracts(&baseline, &observed).context("Failed to compare contracts")?;

    output::print_drift_report(&baseline.name, &observed.name, &report, format)?;

    if fail_on_drift && report.has_drift() {
        std::process::exit(1);
    }

    Ok(())
}
