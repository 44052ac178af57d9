use anyhow::{Context, Result};
use contracts_core::{SummaryOptions, ValidationContext};
use contracts_parser::{parse_file, parse_weights_file};
use contracts_validator::{DataValidator, read_csv, summarize_violations};
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(
    data_path: &str,
    contract_path: &str,
    strict: bool,
    top_k: usize,
    weights_path: Option<&str>,
    format: &str,
) -> Result<()> {
    info!("Validating {} against contract: {}", data_path, contract_path);
    info!("Strict mode: {}", strict);

    let mut options = SummaryOptions::new().with_top_k(top_k);
    if let Some(path) = weights_path {
        let weights = parse_weights_file(Path::new(path))
            .with_context(|| format!("Failed to parse weights file: {}", path))?;
        options = options.with_weights(weights);
    }
    options.check().context("Invalid summary options")?;

    // Parse the contract file
    let path = Path::new(contract_path);
    let contract = parse_file(path)
        .with_context(|| format!("Failed to parse contract file: {}", contract_path))?;

    let dataset =
        read_csv(data_path).with_context(|| format!("Failed to read data file: {}", data_path))?;

    if !output::is_json(format) {
        output::print_info(&format!(
            "Contract loaded: {} ({} column(s)), data: {} row(s)",
            contract.name,
            contract.len(),
            dataset.len()
        ));
    }

    let context = ValidationContext::new().with_strict(strict);
    let result = DataValidator::new().validate(&dataset, &contract, &context);
    let summary =
        summarize_violations(&result, &options).context("Failed to summarize violations")?;

    output::print_validation_report(&contract.name, &result, &summary, format)?;

    if !result.ok {
        std::process::exit(1);
    }

    Ok(())
}
