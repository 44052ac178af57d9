use anyhow::{Context, Result};
use contracts_parser::parse_file;
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(contract_path: &str, format: &str) -> Result<()> {
    info!("Checking contract: {}", contract_path);

    // Parse the contract file
    let path = Path::new(contract_path);
    let contract = parse_file(path)
        .with_context(|| format!("Failed to parse contract file: {}", contract_path))?;

    contract
        .check()
        .with_context(|| format!("Contract '{}' is not well formed", contract.name))?;

    output::print_contract_summary(&contract, format)
}
