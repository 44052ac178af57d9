use anyhow::{Context, Result};
use contracts_core::DEFAULT_CONTRACT_NAME;
use contracts_parser::{ContractFormat, to_string, write_file};
use contracts_validator::{infer_named_contract, read_csv};
use std::path::Path;
use tracing::info;

use crate::output;

pub fn execute(data_path: &str, name: Option<&str>, output_path: Option<&str>) -> Result<()> {
    info!("Inferring contract from: {}", data_path);

    let dataset =
        read_csv(data_path).with_context(|| format!("Failed to read data file: {}", data_path))?;

    let contract = infer_named_contract(&dataset, name.unwrap_or(DEFAULT_CONTRACT_NAME));

    if let Some(path) = output_path {
        write_file(&contract, Path::new(path))
            .with_context(|| format!("Failed to write contract file: {}", path))?;
        output::print_success(&format!(
            "Contract '{}' with {} column(s) written to: {}",
            contract.name,
            contract.len(),
            path
        ));
    } else {
        let yaml = to_string(&contract, ContractFormat::Yaml)
            .context("Failed to serialize contract to YAML")?;
        print!("{}", yaml);
    }

    Ok(())
}
