//! Persisted representations of data contracts (YAML/TOML/JSON formats).
//!
//! This module reads and writes [`Contract`]s and severity weight tables.
//! The representation is lossless: unset optional fields are omitted and read
//! back as unset, while an empty allowed-value set is written as an empty list
//! and read back as an empty set.
//!
//! # Example
//!
//! ```rust
//! use contracts_parser::parse_yaml;
//!
//! let yaml = r#"
//! name: user_events
//! columns:
//!   age:
//!     dtype: int64
//!     max_missing_frac: 0.0
//!     min_value: 0
//!     max_value: 120
//!   country:
//!     dtype: object
//!     allowed_values: [CA, US]
//! "#;
//!
//! let contract = parse_yaml(yaml).expect("Failed to parse contract");
//! assert_eq!(contract.name, "user_events");
//! assert_eq!(contract.rule("age").unwrap().max_value, Some(120.0));
//! ```

use contracts_core::{Contract, SeverityWeights};
use serde::de::DeserializeOwned;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading or writing contracts.
#[derive(Debug, Error)]
pub enum ParserError {
    /// YAML parsing or (de)serialization failed
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml_ng::Error),

    /// TOML parsing or (de)serialization failed
    #[error("Failed to parse TOML: {0}")]
    TomlError(String),

    /// JSON parsing or (de)serialization failed
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    /// File I/O error
    #[error("File I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Unsupported file format
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    /// Invalid file extension
    #[error("Invalid or missing file extension")]
    InvalidExtension,
}

/// Result type alias for parser operations.
pub type Result<T> = std::result::Result<T, ParserError>;

/// Supported contract file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContractFormat {
    /// YAML format (.yml, .yaml)
    Yaml,
    /// TOML format (.toml)
    Toml,
    /// JSON format (.json)
    Json,
}

/// Parse a contract from a YAML string.
///
/// # Example
///
/// ```rust
/// use contracts_parser::parse_yaml;
///
/// let yaml = r#"
/// name: my_dataset
/// columns:
///   id:
///     dtype: int64
/// "#;
///
/// let contract = parse_yaml(yaml).unwrap();
/// assert_eq!(contract.name, "my_dataset");
/// assert_eq!(contract.rule("id").unwrap().max_missing_frac, 0.0);
/// ```
pub fn parse_yaml(content: &str) -> Result<Contract> {
    deserialize(content, ContractFormat::Yaml)
}

/// Parse a contract from a TOML string.
///
/// # Example
///
/// ```rust
/// use contracts_parser::parse_toml;
///
/// let toml = r#"
/// name = "my_dataset"
///
/// [columns.id]
/// dtype = "int64"
/// min_value = 1.0
/// "#;
///
/// let contract = parse_toml(toml).unwrap();
/// assert_eq!(contract.name, "my_dataset");
/// assert_eq!(contract.rule("id").unwrap().min_value, Some(1.0));
/// ```
pub fn parse_toml(content: &str) -> Result<Contract> {
    deserialize(content, ContractFormat::Toml)
}

/// Parse a contract from a JSON string.
pub fn parse_json(content: &str) -> Result<Contract> {
    deserialize(content, ContractFormat::Json)
}

/// Detect the contract format from a file path based on its extension.
///
/// # Supported Extensions
///
/// * `.yaml`, `.yml` → `ContractFormat::Yaml`
/// * `.toml` → `ContractFormat::Toml`
/// * `.json` → `ContractFormat::Json`
///
/// # Errors
///
/// Returns `ParserError::InvalidExtension` if the file has no extension.
/// Returns `ParserError::UnsupportedFormat` if the extension is not recognized.
pub fn detect_format(path: &Path) -> Result<ContractFormat> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .ok_or(ParserError::InvalidExtension)?;

    match extension.to_lowercase().as_str() {
        "yaml" | "yml" => Ok(ContractFormat::Yaml),
        "toml" => Ok(ContractFormat::Toml),
        "json" => Ok(ContractFormat::Json),
        other => Err(ParserError::UnsupportedFormat(other.to_string())),
    }
}

/// Parse a contract from a file with automatic format detection.
///
/// # Example
///
/// ```no_run
/// use contracts_parser::parse_file;
/// use std::path::Path;
///
/// let contract = parse_file(Path::new("contracts/user_events.yml")).unwrap();
/// println!("Loaded contract: {}", contract.name);
/// ```
pub fn parse_file(path: &Path) -> Result<Contract> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    deserialize(&content, format)
}

/// Parse a severity weight table (issue kind → weight) from a file.
///
/// Values are not checked here; see [`SeverityWeights::check`].
pub fn parse_weights_file(path: &Path) -> Result<SeverityWeights> {
    let format = detect_format(path)?;
    let content = std::fs::read_to_string(path)?;
    deserialize(&content, format)
}

/// Serialize a contract in the given format.
pub fn to_string(contract: &Contract, format: ContractFormat) -> Result<String> {
    let content = match format {
        ContractFormat::Yaml => serde_yaml_ng::to_string(contract)?,
        ContractFormat::Toml => {
            toml::to_string(contract).map_err(|e| ParserError::TomlError(e.to_string()))?
        }
        ContractFormat::Json => {
            let mut json = serde_json::to_string_pretty(contract)?;
            json.push('\n');
            json
        }
    };
    Ok(content)
}

/// Write a contract to a file, choosing the format from its extension.
pub fn write_file(contract: &Contract, path: &Path) -> Result<()> {
    let format = detect_format(path)?;
    let content = to_string(contract, format)?;
    std::fs::write(path, content)?;
    Ok(())
}

fn deserialize<T: DeserializeOwned>(content: &str, format: ContractFormat) -> Result<T> {
    let value = match format {
        ContractFormat::Yaml => serde_yaml_ng::from_str(content)?,
        ContractFormat::Toml => {
            toml::from_str(content).map_err(|e| ParserError::TomlError(e.to_string()))?
        }
        ContractFormat::Json => serde_json::from_str(content)?,
    };
    Ok(value)
}
