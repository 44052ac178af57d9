//! Data contract types.
//!
//! A [`Contract`] maps column names to [`ColumnRule`]s: the expected dtype,
//! the tolerated fraction of missing values, and either numeric bounds or a
//! set of allowed categorical values.

use crate::{ContractError, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Default display name of a contract.
pub const DEFAULT_CONTRACT_NAME: &str = "contract";

/// A data contract: per-column expectations for a tabular dataset.
///
/// Contracts are values. Changing one means building a new one, e.g. with
/// [`ContractBuilder`](crate::ContractBuilder) or [`Contract::with_name`].
///
/// # Example
///
/// ```rust
/// use contracts_core::{ColumnRule, Contract};
///
/// let contract = Contract::new("users")
///     .with_column("age", ColumnRule::new("int64").with_range(0.0, 120.0))
///     .with_column("city", ColumnRule::new("object").with_allowed_values(["Rome", "Oslo"]));
///
/// assert_eq!(contract.len(), 2);
/// assert!(contract.check().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    /// Display name of the contract
    #[serde(default = "default_contract_name")]
    pub name: String,

    /// Column name -> rule, in declaration order
    #[serde(default)]
    pub columns: IndexMap<String, ColumnRule>,
}

fn default_contract_name() -> String {
    DEFAULT_CONTRACT_NAME.to_string()
}

impl Contract {
    /// Creates an empty contract with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: IndexMap::new(),
        }
    }

    /// Returns a copy of this contract carrying an additional (or replaced) column rule.
    pub fn with_column(mut self, column: impl Into<String>, rule: ColumnRule) -> Self {
        self.columns.insert(column.into(), rule);
        self
    }

    /// Returns this contract under a different name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Returns the rule for a column, if declared.
    pub fn rule(&self, column: &str) -> Option<&ColumnRule> {
        self.columns.get(column)
    }

    /// Returns true if the contract declares the column.
    pub fn contains(&self, column: &str) -> bool {
        self.columns.contains_key(column)
    }

    /// Iterates over declared column names in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Number of declared columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if no column is declared.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Checks that every rule is well formed, in declaration order.
    ///
    /// # Errors
    ///
    /// Returns the error of the first offending rule; see [`ColumnRule::check`].
    pub fn check(&self) -> Result<()> {
        for (column, rule) in &self.columns {
            rule.check(column)?;
        }
        Ok(())
    }
}

impl Default for Contract {
    fn default() -> Self {
        Self::new(DEFAULT_CONTRACT_NAME)
    }
}

/// Numeric bounds are written as plain numbers when finite and as the strings
/// `"inf"`, `"-inf"` or `"nan"` otherwise, since JSON has no literal for
/// non-finite values. Reading accepts either form, including native YAML
/// and TOML infinities.
mod bound {
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            None => serializer.serialize_none(),
            Some(v) if v.is_finite() => serializer.serialize_some(v),
            Some(v) if v.is_nan() => serializer.serialize_some("nan"),
            Some(v) if v.is_sign_positive() => serializer.serialize_some("inf"),
            Some(_) => serializer.serialize_some("-inf"),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
        match Option::<Repr>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Repr::Number(v)) => Ok(Some(v)),
            Some(Repr::Text(text)) => match text.trim().to_ascii_lowercase().as_str() {
                "inf" | "+inf" | "infinity" | "+infinity" | ".inf" => Ok(Some(f64::INFINITY)),
                "-inf" | "-infinity" | "-.inf" => Ok(Some(f64::NEG_INFINITY)),
                "nan" | ".nan" => Ok(Some(f64::NAN)),
                _ => Err(de::Error::invalid_value(
                    de::Unexpected::Str(&text),
                    &"a number, \"inf\", \"-inf\" or \"nan\"",
                )),
            },
        }
    }
}

/// Expectations for a single column.
///
/// A rule carries numeric bounds, an allowed-value set, or neither; never
/// both. Unset optional fields are distinct from empty ones: `allowed_values:
/// Some({})` allows nothing, `None` disables the category check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnRule {
    /// Expected dtype name (e.g. "int64", "float64", "object", "category", "bool")
    pub dtype: String,

    /// Maximum tolerated fraction of missing values, in [0, 1]
    #[serde(default)]
    pub max_missing_frac: f64,

    /// Inclusive lower bound for numeric columns
    #[serde(default, skip_serializing_if = "Option::is_none", with = "bound")]
    pub min_value: Option<f64>,

    /// Inclusive upper bound for numeric columns
    #[serde(default, skip_serializing_if = "Option::is_none", with = "bound")]
    pub max_value: Option<f64>,

    /// Allowed values (string representation) for categorical-like columns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<BTreeSet<String>>,
}

impl ColumnRule {
    /// Creates a rule with only a dtype: no missing values tolerated, no bounds, no domain.
    pub fn new(dtype: impl Into<String>) -> Self {
        Self {
            dtype: dtype.into(),
            max_missing_frac: 0.0,
            min_value: None,
            max_value: None,
            allowed_values: None,
        }
    }

    /// Sets the tolerated missing fraction.
    pub fn with_max_missing_frac(mut self, frac: f64) -> Self {
        self.max_missing_frac = frac;
        self
    }

    /// Sets both numeric bounds.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    /// Sets the lower bound only.
    pub fn with_min_value(mut self, min: f64) -> Self {
        self.min_value = Some(min);
        self
    }

    /// Sets the upper bound only.
    pub fn with_max_value(mut self, max: f64) -> Self {
        self.max_value = Some(max);
        self
    }

    /// Sets the allowed-value set.
    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Returns true if either numeric bound is set.
    pub fn has_bounds(&self) -> bool {
        self.min_value.is_some() || self.max_value.is_some()
    }

    /// Checks that the rule is well formed.
    ///
    /// # Errors
    ///
    /// * [`ContractError::MalformedRule`] if the rule carries both bounds and an allowed set
    /// * [`ContractError::InvalidRule`] if `max_missing_frac` is NaN or outside [0, 1],
    ///   if a bound is NaN, or if `min_value > max_value`
    pub fn check(&self, column: &str) -> Result<()> {
        if self.has_bounds() && self.allowed_values.is_some() {
            return Err(ContractError::malformed_rule(
                column,
                "numeric bounds and allowed_values are mutually exclusive",
            ));
        }

        if self.max_missing_frac.is_nan() {
            return Err(ContractError::invalid_rule(
                column,
                "max_missing_frac must be numeric",
            ));
        }
        if !(0.0..=1.0).contains(&self.max_missing_frac) {
            return Err(ContractError::invalid_rule(
                column,
                format!(
                    "max_missing_frac must be between 0 and 1, got {}",
                    self.max_missing_frac
                ),
            ));
        }

        for (label, bound) in [("min_value", self.min_value), ("max_value", self.max_value)] {
            if bound.is_some_and(f64::is_nan) {
                return Err(ContractError::invalid_rule(
                    column,
                    format!("{label} must be numeric"),
                ));
            }
        }

        if let (Some(min), Some(max)) = (self.min_value, self.max_value) {
            if min > max {
                return Err(ContractError::invalid_rule(
                    column,
                    format!("min_value ({min}) cannot exceed max_value ({max})"),
                ));
            }
        }

        Ok(())
    }
}
