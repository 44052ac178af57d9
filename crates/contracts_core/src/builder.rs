//! Builder pattern for creating data contracts.

use crate::{ColumnRule, Contract, DEFAULT_CONTRACT_NAME, Result};
use indexmap::IndexMap;

/// Builder for creating a `Contract`.
///
/// # Example
///
/// ```rust
/// use contracts_core::{ColumnRule, ContractBuilder};
///
/// let contract = ContractBuilder::new("user_events")
///     .column("user_id", ColumnRule::new("object"))
///     .column("age", ColumnRule::new("int64").with_range(0.0, 120.0))
///     .build_checked()
///     .expect("well-formed contract");
///
/// assert_eq!(contract.name, "user_events");
/// assert_eq!(contract.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ContractBuilder {
    name: Option<String>,
    columns: IndexMap<String, ColumnRule>,
}

impl ContractBuilder {
    /// Creates a new contract builder.
    ///
    /// # Arguments
    ///
    /// * `name` - Display name of the contract
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Sets the contract name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a column rule. A later rule for the same column replaces the earlier one.
    pub fn column(mut self, column: impl Into<String>, rule: ColumnRule) -> Self {
        self.columns.insert(column.into(), rule);
        self
    }

    /// Adds multiple column rules.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = (S, ColumnRule)>,
        S: Into<String>,
    {
        self.columns
            .extend(columns.into_iter().map(|(name, rule)| (name.into(), rule)));
        self
    }

    /// Builds the contract. An unnamed builder yields the default name.
    pub fn build(self) -> Contract {
        Contract {
            name: self
                .name
                .unwrap_or_else(|| DEFAULT_CONTRACT_NAME.to_string()),
            columns: self.columns,
        }
    }

    /// Builds the contract and checks that every rule is well formed.
    ///
    /// # Errors
    ///
    /// Returns the first rule error found; see [`Contract::check`].
    pub fn build_checked(self) -> Result<Contract> {
        let contract = self.build();
        contract.check()?;
        Ok(contract)
    }
}
