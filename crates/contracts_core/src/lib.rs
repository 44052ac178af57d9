//! # Data Contracts Core
//!
//! Core data structures for tabular data contracts.
//!
//! A data contract captures what a "good" dataset looks like: the columns it
//! has, their dtypes, how many values may be missing, numeric bounds and
//! categorical domains. Contracts are inferred from sample data, used to
//! validate new data, and compared against each other to detect drift.
//!
//! ## Key Concepts
//!
//! - **Contract**: column name -> [`ColumnRule`] mapping with a display name
//! - **Issue**: one violation found while validating a dataset
//! - **DriftReport**: differences between a baseline and an observed contract
//! - **Summary**: issues ranked by severity and counted by kind
//! - **TabularData / ColumnView**: the read-only adapter datasets implement
//!
//! ## Example
//!
//! ```rust
//! use contracts_core::{ColumnRule, Contract, Issue, IssueKind, ValidationResult};
//!
//! let contract = Contract::new("user_events")
//!     .with_column("user_id", ColumnRule::new("object"))
//!     .with_column("age", ColumnRule::new("int64").with_range(0.0, 120.0));
//!
//! let result = ValidationResult::from_issues(vec![Issue::missing_column("user_id")]);
//! assert!(!result.ok);
//! assert_eq!(result.issues[0].kind, IssueKind::MissingColumn);
//! # assert!(contract.check().is_ok());
//! ```

pub mod builder;
pub mod context;
pub mod contract;
pub mod drift;
pub mod dtype;
pub mod error;
pub mod issue;
pub mod summary;
pub mod tabular;

pub use builder::*;
pub use context::*;
pub use contract::*;
pub use drift::*;
pub use error::*;
pub use issue::*;
pub use summary::*;
pub use tabular::*;
