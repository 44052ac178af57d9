//! # Data Contracts Validator
//!
//! The operations of the contract engine, over any dataset exposing the
//! [`contracts_core::TabularData`] adapter:
//!
//! - Inference: derive a contract from a sample of good data
//! - Validation: check a dataset against a contract (schema, missingness, ranges, categories)
//! - Comparison: report drift between a baseline contract and an observed one
//! - Summarization: rank violations by severity and count them by kind
//!
//! It also ships an in-memory columnar [`DataSet`] and a CSV loader.
//!
//! ## Example
//!
//! ```rust
//! use contracts_core::{SummaryOptions, ValidationContext};
//! use contracts_validator::{
//!     Column, DataSet, DataValidator, compare_contracts, infer_contract, summarize_violations,
//! };
//!
//! let baseline = DataSet::from_columns(vec![
//!     Column::new("age", [25_i64, 40, 31]),
//!     Column::new("city", ["Vancouver", "Toronto", "Toronto"]),
//! ])
//! .unwrap();
//! let contract = infer_contract(&baseline);
//!
//! let batch = DataSet::from_columns(vec![
//!     Column::new("age", [Some(150_i64), None]),
//!     Column::new("city", ["Paris", "Toronto"]),
//! ])
//! .unwrap();
//!
//! let validator = DataValidator::new();
//! let result = validator.validate(&batch, &contract, &ValidationContext::new());
//! assert!(!result.ok);
//!
//! let summary = summarize_violations(&result, &SummaryOptions::new()).unwrap();
//! for issue in &summary.top_issues {
//!     println!("{issue}");
//! }
//!
//! let drift = compare_contracts(&contract, &infer_contract(&batch)).unwrap();
//! assert!(drift.has_drift());
//! ```

mod compare;
mod constraints;
mod dataset;
mod engine;
mod error;
mod infer;
mod loader;
mod quality;
mod schema;
mod summary;

pub use compare::*;
pub use constraints::*;
pub use dataset::*;
pub use engine::*;
pub use error::*;
pub use infer::*;
pub use loader::*;
pub use quality::*;
pub use schema::*;
pub use summary::*;
