//! `tabular-quality` is a small library for finding and repairing quality
//! problems in an in-memory tabular dataset of transaction-style records.
//!
//! The two entry points are:
//!
//! - [`analyze`]: read-only anomaly detection — statistical outliers over a
//!   numeric amount column (IQR fence and 3-sigma threshold), structural
//!   shape checks on identifier/date/category fields, and identifier-keyed
//!   duplicate detection, assembled into one flat [`report::AnomalyReport`].
//! - [`repair`]: produces a cleaned copy of the table — missing values
//!   imputed (mean for numeric columns, most-frequent for categorical),
//!   fully duplicate rows removed — plus before/after statistics in a
//!   [`report::RepairReport`].
//!
//! Both operate on an in-memory [`types::Table`] whose cells are tagged
//! [`types::Value`]s with an explicit missing marker. Neither entry point
//! mutates its input or touches a filesystem; file handling belongs to the
//! caller, with [`ingestion`] available as a schema-less CSV/JSON loader.
//!
//! ## Example: detect anomalies
//!
//! ```rust
//! use tabular_quality::schema::AuditSchema;
//! use tabular_quality::types::{Table, Value};
//!
//! # fn main() -> Result<(), tabular_quality::QualityError> {
//! let table = Table::new(
//!     vec!["Transaction ID".to_string(), "Amount".to_string()],
//!     vec![
//!         vec![Value::Int64(1), Value::Int64(10)],
//!         vec![Value::Int64(2), Value::Int64(12)],
//!         vec![Value::Int64(3), Value::Int64(11)],
//!         vec![Value::Int64(4), Value::Int64(13)],
//!         vec![Value::Int64(5), Value::Int64(1000)],
//!     ],
//! );
//!
//! let report = tabular_quality::analyze(&table, &AuditSchema::default())?;
//! assert_eq!(report.anomalies_found, 1);
//! assert_eq!(report.anomalies[0].row_index, 4);
//! # Ok(())
//! # }
//! ```
//!
//! ## Example: repair a table
//!
//! ```rust
//! use tabular_quality::types::{Table, Value};
//!
//! let table = Table::new(
//!     vec!["Amount".to_string(), "Category".to_string()],
//!     vec![
//!         vec![Value::Int64(1), Value::Utf8("a".to_string())],
//!         vec![Value::Null, Value::Utf8("a".to_string())],
//!         vec![Value::Int64(2), Value::Null],
//!         vec![Value::Int64(3), Value::Utf8("b".to_string())],
//!     ],
//! );
//!
//! let report = tabular_quality::repair(&table);
//! // mean of [1, 2, 3]
//! assert_eq!(report.repaired_table.rows[1][0], Value::Float64(2.0));
//! // most frequent category
//! assert_eq!(report.repaired_table.rows[2][1], Value::Utf8("a".to_string()));
//! assert_eq!(report.duplicate_row_count, 0);
//! ```
//!
//! ## Modules
//!
//! - [`types`]: the in-memory table and tagged cell values
//! - [`schema`]: required-column validation and configurable column names
//! - [`coerce`]: total numeric coercion of a column
//! - [`detect`]: the analyze path (statistical + structural detectors)
//! - [`repair`]: the repair path (imputation + deduplication)
//! - [`report`]: report payload types
//! - [`ingestion`]: schema-less CSV/JSON loading into a table
//! - [`error`]: error types used across the crate

pub mod coerce;
pub mod detect;
pub mod error;
pub mod ingestion;
pub mod repair;
pub mod report;
pub mod schema;
pub mod types;

pub use detect::analyze;
pub use error::{QualityError, QualityResult};
pub use repair::repair;
pub use report::{AnomalyRecord, AnomalyReport, Fence, MissingValueSummary, RepairReport};
