//! Report payload types produced by the analyze and repair paths.
//!
//! These are pure output values. They serialize to the JSON shapes an
//! upload-handling shell returns to its clients; the repaired table itself is
//! skipped during serialization because the shell persists it separately and
//! reports its location.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::types::{Table, Value};

/// One flagged finding for one row.
///
/// A single row may contribute multiple records, one per triggered rule; the
/// report is a flat list, not one-record-per-row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyRecord {
    /// Zero-based positional index of the row in the analyzed table.
    pub row_index: usize,
    /// The full row's field→value mapping.
    pub data: BTreeMap<String, Value>,
    /// Human-readable explanation of the single rule that fired.
    pub reason: String,
}

/// Numeric bounds outside which a value is classified an outlier.
///
/// Derived per numeric column per run; recomputed each analysis, never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fence {
    /// Lower bound (`Q1 - 1.5 * IQR`).
    pub lower: f64,
    /// Upper bound (`Q3 + 1.5 * IQR`).
    pub upper: f64,
}

impl Fence {
    /// True if `value` lies outside `[lower, upper]`.
    pub fn excludes(&self, value: f64) -> bool {
        value < self.lower || value > self.upper
    }
}

/// Result of the read-only analyze path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnomalyReport {
    /// Processing status line.
    pub status: String,
    /// Total number of records in `anomalies`. A row contributing three
    /// reasons counts three times.
    pub anomalies_found: usize,
    /// Statistical findings first, structural row-rule findings second,
    /// duplicates last; each group in row order.
    pub anomalies: Vec<AnomalyRecord>,
}

/// Column name → count of missing cells, computed before imputation.
pub type MissingValueSummary = BTreeMap<String, usize>;

/// Result of the repair path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepairReport {
    /// Per-column missing-cell counts of the input table.
    pub missing_values: MissingValueSummary,
    /// Number of fully duplicate rows removed by deduplication.
    pub duplicate_row_count: usize,
    /// Coarse column-level flags: negative-value findings and columns that
    /// could not be imputed.
    pub column_anomalies: BTreeMap<String, String>,
    /// The cleaned table (imputed, then deduplicated). The shell persists
    /// this; it is not part of the JSON payload.
    #[serde(skip)]
    pub repaired_table: Table,
}
