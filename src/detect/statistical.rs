//! Statistical outlier detection over a single numeric column.
//!
//! Two independent fences are computed from the column's non-missing values:
//!
//! - an interquartile-range fence `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`, with
//!   quartiles taken by linear interpolation over the sorted values;
//! - a standard-deviation threshold of three sample standard deviations
//!   around the mean.
//!
//! Per row, the first matching reason wins: a missing amount is flagged as
//! missing and skips the numeric checks entirely (a missing value cannot be
//! compared against a fence), an IQR violation shadows the std-dev check.
//!
//! The column is expected to be numerically coerced first (see
//! [`crate::coerce::coerce_numeric`]); any text that survives here counts as
//! missing.

use crate::error::{QualityError, QualityResult};
use crate::report::{AnomalyRecord, Fence};
use crate::types::{Table, Value};

/// Fence and moments of one numeric column's non-missing values.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    /// IQR fence.
    pub fence: Fence,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation; `None` with fewer than 2 values, in which
    /// case the std-dev check is skipped rather than failing.
    pub std_dev: Option<f64>,
}

/// Outcome of scanning one column.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlierFindings {
    /// Computed statistics; `None` when the column has no non-missing values
    /// (every row is then flagged as missing).
    pub stats: Option<ColumnStats>,
    /// One record per row that hit a rule, in row order.
    pub records: Vec<AnomalyRecord>,
}

/// Scan `column` of `table` for statistical outliers and missing values.
pub fn detect_outliers(table: &Table, column: &str) -> QualityResult<OutlierFindings> {
    let idx = table
        .index_of(column)
        .ok_or_else(|| QualityError::UnknownColumn {
            column: column.to_string(),
        })?;

    let values: Vec<f64> = table
        .column_values(idx)
        .filter_map(Value::as_f64)
        .collect();
    let stats = column_stats(&values);

    let mut records = Vec::new();
    for (row_index, row) in table.rows.iter().enumerate() {
        let reason = match row.get(idx).and_then(Value::as_f64) {
            None => Some("Missing amount value".to_string()),
            Some(x) => stats.as_ref().and_then(|s| classify(x, s)),
        };
        if let Some(reason) = reason {
            records.push(AnomalyRecord {
                row_index,
                data: table.row_map(row_index),
                reason,
            });
        }
    }

    Ok(OutlierFindings { stats, records })
}

/// At most one reason per value: IQR fence first, then the std-dev threshold.
fn classify(x: f64, stats: &ColumnStats) -> Option<String> {
    if stats.fence.excludes(x) {
        return Some(format!(
            "Amount {x} is outside expected range ({:.2} - {:.2})",
            stats.fence.lower, stats.fence.upper
        ));
    }
    if let Some(sd) = stats.std_dev {
        if (x - stats.mean).abs() > 3.0 * sd {
            return Some(
                "Amount deviates significantly from the average (Std Dev method)".to_string(),
            );
        }
    }
    None
}

/// Compute fence, mean, and sample std dev over `values`.
///
/// Returns `None` for an empty slice. A single value yields a degenerate
/// fence `[v, v]` and no std dev; an IQR of 0 yields identical bounds, so
/// every value outside them is flagged — intended behavior for constant
/// columns with stray values.
pub fn column_stats(values: &[f64]) -> Option<ColumnStats> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let q1 = quantile(&sorted, 0.25);
    let q3 = quantile(&sorted, 0.75);
    let iqr = q3 - q1;
    let fence = Fence {
        lower: q1 - 1.5 * iqr,
        upper: q3 + 1.5 * iqr,
    };

    let n = values.len();
    let mean = values.iter().sum::<f64>() / n as f64;
    let std_dev = if n >= 2 {
        let ss = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
        Some((ss / (n - 1) as f64).sqrt())
    } else {
        None
    };

    Some(ColumnStats {
        fence,
        mean,
        std_dev,
    })
}

/// Linearly interpolated quantile over pre-sorted values, `q` in `[0, 1]`.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let h = (sorted.len() - 1) as f64 * q;
    let lo = h.floor() as usize;
    let frac = h - lo as f64;
    if lo + 1 < sorted.len() {
        sorted[lo] + frac * (sorted[lo + 1] - sorted[lo])
    } else {
        sorted[lo]
    }
}
