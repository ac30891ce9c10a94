//! The repair path: produce a cleaned table plus before/after statistics.
//!
//! Steps, in order, all on private copies of the input:
//!
//! 1. count missing values per column (pre-imputation summary);
//! 2. scan numeric columns for negative values (coarse column-level flags,
//!    independent of the row-level outlier detector);
//! 3. impute missing values ([`impute`]);
//! 4. remove fully duplicate rows ([`dedupe`]).
//!
//! The repair operation is a pure function of its input: re-running it on its
//! own output reports zero missing values and zero duplicates.

pub mod dedupe;
pub mod impute;

use std::collections::BTreeMap;

use crate::report::{MissingValueSummary, RepairReport};
use crate::types::{ColumnKind, Table};

/// Repair `table`: impute missing values, drop duplicate rows, and report
/// what was found. The caller's table is never mutated; persisting
/// `repaired_table` is the caller's concern.
pub fn repair(table: &Table) -> RepairReport {
    let missing_values = missing_summary(table);

    let mut column_anomalies = negative_value_scan(table);

    let imputed = impute::impute(table);
    column_anomalies.extend(imputed.failures);

    let (repaired_table, duplicate_row_count) = dedupe::dedupe(&imputed.table);

    RepairReport {
        missing_values,
        duplicate_row_count,
        column_anomalies,
        repaired_table,
    }
}

/// Per-column missing-cell counts, computed before any imputation.
fn missing_summary(table: &Table) -> MissingValueSummary {
    let mut summary = BTreeMap::new();
    for (col_idx, name) in table.columns.iter().enumerate() {
        let missing = table
            .column_values(col_idx)
            .filter(|v| v.is_null())
            .count();
        summary.insert(name.clone(), missing);
    }
    summary
}

/// Flag every numeric column containing a negative non-missing value.
fn negative_value_scan(table: &Table) -> BTreeMap<String, String> {
    let mut anomalies = BTreeMap::new();
    for (col_idx, name) in table.columns.iter().enumerate() {
        if table.infer_kind(col_idx) != ColumnKind::Numeric {
            continue;
        }
        let has_negative = table
            .column_values(col_idx)
            .filter_map(|v| v.as_f64())
            .any(|x| x < 0.0);
        if has_negative {
            anomalies.insert(name.clone(), "Negative values detected".to_string());
        }
    }
    anomalies
}

#[cfg(test)]
mod tests {
    use super::repair;
    use crate::types::{Table, Value};

    fn sample_table() -> Table {
        Table::new(
            vec!["Amount".to_string(), "Category".to_string()],
            vec![
                vec![Value::Int64(10), Value::Utf8("food".to_string())],
                vec![Value::Null, Value::Utf8("food".to_string())],
                vec![Value::Int64(-5), Value::Null],
                vec![Value::Int64(10), Value::Utf8("food".to_string())],
                vec![Value::Int64(10), Value::Utf8("food".to_string())],
            ],
        )
    }

    #[test]
    fn reports_missing_counts_before_imputation() {
        let report = repair(&sample_table());
        assert_eq!(report.missing_values["Amount"], 1);
        assert_eq!(report.missing_values["Category"], 1);
    }

    #[test]
    fn flags_negative_numeric_columns() {
        let report = repair(&sample_table());
        assert_eq!(
            report.column_anomalies["Amount"],
            "Negative values detected"
        );
        assert!(!report.column_anomalies.contains_key("Category"));
    }

    #[test]
    fn imputes_then_removes_duplicates() {
        let report = repair(&sample_table());
        // mean of [10, -5, 10, 10] = 6.25; mode of Category = "food"
        assert_eq!(report.repaired_table.rows[1][0], Value::Float64(6.25));
        assert_eq!(
            report.repaired_table.rows[2][1],
            Value::Utf8("food".to_string())
        );
        // rows 3 and 4 duplicate row 0 exactly
        assert_eq!(report.duplicate_row_count, 2);
        assert_eq!(report.repaired_table.row_count(), 3);
    }

    #[test]
    fn repair_is_idempotent() {
        let first = repair(&sample_table());
        let second = repair(&first.repaired_table);
        assert!(second.missing_values.values().all(|&n| n == 0));
        assert_eq!(second.duplicate_row_count, 0);
        assert_eq!(second.repaired_table, first.repaired_table);
    }

    #[test]
    fn input_table_is_not_mutated() {
        let t = sample_table();
        let before = t.clone();
        let _ = repair(&t);
        assert_eq!(t, before);
    }
}
