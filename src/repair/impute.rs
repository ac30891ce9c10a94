//! Missing-value imputation.
//!
//! Strategy is selected by the column's inferred kind: arithmetic mean for
//! numeric columns, most-frequent value for categorical columns (ties broken
//! by first-encountered value in column order). A column with zero
//! non-missing values cannot be imputed; it is reported per-column and left
//! as-is, without aborting imputation of the other columns.

use std::collections::{BTreeMap, HashMap};

use crate::types::{ColumnKind, Table, Value, ValueKey};

/// Result of imputing a table.
#[derive(Debug, Clone, PartialEq)]
pub struct ImputeOutcome {
    /// New table with missing cells filled where possible.
    pub table: Table,
    /// Column → message for columns that could not be imputed.
    pub failures: BTreeMap<String, String>,
}

/// Fill missing values in every column that has any, returning a new table.
pub fn impute(table: &Table) -> ImputeOutcome {
    let mut out = table.clone();
    let mut failures = BTreeMap::new();

    for col_idx in 0..table.columns.len() {
        let missing = table
            .column_values(col_idx)
            .filter(|v| v.is_null())
            .count();
        if missing == 0 {
            continue;
        }

        let fill = match table.infer_kind(col_idx) {
            ColumnKind::Numeric => column_mean(table, col_idx).map(Value::Float64),
            ColumnKind::Categorical => most_frequent(table, col_idx),
        };

        match fill {
            Some(fill) => {
                for row in &mut out.rows {
                    if let Some(cell) = row.get_mut(col_idx) {
                        if cell.is_null() {
                            *cell = fill.clone();
                        }
                    }
                }
            }
            None => {
                failures.insert(
                    table.columns[col_idx].clone(),
                    "No non-missing values to impute from".to_string(),
                );
            }
        }
    }

    ImputeOutcome {
        table: out,
        failures,
    }
}

/// Mean of the column's numeric values; `None` if there are none.
fn column_mean(table: &Table, col_idx: usize) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in table.column_values(col_idx) {
        if let Some(x) = v.as_f64() {
            sum += x;
            n += 1;
        }
    }
    if n == 0 { None } else { Some(sum / n as f64) }
}

/// Most frequent non-missing value; ties break toward the value encountered
/// first in column order. `None` if every cell is missing.
fn most_frequent(table: &Table, col_idx: usize) -> Option<Value> {
    let mut counts: HashMap<ValueKey, usize> = HashMap::new();
    let mut first_seen: Vec<(ValueKey, Value)> = Vec::new();

    for v in table.column_values(col_idx) {
        if v.is_null() {
            continue;
        }
        let key = v.key();
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            first_seen.push((key, v.clone()));
        }
        *count += 1;
    }

    let mut best: Option<(usize, &Value)> = None;
    for (key, value) in &first_seen {
        let count = counts[key];
        if best.map(|(c, _)| count > c).unwrap_or(true) {
            best = Some((count, value));
        }
    }
    best.map(|(_, v)| v.clone())
}

#[cfg(test)]
mod tests {
    use super::impute;
    use crate::types::{Table, Value};

    fn single_column(name: &str, values: Vec<Value>) -> Table {
        Table::new(
            vec![name.to_string()],
            values.into_iter().map(|v| vec![v]).collect(),
        )
    }

    #[test]
    fn numeric_column_fills_with_mean() {
        let t = single_column(
            "Amount",
            vec![
                Value::Int64(1),
                Value::Int64(2),
                Value::Null,
                Value::Int64(3),
            ],
        );
        let outcome = impute(&t);
        assert!(outcome.failures.is_empty());
        assert_eq!(outcome.table.rows[2][0], Value::Float64(2.0));
        // non-missing cells untouched
        assert_eq!(outcome.table.rows[0][0], Value::Int64(1));
    }

    #[test]
    fn categorical_column_fills_with_mode() {
        let t = single_column(
            "Category",
            vec![
                Value::Utf8("a".to_string()),
                Value::Utf8("a".to_string()),
                Value::Null,
                Value::Utf8("b".to_string()),
            ],
        );
        let outcome = impute(&t);
        assert_eq!(outcome.table.rows[2][0], Value::Utf8("a".to_string()));
    }

    #[test]
    fn mode_ties_break_toward_first_encountered() {
        let t = single_column(
            "Category",
            vec![
                Value::Utf8("b".to_string()),
                Value::Utf8("a".to_string()),
                Value::Null,
            ],
        );
        let outcome = impute(&t);
        assert_eq!(outcome.table.rows[2][0], Value::Utf8("b".to_string()));
    }

    #[test]
    fn all_missing_column_is_reported_not_silently_skipped() {
        let t = Table::new(
            vec!["empty".to_string(), "ok".to_string()],
            vec![
                vec![Value::Null, Value::Int64(1)],
                vec![Value::Null, Value::Null],
            ],
        );
        let outcome = impute(&t);
        assert_eq!(
            outcome.failures["empty"],
            "No non-missing values to impute from"
        );
        // the failing column does not abort the other one
        assert_eq!(outcome.table.rows[1][1], Value::Float64(1.0));
        assert_eq!(outcome.table.rows[0][0], Value::Null);
    }

    #[test]
    fn columns_without_missing_values_are_left_alone() {
        let t = single_column("x", vec![Value::Int64(1), Value::Int64(2)]);
        let outcome = impute(&t);
        assert_eq!(outcome.table, t);
        assert!(outcome.failures.is_empty());
    }
}
