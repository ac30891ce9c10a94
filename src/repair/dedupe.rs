//! Fully-duplicate row elimination.

use std::collections::HashSet;

use crate::types::{Table, Value, ValueKey};

/// Remove rows that duplicate an earlier row in every field.
///
/// Two rows are duplicates iff every cell matches exactly, including
/// missing-marker equality (`Null == Null`). The first occurrence is kept in
/// original row order; the returned count of removed rows is informational.
pub fn dedupe(table: &Table) -> (Table, usize) {
    let mut seen: HashSet<Vec<ValueKey>> = HashSet::new();
    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(table.rows.len());

    for row in &table.rows {
        let key: Vec<ValueKey> = row.iter().map(Value::key).collect();
        if seen.insert(key) {
            rows.push(row.clone());
        }
    }

    let removed = table.rows.len() - rows.len();
    (Table::new(table.columns.clone(), rows), removed)
}
