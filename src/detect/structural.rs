//! Structural well-formedness checks over raw rows.
//!
//! Unlike the statistical path, every rule here is evaluated independently: a
//! row accumulates one [`AnomalyRecord`] per triggered rule rather than
//! stopping at the first match. All checks are shape-only (no calendar
//! parsing of dates, no category vocabulary).

use std::collections::HashMap;

use crate::report::AnomalyRecord;
use crate::schema::AuditSchema;
use crate::types::{Table, Value, ValueKey};

/// Run the per-row shape rules, in row order.
///
/// Rules, each yielding its own record when violated:
///
/// - the identifier must be present and be an integer or text;
/// - the date field must be text (checked only if the column exists);
/// - the category field must be text (checked only if the column exists).
///
/// Reason strings carry the configured column names, e.g.
/// `"Transaction ID is not a valid format"` with the default schema.
pub fn validate_rows(table: &Table, schema: &AuditSchema) -> Vec<AnomalyRecord> {
    let id_idx = table.index_of(&schema.id_column);
    let date_idx = table.index_of(&schema.date_column);
    let category_idx = table.index_of(&schema.category_column);

    let mut records = Vec::new();
    for row_index in 0..table.row_count() {
        let row = &table.rows[row_index];
        let mut flag = |reason: String| {
            records.push(AnomalyRecord {
                row_index,
                data: table.row_map(row_index),
                reason,
            });
        };

        if let Some(idx) = id_idx {
            if !matches!(row.get(idx), Some(Value::Int64(_)) | Some(Value::Utf8(_))) {
                flag(format!("{} is not a valid format", schema.id_column));
            }
        }
        if let Some(idx) = date_idx {
            if !matches!(row.get(idx), Some(Value::Utf8(_))) {
                flag(format!("{} format is incorrect", schema.date_column));
            }
        }
        if let Some(idx) = category_idx {
            if !matches!(row.get(idx), Some(Value::Utf8(_))) {
                flag(format!(
                    "{} is in the wrong column or missing",
                    schema.category_column
                ));
            }
        }
    }
    records
}

/// Report every row whose key-column value tuple occurs more than once.
///
/// All members of a duplicate group are reported (not just the repeats), in
/// original row order, each with reason `"Duplicate transaction detected"`.
/// If any key column is absent the scan is skipped and no records are
/// returned.
pub fn find_duplicates(table: &Table, key_columns: &[&str]) -> Vec<AnomalyRecord> {
    let mut key_idxs = Vec::with_capacity(key_columns.len());
    for name in key_columns {
        match table.index_of(name) {
            Some(idx) => key_idxs.push(idx),
            None => return Vec::new(),
        }
    }

    let mut counts: HashMap<Vec<ValueKey>, usize> = HashMap::new();
    for row in &table.rows {
        let key: Vec<ValueKey> = key_idxs
            .iter()
            .map(|&idx| row.get(idx).unwrap_or(&Value::Null).key())
            .collect();
        *counts.entry(key).or_insert(0) += 1;
    }

    let mut records = Vec::new();
    for (row_index, row) in table.rows.iter().enumerate() {
        let key: Vec<ValueKey> = key_idxs
            .iter()
            .map(|&idx| row.get(idx).unwrap_or(&Value::Null).key())
            .collect();
        if counts.get(&key).copied().unwrap_or(0) >= 2 {
            records.push(AnomalyRecord {
                row_index,
                data: table.row_map(row_index),
                reason: "Duplicate transaction detected".to_string(),
            });
        }
    }
    records
}
