//! Total numeric coercion of a single column.
//!
//! Runs before fence computation so that non-numeric junk in the amount
//! column cannot corrupt the quantile math: unparseable cells become
//! [`Value::Null`] instead of failing the whole operation.

use crate::error::{QualityError, QualityResult};
use crate::types::{Table, Value};

/// Coerce every cell of `column` to a numeric value in a new table.
///
/// The coercion is total at the table level: individual cells that cannot be
/// parsed (or parse to a non-finite float) become [`Value::Null`]; the
/// operation itself only fails if `column` does not exist. The caller's
/// table is never mutated.
pub fn coerce_numeric(table: &Table, column: &str) -> QualityResult<Table> {
    let idx = table
        .index_of(column)
        .ok_or_else(|| QualityError::UnknownColumn {
            column: column.to_string(),
        })?;

    let mut out = table.clone();
    for row in &mut out.rows {
        if let Some(cell) = row.get_mut(idx) {
            *cell = coerce_cell(cell);
        }
    }
    Ok(out)
}

fn coerce_cell(value: &Value) -> Value {
    match value {
        Value::Int64(v) => Value::Int64(*v),
        Value::Float64(v) if v.is_finite() => Value::Float64(*v),
        Value::Utf8(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                Value::Int64(i)
            } else {
                match trimmed.parse::<f64>() {
                    Ok(f) if f.is_finite() => Value::Float64(f),
                    _ => Value::Null,
                }
            }
        }
        _ => Value::Null,
    }
}
