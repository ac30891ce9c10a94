//! JSON loading.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"a":1}, {"a":2}]`
//! - A single object (one-row table)
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`
//!
//! Columns are the union of all object keys in first-seen order; keys absent
//! from a given object become the missing marker.

use std::fs;
use std::path::Path;

use crate::error::{QualityError, QualityResult};
use crate::types::{Table, Value};

/// Load a JSON or NDJSON file into an in-memory [`Table`].
pub fn load_json_from_path(path: impl AsRef<Path>) -> QualityResult<Table> {
    let text = fs::read_to_string(path)?;
    load_json_from_str(&text)
}

/// Load JSON from an in-memory string into a [`Table`].
pub fn load_json_from_str(input: &str) -> QualityResult<Table> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(QualityError::UnsupportedInput {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        return match v {
            serde_json::Value::Array(items) => table_from_objects(&items),
            serde_json::Value::Object(_) => table_from_objects(std::slice::from_ref(&v)),
            _ => Err(QualityError::UnsupportedInput {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        };
    }

    // Fall back to NDJSON.
    let mut values = Vec::new();
    for (i, line) in trimmed.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
            QualityError::UnsupportedInput {
                message: format!("invalid ndjson at line {}: {}", i + 1, e),
            }
        })?;
        values.push(v);
    }
    table_from_objects(&values)
}

fn table_from_objects(values: &[serde_json::Value]) -> QualityResult<Table> {
    // Pass 1: union of keys in first-seen order.
    let mut columns: Vec<String> = Vec::new();
    let mut objects = Vec::with_capacity(values.len());
    for (i, v) in values.iter().enumerate() {
        let obj = v
            .as_object()
            .ok_or_else(|| QualityError::UnsupportedInput {
                message: format!("json row {} is not an object", i),
            })?;
        for key in obj.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
        objects.push(obj);
    }

    // Pass 2: rows, padding absent keys with the missing marker.
    let mut rows: Vec<Vec<Value>> = Vec::with_capacity(objects.len());
    for obj in objects {
        let row = columns
            .iter()
            .map(|c| obj.get(c).map(cell_from_json).unwrap_or(Value::Null))
            .collect();
        rows.push(row);
    }

    Ok(Table::new(columns, rows))
}

/// Map a JSON scalar to a cell value. Booleans and nested structures are
/// rendered as text so loading stays total.
fn cell_from_json(v: &serde_json::Value) -> Value {
    match v {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int64(i)
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() => Value::Float64(f),
                    _ => Value::Null,
                }
            }
        }
        serde_json::Value::String(s) => Value::Utf8(s.clone()),
        serde_json::Value::Bool(b) => Value::Utf8(b.to_string()),
        other => Value::Utf8(other.to_string()),
    }
}
