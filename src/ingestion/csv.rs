//! CSV loading.
//!
//! Loading is schema-less: column names come from the header row and each
//! cell's type is inferred individually (integer, then float, then text;
//! empty cells become the missing marker). The analysis layer infers column
//! kinds afterwards from the majority type.

use std::path::Path;

use crate::error::QualityResult;
use crate::types::{Table, Value};

/// Load a CSV file into an in-memory [`Table`]. The CSV must have a header
/// row.
pub fn load_csv_from_path(path: impl AsRef<Path>) -> QualityResult<Table> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)?;
    load_csv_from_reader(&mut rdr)
}

/// Load CSV data from an existing CSV reader.
pub fn load_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> QualityResult<Table> {
    let columns: Vec<String> = rdr.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let mut row = Vec::with_capacity(columns.len());
        for i in 0..columns.len() {
            row.push(infer_cell(record.get(i).unwrap_or("")));
        }
        rows.push(row);
    }

    Ok(Table::new(columns, rows))
}

/// Infer a cell value from raw text: empty → missing, integer, finite float,
/// else text.
fn infer_cell(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return Value::Int64(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if f.is_finite() {
            return Value::Float64(f);
        }
    }
    Value::Utf8(trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::{infer_cell, load_csv_from_reader};
    use crate::types::Value;

    #[test]
    fn loads_headers_and_inferred_cells() {
        let input = "Transaction ID,Amount,Category\n1,10.5,food\n2,,rent\n";
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(input.as_bytes());

        let table = load_csv_from_reader(&mut rdr).unwrap();
        assert_eq!(
            table.columns,
            vec!["Transaction ID", "Amount", "Category"]
        );
        assert_eq!(
            table.rows[0],
            vec![
                Value::Int64(1),
                Value::Float64(10.5),
                Value::Utf8("food".to_string()),
            ]
        );
        assert_eq!(table.rows[1][1], Value::Null);
    }

    #[test]
    fn short_records_pad_with_missing() {
        let input = "a,b\n1\n";
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(input.as_bytes());

        let table = load_csv_from_reader(&mut rdr).unwrap();
        assert_eq!(table.rows[0], vec![Value::Int64(1), Value::Null]);
    }

    #[test]
    fn cell_inference_order_is_int_float_text() {
        assert_eq!(infer_cell("42"), Value::Int64(42));
        assert_eq!(infer_cell("42.0"), Value::Float64(42.0));
        assert_eq!(infer_cell(" x "), Value::Utf8("x".to_string()));
        assert_eq!(infer_cell("   "), Value::Null);
        assert_eq!(infer_cell("NaN"), Value::Utf8("NaN".to_string()));
    }
}
