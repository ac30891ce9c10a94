//! Core data model types.
//!
//! The engine operates on an in-memory [`Table`]: ordered column names plus
//! row-major [`Value`] storage. Cells are tagged values with an explicit
//! missing marker ([`Value::Null`]) so that "no value" is distinct from zero
//! and from the empty string throughout the analysis and repair paths.

use std::collections::BTreeMap;

use serde::Serialize;

/// A single typed cell value in a [`Table`].
///
/// Serializes untagged: `Null` becomes JSON `null`, numbers and strings
/// serialize as themselves, so a row map round-trips to the same JSON object
/// shape an HTTP shell would return.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing/empty value (also the result of a failed numeric coercion).
    Null,
    /// 64-bit signed integer.
    Int64(i64),
    /// 64-bit float. Never NaN or infinite inside a table; coercion and
    /// ingestion map non-finite parse results to [`Value::Null`].
    Float64(f64),
    /// UTF-8 string.
    Utf8(String),
}

impl Value {
    /// Returns true for the missing marker.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Numeric view of the value: integers widen to `f64`, floats pass
    /// through, text and missing return `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int64(v) => Some(*v as f64),
            Value::Float64(v) => Some(*v),
            Value::Null | Value::Utf8(_) => None,
        }
    }

    /// Hashable grouping key. Floats key on their bit pattern, which is
    /// exact-match equality (the duplicate rules require exact matches, not
    /// tolerance comparison).
    pub(crate) fn key(&self) -> ValueKey {
        match self {
            Value::Null => ValueKey::Null,
            Value::Int64(v) => ValueKey::Int64(*v),
            Value::Float64(v) => ValueKey::Float64(v.to_bits()),
            Value::Utf8(s) => ValueKey::Utf8(s.clone()),
        }
    }
}

/// Hash/Eq-capable stand-in for [`Value`], used to group rows.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey {
    Null,
    Int64(i64),
    Float64(u64),
    Utf8(String),
}

/// Inferred element kind of a column, decided by the majority type of its
/// non-missing values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Majority of non-missing values are `Int64`/`Float64`.
    Numeric,
    /// Majority of non-missing values are `Utf8`. Ties and all-missing
    /// columns land here (mixed columns degrade to text).
    Categorical,
}

/// In-memory tabular dataset.
///
/// Rows are stored as `Vec<Vec<Value>>` in the same order as `columns`; the
/// zero-based positional row index is stable for the lifetime of the table.
/// Operations that need to mutate (coercion, imputation, dedup) always build
/// and return a new `Table`, never mutating the caller's table in place.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Ordered column names.
    pub columns: Vec<String>,
    /// Row-major value storage; every row has `columns.len()` cells.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Create a table from column names and rows.
    ///
    /// # Panics
    ///
    /// Panics if any row's length does not match the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        for (i, row) in rows.iter().enumerate() {
            assert!(
                row.len() == columns.len(),
                "row {} has {} cells, expected {}",
                i,
                row.len(),
                columns.len()
            );
        }
        Self { columns, rows }
    }

    /// Number of rows in the table.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Returns true if a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Iterate the cells of one column in row order.
    pub fn column_values(&self, col_idx: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().filter_map(move |row| row.get(col_idx))
    }

    /// Infer the element kind of a column from the majority type of its
    /// non-missing values. Text wins ties; an all-missing column is
    /// [`ColumnKind::Categorical`].
    pub fn infer_kind(&self, col_idx: usize) -> ColumnKind {
        let mut numeric = 0usize;
        let mut text = 0usize;
        for v in self.column_values(col_idx) {
            match v {
                Value::Int64(_) | Value::Float64(_) => numeric += 1,
                Value::Utf8(_) => text += 1,
                Value::Null => {}
            }
        }
        if numeric > text {
            ColumnKind::Numeric
        } else {
            ColumnKind::Categorical
        }
    }

    /// The full field→value mapping of one row, cloned.
    ///
    /// This is the `data` payload of an anomaly record: the whole row travels
    /// with the finding so a report consumer never has to re-join against the
    /// source table.
    pub fn row_map(&self, row_idx: usize) -> BTreeMap<String, Value> {
        let mut map = BTreeMap::new();
        if let Some(row) = self.rows.get(row_idx) {
            for (name, value) in self.columns.iter().zip(row.iter()) {
                map.insert(name.clone(), value.clone());
            }
        }
        map
    }
}
