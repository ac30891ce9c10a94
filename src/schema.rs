//! Required-column validation and configurable column naming.
//!
//! The engine does not hardcode column names: an [`AuditSchema`] names the
//! identifier and amount columns (required) and the date and category columns
//! (optional, checked only when present in the table).

use crate::error::{QualityError, QualityResult};
use crate::types::Table;

/// Column-name configuration for the analyze path.
///
/// Defaults match transaction-style datasets: `Transaction ID` / `Amount` /
/// `Date` / `Category`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditSchema {
    /// Row identifier column; required, also the duplicate-detection key.
    pub id_column: String,
    /// Numeric amount column; required, the statistical-outlier target.
    pub amount_column: String,
    /// Date column; structural shape check runs only if the table has it.
    pub date_column: String,
    /// Category column; structural shape check runs only if the table has it.
    pub category_column: String,
}

impl Default for AuditSchema {
    fn default() -> Self {
        Self {
            id_column: "Transaction ID".to_string(),
            amount_column: "Amount".to_string(),
            date_column: "Date".to_string(),
            category_column: "Category".to_string(),
        }
    }
}

impl AuditSchema {
    /// The columns that must exist before any analysis runs.
    pub fn required_columns(&self) -> [&str; 2] {
        [self.id_column.as_str(), self.amount_column.as_str()]
    }
}

/// Check that `table` contains every column in `required`.
///
/// Returns a single [`QualityError::MissingColumns`] naming every absent
/// column. A table with zero rows is not a schema error; only the column set
/// is inspected.
pub fn validate_required(table: &Table, required: &[&str]) -> QualityResult<()> {
    let columns: Vec<String> = required
        .iter()
        .filter(|name| !table.has_column(name))
        .map(|name| (*name).to_string())
        .collect();

    if columns.is_empty() {
        Ok(())
    } else {
        Err(QualityError::MissingColumns { columns })
    }
}

#[cfg(test)]
mod tests {
    use super::{AuditSchema, validate_required};
    use crate::types::Table;

    #[test]
    fn passes_when_all_required_present() {
        let t = Table::new(
            vec!["Transaction ID".to_string(), "Amount".to_string()],
            vec![],
        );
        let schema = AuditSchema::default();
        assert!(validate_required(&t, &schema.required_columns()).is_ok());
    }

    #[test]
    fn zero_rows_is_not_a_schema_error() {
        let t = Table::new(vec!["a".to_string(), "b".to_string()], vec![]);
        assert!(validate_required(&t, &["a", "b"]).is_ok());
    }

    #[test]
    fn names_every_missing_column_comma_joined() {
        let t = Table::new(vec!["Date".to_string()], vec![]);
        let schema = AuditSchema::default();
        let err = validate_required(&t, &schema.required_columns()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required columns: Transaction ID, Amount"
        );
    }
}
