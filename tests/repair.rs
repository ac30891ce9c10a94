use tabular_quality::repair;
use tabular_quality::repair::dedupe::dedupe;
use tabular_quality::types::{Table, Value};

#[test]
fn numeric_missing_values_filled_with_mean() {
    let t = Table::new(
        vec!["Amount".to_string()],
        vec![
            vec![Value::Int64(1)],
            vec![Value::Int64(2)],
            vec![Value::Null],
            vec![Value::Int64(3)],
        ],
    );
    let report = repair(&t);
    assert_eq!(report.missing_values["Amount"], 1);
    assert_eq!(report.repaired_table.rows[2][0], Value::Float64(2.0));
}

#[test]
fn categorical_missing_values_filled_with_most_frequent() {
    // Distinct identifiers keep the rows from collapsing in the dedupe step
    // that follows imputation.
    let t = Table::new(
        vec!["Transaction ID".to_string(), "Category".to_string()],
        vec![
            vec![Value::Int64(1), Value::Utf8("a".to_string())],
            vec![Value::Int64(2), Value::Utf8("a".to_string())],
            vec![Value::Int64(3), Value::Null],
            vec![Value::Int64(4), Value::Utf8("b".to_string())],
        ],
    );
    let report = repair(&t);
    assert_eq!(report.repaired_table.row_count(), 4);
    assert_eq!(report.duplicate_row_count, 0);
    assert_eq!(
        report.repaired_table.rows[2][1],
        Value::Utf8("a".to_string())
    );
}

#[test]
fn dedupe_keeps_first_occurrence_and_counts_removals() {
    let t = Table::new(
        vec!["x".to_string()],
        vec![
            vec![Value::Int64(1)],
            vec![Value::Int64(1)],
            vec![Value::Int64(2)],
        ],
    );
    let (deduped, removed) = dedupe(&t);
    assert_eq!(removed, 1);
    assert_eq!(
        deduped.rows,
        vec![vec![Value::Int64(1)], vec![Value::Int64(2)]]
    );
}

#[test]
fn negative_numeric_columns_are_flagged() {
    let t = Table::new(
        vec!["Amount".to_string(), "Note".to_string()],
        vec![
            vec![Value::Int64(5), Value::Utf8("ok".to_string())],
            vec![Value::Int64(-1), Value::Utf8("refund".to_string())],
        ],
    );
    let report = repair(&t);
    assert_eq!(
        report.column_anomalies["Amount"],
        "Negative values detected"
    );
    assert!(!report.column_anomalies.contains_key("Note"));
}

#[test]
fn all_missing_column_reported_without_aborting_others() {
    let t = Table::new(
        vec!["empty".to_string(), "Amount".to_string()],
        vec![
            vec![Value::Null, Value::Int64(4)],
            vec![Value::Null, Value::Null],
        ],
    );
    let report = repair(&t);
    assert_eq!(
        report.column_anomalies["empty"],
        "No non-missing values to impute from"
    );
    assert_eq!(report.repaired_table.rows[1][1], Value::Float64(4.0));
}

#[test]
fn second_repair_reports_nothing_left_to_fix() {
    let t = Table::new(
        vec!["Amount".to_string(), "Category".to_string()],
        vec![
            vec![Value::Int64(10), Value::Utf8("a".to_string())],
            vec![Value::Null, Value::Utf8("a".to_string())],
            vec![Value::Int64(10), Value::Utf8("a".to_string())],
            vec![Value::Int64(20), Value::Null],
        ],
    );
    let first = repair(&t);
    let second = repair(&first.repaired_table);
    assert!(second.missing_values.values().all(|&n| n == 0));
    assert_eq!(second.duplicate_row_count, 0);
    assert_eq!(second.repaired_table, first.repaired_table);
}

#[test]
fn repair_report_serializes_without_the_table() {
    let t = Table::new(vec!["Amount".to_string()], vec![vec![Value::Int64(-2)]]);
    let report = repair(&t);
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["duplicate_row_count"], 0);
    assert_eq!(json["column_anomalies"]["Amount"], "Negative values detected");
    assert!(json.get("repaired_table").is_none());
}
