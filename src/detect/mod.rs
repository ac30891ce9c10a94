//! Read-only anomaly analysis.
//!
//! [`analyze`] is the detect-path entry point: it gates on the required
//! columns, coerces the amount column on a private copy, and assembles one
//! flat report from three detectors in a fixed order:
//!
//! 1. statistical outliers ([`statistical`]),
//! 2. per-row structural rules ([`structural::validate_rows`]),
//! 3. identifier-keyed duplicates ([`structural::find_duplicates`]),
//!
//! each group preserving its internal row order. A row that trips several
//! rules appears once per rule; `anomalies_found` counts records, not rows.
//! This favors auditability over a one-row-one-verdict summary.

pub mod statistical;
pub mod structural;

use crate::coerce::coerce_numeric;
use crate::error::QualityResult;
use crate::report::AnomalyReport;
use crate::schema::{AuditSchema, validate_required};
use crate::types::Table;

/// Analyze `table` for anomalies. Never mutates the caller's table.
///
/// Fails with [`crate::QualityError::MissingColumns`] when any required
/// column is absent; no further analysis runs in that case.
///
/// The structural and duplicate detectors run over the coerced copy as well,
/// so every record's `data` payload shows the amount values the fence math
/// actually saw (unparseable amounts appear as null, as in the source
/// system's JSON responses).
pub fn analyze(table: &Table, schema: &AuditSchema) -> QualityResult<AnomalyReport> {
    validate_required(table, &schema.required_columns())?;

    let coerced = coerce_numeric(table, &schema.amount_column)?;

    let mut anomalies = statistical::detect_outliers(&coerced, &schema.amount_column)?.records;
    anomalies.extend(structural::validate_rows(&coerced, schema));
    anomalies.extend(structural::find_duplicates(
        &coerced,
        &[schema.id_column.as_str()],
    ));

    Ok(AnomalyReport {
        status: "File processed".to_string(),
        anomalies_found: anomalies.len(),
        anomalies,
    })
}
