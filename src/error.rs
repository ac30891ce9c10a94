use thiserror::Error;

/// Convenience result type for quality-engine operations.
pub type QualityResult<T> = Result<T, QualityError>;

/// Error type returned by the analysis and ingestion entry points.
///
/// Degenerate statistics (zero variance, single row, all-missing column) are
/// never errors; they are handled as defined edge cases by the detectors.
/// Failed numeric coercion of an individual cell is likewise recovered
/// locally by substituting the missing marker.
#[derive(Debug, Error)]
pub enum QualityError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV loading error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The input could not be turned into a table (unsupported extension,
    /// non-object JSON, and similar shape problems).
    #[error("unsupported input: {message}")]
    UnsupportedInput { message: String },

    /// Required columns are absent from the table. Fatal to the analyze
    /// call; `columns` lists every missing column name.
    #[error("Missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// A column named by the caller does not exist in the table.
    #[error("unknown column '{column}'")]
    UnknownColumn { column: String },
}
