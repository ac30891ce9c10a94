//! Loading files into an in-memory [`crate::types::Table`].
//!
//! Most callers should use [`load_from_path`], which infers the format from
//! the file extension (or a format can be forced via [`LoadOptions`]).
//! Loading is schema-less: cell types are inferred per value, and empty /
//! null cells become the missing marker.
//!
//! This layer is a convenience for shells feeding the core; [`crate::analyze`]
//! and [`crate::repair`] only ever see the resulting table.

pub mod csv;
pub mod json;
pub mod observability;

use std::path::Path;
use std::sync::Arc;

use crate::error::{QualityError, QualityResult};
use crate::types::Table;

pub use observability::{LoadContext, LoadObserver, LoadStats, StdErrObserver};

/// Supported load formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadFormat {
    /// Comma-separated values.
    Csv,
    /// JSON array-of-objects or NDJSON.
    Json,
}

impl LoadFormat {
    /// Parse a load format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" | "ndjson" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Options controlling [`load_from_path`].
///
/// Use [`Default`] for common cases.
#[derive(Clone, Default)]
pub struct LoadOptions {
    /// If `None`, auto-detect format from the file extension.
    pub format: Option<LoadFormat>,
    /// Optional observer notified of the load outcome.
    pub observer: Option<Arc<dyn LoadObserver>>,
}

impl std::fmt::Debug for LoadOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// Load a file into a [`Table`], inferring the format from its extension
/// unless `options.format` is set.
pub fn load_from_path(path: impl AsRef<Path>, options: &LoadOptions) -> QualityResult<Table> {
    let path = path.as_ref();

    let format = match options.format {
        Some(f) => f,
        None => {
            let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
            LoadFormat::from_extension(ext).ok_or_else(|| QualityError::UnsupportedInput {
                message: format!("cannot infer load format from path '{}'", path.display()),
            })?
        }
    };

    let result = match format {
        LoadFormat::Csv => csv::load_csv_from_path(path),
        LoadFormat::Json => json::load_json_from_path(path),
    };

    if let Some(observer) = &options.observer {
        let ctx = LoadContext {
            path: path.to_path_buf(),
            format,
        };
        match &result {
            Ok(table) => observer.on_success(
                &ctx,
                LoadStats {
                    rows: table.row_count(),
                    columns: table.columns.len(),
                },
            ),
            Err(err) => observer.on_failure(&ctx, err),
        }
    }

    result
}
