//! Observer hooks for table loading.
//!
//! The core analysis is pure and logs nothing; loading files is the one
//! boundary where outcomes are worth reporting. Shells can implement
//! [`LoadObserver`] to record metrics or logs for each load attempt.

use std::path::PathBuf;

use crate::error::QualityError;

use super::LoadFormat;

/// Context about a load attempt.
#[derive(Debug, Clone)]
pub struct LoadContext {
    /// The input path used for loading.
    pub path: PathBuf,
    /// Format used for loading.
    pub format: LoadFormat,
}

/// Minimal stats reported on a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    /// Number of loaded rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
}

/// Observer interface for load outcomes.
pub trait LoadObserver: Send + Sync {
    /// Called when loading succeeds.
    fn on_success(&self, _ctx: &LoadContext, _stats: LoadStats) {}

    /// Called when loading fails.
    fn on_failure(&self, _ctx: &LoadContext, _error: &QualityError) {}
}

/// Logs load events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl LoadObserver for StdErrObserver {
    fn on_success(&self, ctx: &LoadContext, stats: LoadStats) {
        eprintln!(
            "[load][ok] format={:?} path={} rows={} columns={}",
            ctx.format,
            ctx.path.display(),
            stats.rows,
            stats.columns
        );
    }

    fn on_failure(&self, ctx: &LoadContext, error: &QualityError) {
        eprintln!(
            "[load][fail] format={:?} path={} err={}",
            ctx.format,
            ctx.path.display(),
            error
        );
    }
}
