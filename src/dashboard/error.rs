//! Dashboard error types.

use crate::source::SourceError;

/// Dashboard error type.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("dashboard is already running")]
    AlreadyRunning,
    #[error("dashboard is not running")]
    NotRunning,
    #[error("fetch failed: {0}")]
    Source(#[from] SourceError),
    #[error("fetch abandoned")]
    Cancelled,
}
