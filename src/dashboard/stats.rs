//! Refresh counters.

use chrono::{DateTime, Utc};

/// Refresh statistics kept by the controller.
#[derive(Debug, Clone, Default)]
pub struct RefreshStats {
    pub cycles: u64,
    pub successes: u64,
    pub failures: u64,
    pub consecutive_failures: u64,
    pub last_success_at: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
}
