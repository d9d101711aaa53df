//! Dashboard controller options.

use std::time::Duration;

use crate::analytics::Window;
use crate::config::DashboardConfig;

/// Dashboard controller options.
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// Interval between scheduled refreshes.
    pub refresh_interval: Duration,
    /// Analytics window applied to every snapshot.
    pub window: Window,
    /// Log a summary line every N cycles.
    pub summary_every: u64,
}

impl DashboardOptions {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            refresh_interval: config.refresh_interval(),
            window: Window {
                period_minutes: config.period_minutes,
                bucket_minutes: config.bucket_minutes,
            },
            summary_every: config.summary_every.max(1),
        }
    }
}
