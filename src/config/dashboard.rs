//! Refresh cadence and analytics window configuration.

use serde::Deserialize;
use std::time::Duration;

use super::duration;
use crate::analytics::DEFAULT_BUCKET_MINUTES;

const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(3);

/// Dashboard refresh and analytics settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Interval between snapshot fetches (default: 3s).
    #[serde(default, with = "duration")]
    pub refresh_interval: Duration,
    /// Lookback window the history covers, in minutes.
    #[serde(default = "default_period_minutes")]
    pub period_minutes: u32,
    /// Size of a chart tick bucket, in minutes.
    #[serde(default = "default_bucket_minutes")]
    pub bucket_minutes: u32,
    /// Log a refresh summary every N cycles.
    #[serde(default = "default_summary_every")]
    pub summary_every: u64,
}

fn default_period_minutes() -> u32 {
    15
}

fn default_bucket_minutes() -> u32 {
    DEFAULT_BUCKET_MINUTES
}

fn default_summary_every() -> u64 {
    20
}

impl DashboardConfig {
    /// Returns the refresh interval, falling back to the default when unset.
    pub fn refresh_interval(&self) -> Duration {
        if self.refresh_interval.is_zero() {
            DEFAULT_REFRESH_INTERVAL
        } else {
            self.refresh_interval
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            refresh_interval: Duration::ZERO,
            period_minutes: default_period_minutes(),
            bucket_minutes: default_bucket_minutes(),
            summary_every: default_summary_every(),
        }
    }
}
