//! Funding rates and funding-rate arbitrage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Funding settlements per day (every 8 hours).
pub const FUNDING_EVENTS_PER_DAY: f64 = 3.0;

/// Days used to annualize a per-period funding differential.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// FundingRate is the current funding rate of one exchange's BTC perpetual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingRate {
    /// Exchange display name.
    pub exchange: String,
    /// Rate per funding period as a fraction, not a percentage.
    /// Positive means longs pay shorts.
    pub rate: f64,
    /// When the next settlement happens.
    pub next_update: DateTime<Utc>,
}

impl FundingRate {
    /// Returns the rate as a percentage.
    pub fn rate_pct(&self) -> f64 {
        self.rate * 100.0
    }

    /// Returns true if longs pay (or nobody pays).
    pub fn is_positive(&self) -> bool {
        self.rate >= 0.0
    }
}

/// FundingArbitrage pairs a long on the lowest-rate exchange with a short on
/// the highest-rate exchange. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundingArbitrage {
    /// Exchange with the lowest rate.
    pub long_exchange: String,
    /// Exchange with the highest rate.
    pub short_exchange: String,
    /// `(max_rate - min_rate) * 100`, per funding period.
    pub rate_diff_pct: f64,
    /// Linear annualization: `rate_diff_pct * 3 * 365`, no compounding.
    pub annualized_pct: f64,
}
