//! Static funding-rate list.

use serde::Deserialize;
use std::time::Duration;

use super::duration;

/// Funding rates served until a live funding feed exists.
#[derive(Debug, Clone, Deserialize)]
pub struct FundingConfig {
    #[serde(default = "default_rates")]
    pub rates: Vec<FundingRateConfig>,
}

/// One configured funding rate.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FundingRateConfig {
    /// Exchange display name.
    pub exchange: String,
    /// Rate per funding period as a fraction (0.0001 = 0.01%).
    pub rate: f64,
    /// Time until the next funding settlement (default: 1h).
    #[serde(default = "default_next_update_in", with = "duration")]
    pub next_update_in: Duration,
}

fn default_next_update_in() -> Duration {
    Duration::from_secs(3600)
}

fn entry(exchange: &str, rate: f64) -> FundingRateConfig {
    FundingRateConfig {
        exchange: exchange.to_string(),
        rate,
        next_update_in: default_next_update_in(),
    }
}

fn default_rates() -> Vec<FundingRateConfig> {
    vec![
        entry("Hyperliquid", 0.0001),
        entry("Lighter", 0.00012),
        entry("Aster", 0.00009),
    ]
}

impl Default for FundingConfig {
    fn default() -> Self {
        Self {
            rates: default_rates(),
        }
    }
}
