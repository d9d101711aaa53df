//! Funding rates served from configuration.

use async_trait::async_trait;
use chrono::Utc;

use super::{FundingSource, Result};
use crate::config::FundingRateConfig;
use crate::domain::FundingRate;

/// StaticFundingRates serves a fixed list of funding rates.
///
/// `next_update` is recomputed relative to the time of each call.
pub struct StaticFundingRates {
    entries: Vec<FundingRateConfig>,
}

impl StaticFundingRates {
    pub fn new(entries: Vec<FundingRateConfig>) -> Self {
        Self { entries }
    }

    /// Builds the list as of now.
    pub fn snapshot(&self) -> Vec<FundingRate> {
        let now = Utc::now();
        self.entries
            .iter()
            .map(|entry| FundingRate {
                exchange: entry.exchange.clone(),
                rate: entry.rate,
                next_update: now
                    + chrono::Duration::from_std(entry.next_update_in)
                        .unwrap_or(chrono::Duration::zero()),
            })
            .collect()
    }
}

#[async_trait]
impl FundingSource for StaticFundingRates {
    async fn rates(&self) -> Result<Vec<FundingRate>> {
        Ok(self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FundingConfig;
    use std::time::Duration;

    #[tokio::test]
    async fn test_default_rates() {
        let source = StaticFundingRates::new(FundingConfig::default().rates);
        let rates = source.rates().await.unwrap();

        let names: Vec<_> = rates.iter().map(|r| r.exchange.as_str()).collect();
        assert_eq!(names, vec!["Hyperliquid", "Lighter", "Aster"]);
        assert_eq!(rates[1].rate, 0.00012);
    }

    #[test]
    fn test_next_update_is_in_the_future() {
        let source = StaticFundingRates::new(vec![FundingRateConfig {
            exchange: "Aster".into(),
            rate: 0.0001,
            next_update_in: Duration::from_secs(1800),
        }]);
        let before = Utc::now();
        let rates = source.snapshot();

        let delta = rates[0].next_update - before;
        assert!(delta >= chrono::Duration::minutes(29));
        assert!(delta <= chrono::Duration::minutes(31));
    }
}
