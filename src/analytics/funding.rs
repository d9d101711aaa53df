//! Funding-rate arbitrage detection.

use crate::domain::{DAYS_PER_YEAR, FUNDING_EVENTS_PER_DAY, FundingArbitrage, FundingRate};

/// Finds the best long/short funding pair: long where the rate is lowest,
/// short where it is highest.
///
/// Returns None with fewer than two rates or when the difference is not
/// strictly positive. First-seen wins ties.
pub fn detect(rates: &[FundingRate]) -> Option<FundingArbitrage> {
    if rates.len() < 2 {
        return None;
    }

    let mut long = &rates[0];
    let mut short = &rates[0];
    for rate in &rates[1..] {
        if rate.rate < long.rate {
            long = rate;
        }
        if rate.rate > short.rate {
            short = rate;
        }
    }

    let diff = short.rate - long.rate;
    if diff.is_nan() || diff <= 0.0 {
        return None;
    }

    let rate_diff_pct = diff * 100.0;
    Some(FundingArbitrage {
        long_exchange: long.exchange.clone(),
        short_exchange: short.exchange.clone(),
        rate_diff_pct,
        annualized_pct: annualize(rate_diff_pct),
    })
}

/// Scales a per-period percentage to a yearly one, linearly.
pub fn annualize(per_period_pct: f64) -> f64 {
    per_period_pct * FUNDING_EVENTS_PER_DAY * DAYS_PER_YEAR
}
