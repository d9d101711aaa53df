//! Rolling price history and spread statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HistoryPoint is one timestamped multi-exchange price sample.
///
/// On the wire every exchange price is a top-level field named by the
/// exchange key, next to `timestamp`, `spread` and `spread_pct`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub timestamp: DateTime<Utc>,
    /// Highest minus lowest mid price at this instant.
    #[serde(rename = "spread", default)]
    pub spread_abs: f64,
    /// Spread as a percentage of the lowest price.
    #[serde(default)]
    pub spread_pct: f64,
    /// Mid price per exchange key, ordered by key. Zero means no price yet.
    #[serde(flatten)]
    pub prices: BTreeMap<String, f64>,
}

impl HistoryPoint {
    /// Iterates over prices that are finite and strictly positive.
    pub fn valid_prices(&self) -> impl Iterator<Item = (&str, f64)> {
        self.prices
            .iter()
            .filter(|(_, price)| price.is_finite() && **price > 0.0)
            .map(|(exchange, price)| (exchange.as_str(), *price))
    }

    /// Returns the exchange with the highest valid price.
    ///
    /// Ties go to the alphabetically first exchange key, not the wire order.
    pub fn highest(&self) -> Option<(&str, f64)> {
        self.valid_prices()
            .fold(None, |best, cur| match best {
                Some((_, p)) if cur.1 <= p => best,
                _ => Some(cur),
            })
    }

    /// Returns the exchange with the lowest valid price.
    ///
    /// Ties go to the alphabetically first exchange key, not the wire order.
    pub fn lowest(&self) -> Option<(&str, f64)> {
        self.valid_prices()
            .fold(None, |best, cur| match best {
                Some((_, p)) if cur.1 >= p => best,
                _ => Some(cur),
            })
    }
}

/// MaxSpreadEvent is the history point with the widest spread in the window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxSpreadEvent {
    pub value: f64,
    pub pct: f64,
    pub timestamp: DateTime<Utc>,
    pub high_exchange: String,
    pub high_price: f64,
    pub low_exchange: String,
    pub low_price: f64,
}

/// SpreadStats summarizes a history window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpreadStats {
    /// None when the window is empty.
    pub max_spread: Option<MaxSpreadEvent>,
    #[serde(rename = "avg_spread")]
    pub avg_spread_abs: f64,
    pub avg_spread_pct: f64,
    /// Mean of every valid per-exchange price in the window; 0 when none.
    pub avg_price: f64,
    pub period_minutes: u32,
}

impl SpreadStats {
    /// Stats for an empty window.
    pub fn empty(period_minutes: u32) -> Self {
        Self {
            max_spread: None,
            avg_spread_abs: 0.0,
            avg_spread_pct: 0.0,
            avg_price: 0.0,
            period_minutes,
        }
    }
}
