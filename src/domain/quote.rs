//! Per-exchange price quote.

use serde::{Deserialize, Serialize};

/// Quote is one exchange's current top-of-book price.
///
/// `bid <= mid <= ask` is expected but not enforced; zero-width markets
/// (`bid == ask`) are valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Exchange key (e.g., "hyperliquid").
    #[serde(rename = "exchange_key")]
    pub exchange_id: String,
    /// Human-readable exchange name (e.g., "Hyperliquid").
    #[serde(rename = "exchange_name")]
    pub display_name: String,
    /// Best bid price.
    pub bid: f64,
    /// Best ask price.
    pub ask: f64,
    /// Mid price between bid and ask.
    #[serde(rename = "mid_price")]
    pub mid: f64,
}

impl Quote {
    /// Builds a quote from the best bid and ask, deriving the mid price.
    pub fn from_book(
        exchange_id: impl Into<String>,
        display_name: impl Into<String>,
        bid: f64,
        ask: f64,
    ) -> Self {
        Self {
            exchange_id: exchange_id.into(),
            display_name: display_name.into(),
            bid,
            ask,
            mid: (bid + ask) / 2.0,
        }
    }

    /// Returns true if the quote carries a usable mid price.
    pub fn has_price(&self) -> bool {
        self.mid.is_finite() && self.mid > 0.0
    }
}
