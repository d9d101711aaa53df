//! Cross-exchange arbitrage opportunity.

use serde::{Deserialize, Serialize};

/// ArbitrageOpportunity is a buy-low/sell-high pair with a strictly positive spread.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbitrageOpportunity {
    /// Exchange where to buy.
    pub buy_exchange: String,
    /// Exchange where to sell.
    pub sell_exchange: String,
    /// Price paid on the buy exchange.
    pub buy_price: f64,
    /// Price received on the sell exchange.
    pub sell_price: f64,
    /// `sell_price - buy_price`.
    pub spread_abs: f64,
    /// `spread_abs / buy_price * 100`.
    pub spread_pct: f64,
}

impl ArbitrageOpportunity {
    /// Builds an opportunity from a buy and sell leg.
    ///
    /// Returns None unless the spread is strictly positive and the buy price
    /// can be divided by.
    pub fn between(
        buy_exchange: &str,
        buy_price: f64,
        sell_exchange: &str,
        sell_price: f64,
    ) -> Option<Self> {
        let spread_abs = sell_price - buy_price;
        if !(spread_abs > 0.0) || !(buy_price > 0.0) {
            return None;
        }

        Some(Self {
            buy_exchange: buy_exchange.to_string(),
            sell_exchange: sell_exchange.to_string(),
            buy_price,
            sell_price,
            spread_abs,
            spread_pct: spread_abs / buy_price * 100.0,
        })
    }
}
