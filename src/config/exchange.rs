//! Exchange display metadata.

use serde::Deserialize;
use std::collections::HashMap;

/// Indicator color used for exchanges missing from the table.
pub const FALLBACK_COLOR: &str = "#8b949e";

/// Display metadata for a single exchange.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExchangeConfig {
    /// Human-readable name shown next to prices.
    pub display_name: String,
    /// Indicator color (CSS hex).
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    FALLBACK_COLOR.to_string()
}

impl ExchangeConfig {
    fn new(display_name: &str, color: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            color: color.to_string(),
        }
    }
}

/// Built-in table for the supported DEXs, keyed by exchange key.
pub fn default_exchanges() -> HashMap<String, ExchangeConfig> {
    HashMap::from([
        (
            "hyperliquid".to_string(),
            ExchangeConfig::new("Hyperliquid", "#58a6ff"),
        ),
        (
            "lighter".to_string(),
            ExchangeConfig::new("Lighter", "#3fb950"),
        ),
        ("aster".to_string(), ExchangeConfig::new("Aster", "#d29922")),
    ])
}
