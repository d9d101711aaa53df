//! Market-spread analytics engine.
//!
//! Every function here is pure and total: degenerate input (no quotes,
//! empty history, equal rates) resolves to "no opportunity" or zero values.

pub mod arbitrage;
pub mod chart;
pub mod funding;
pub mod stats;

pub use chart::DEFAULT_BUCKET_MINUTES;

use tracing::debug;

use crate::domain::{
    ArbitrageOpportunity, FundingArbitrage, FundingRate, SnapshotResult, SpreadStats,
};

/// Window parameters for one analytics pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub period_minutes: u32,
    pub bucket_minutes: u32,
}

/// Analytics is everything derived from one snapshot, replaced as a whole.
#[derive(Debug, Clone)]
pub struct Analytics {
    /// The snapshot as received from the source.
    pub snapshot: SnapshotResult,
    /// Statistics recomputed locally over the snapshot's history.
    pub stats: SpreadStats,
    /// Best pair by mid price.
    pub mid_arbitrage: Option<ArbitrageOpportunity>,
    /// Best pair executable against the book (buy at ask, sell at bid).
    pub executable_buy: Option<ArbitrageOpportunity>,
    /// Mirrored executable scan.
    pub executable_sell: Option<ArbitrageOpportunity>,
    pub funding_rates: Vec<FundingRate>,
    pub funding_arbitrage: Option<FundingArbitrage>,
    /// Chart tick indices into `snapshot.history`.
    pub ticks: Vec<usize>,
    pub window: Window,
}

impl Analytics {
    /// Runs every analytics pass over a snapshot.
    ///
    /// Stats and ticks are taken from `previous` when its history and window
    /// match the new ones.
    pub fn compute(
        snapshot: SnapshotResult,
        funding_rates: Vec<FundingRate>,
        window: Window,
        previous: Option<&Analytics>,
    ) -> Self {
        let reusable = previous
            .filter(|prev| prev.window == window && prev.snapshot.history == snapshot.history);

        let (stats, ticks) = match reusable {
            Some(prev) => {
                debug!(points = snapshot.history.len(), "History unchanged, reusing stats");
                (prev.stats.clone(), prev.ticks.clone())
            }
            None => (
                stats::compute(&snapshot.history, window.period_minutes),
                chart::bucket_ticks(&snapshot.history, window.bucket_minutes),
            ),
        };

        let mid_arbitrage = arbitrage::detect(&snapshot.quotes);
        let (executable_buy, executable_sell) = arbitrage::detect_executable(&snapshot.quotes);
        let funding_arbitrage = funding::detect(&funding_rates);

        Self {
            snapshot,
            stats,
            mid_arbitrage,
            executable_buy,
            executable_sell,
            funding_rates,
            funding_arbitrage,
            ticks,
            window,
        }
    }
}
