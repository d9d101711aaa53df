//! Domain models for the market-spread dashboard.

mod funding;
mod history;
mod opportunity;
mod quote;
mod snapshot;

pub use funding::{DAYS_PER_YEAR, FUNDING_EVENTS_PER_DAY, FundingArbitrage, FundingRate};
pub use history::{HistoryPoint, MaxSpreadEvent, SpreadStats};
pub use opportunity::ArbitrageOpportunity;
pub use quote::Quote;
pub use snapshot::SnapshotResult;
