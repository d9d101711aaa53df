//! Data sources feeding the dashboard: the snapshot endpoint and funding rates.

mod http;
mod static_funding;

pub use http::HttpSource;
pub use static_funding::StaticFundingRates;

use crate::domain::{FundingRate, SnapshotResult};
use async_trait::async_trait;
use thiserror::Error;

/// Source errors. Transport failures and malformed payloads are both
/// surfaced as a failed fetch.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Network or transport failure.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-success HTTP status.
    #[error("HTTP error: {code}: {body}")]
    Status { code: u16, body: String },

    /// Payload missing required fields or not valid JSON.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

/// SnapshotSource supplies the current multi-exchange snapshot on demand.
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Fetches the latest snapshot.
    async fn fetch(&self) -> Result<SnapshotResult>;

    /// Describes where snapshots come from (for logs).
    fn describe(&self) -> String;
}

/// FundingSource supplies the current funding rate of each exchange.
#[async_trait]
pub trait FundingSource: Send + Sync {
    /// Returns one rate per supported exchange.
    async fn rates(&self) -> Result<Vec<FundingRate>>;
}
