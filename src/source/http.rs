//! HTTP client for the spread server's snapshot endpoint.

use async_trait::async_trait;
use reqwest::{Client as HttpClient, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

use super::{Result, SnapshotSource, SourceError};
use crate::config::SourceConfig;
use crate::domain::SnapshotResult;

/// Longest error body kept in a status error.
const MAX_ERROR_BODY: usize = 256;

/// HttpSource fetches snapshots with a single GET per refresh.
pub struct HttpSource {
    endpoint: String,
    http_client: HttpClient,
}

impl HttpSource {
    /// Creates a new source for the given endpoint.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            http_client,
        })
    }

    /// Creates a new source from the source config.
    pub fn from_config(config: &SourceConfig) -> Result<Self> {
        Self::new(config.endpoint.clone(), config.request_timeout())
    }

    /// Decodes a snapshot body.
    pub fn parse_snapshot(body: &[u8]) -> Result<SnapshotResult> {
        Ok(serde_json::from_slice(body)?)
    }

    /// Creates a SourceError from a non-success response.
    fn status_error(status: StatusCode, body: &[u8]) -> SourceError {
        let mut text = String::from_utf8_lossy(body).trim().to_string();
        if text.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !text.is_char_boundary(cut) {
                cut -= 1;
            }
            text.truncate(cut);
        }

        warn!(code = status.as_u16(), body = %text, "snapshot endpoint error");

        SourceError::Status {
            code: status.as_u16(),
            body: text,
        }
    }
}

#[async_trait]
impl SnapshotSource for HttpSource {
    async fn fetch(&self) -> Result<SnapshotResult> {
        debug!(endpoint = %self.endpoint, "fetching snapshot");

        let response = self.http_client.get(&self.endpoint).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        if !status.is_success() {
            return Err(Self::status_error(status, &body));
        }

        let snapshot = Self::parse_snapshot(&body)?;
        debug!(
            quotes = snapshot.quotes.len(),
            history = snapshot.history.len(),
            "snapshot received"
        );

        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
