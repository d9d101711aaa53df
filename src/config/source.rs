//! Snapshot source configuration.

use serde::Deserialize;
use std::time::Duration;

use super::duration;

/// Default snapshot endpoint of the spread server.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api/spread";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Where and how the snapshot is fetched.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// Full URL of the snapshot endpoint (overridden by SPREAD_API_URL).
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Transport timeout for a single fetch (default: 10s).
    #[serde(default, with = "duration")]
    pub request_timeout: Duration,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl SourceConfig {
    /// Returns the request timeout, falling back to the default when unset.
    pub fn request_timeout(&self) -> Duration {
        if self.request_timeout.is_zero() {
            DEFAULT_REQUEST_TIMEOUT
        } else {
            self.request_timeout
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            request_timeout: Duration::ZERO,
        }
    }
}
