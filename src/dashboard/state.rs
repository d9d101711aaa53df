//! The displayed state slot and what readers see of it.

use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::analytics::Analytics;

/// Refresh phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No fetch in flight and no outcome yet.
    Idle,
    /// A fetch is in flight.
    Fetching,
    /// The last fetch succeeded.
    Success,
    /// The last fetch failed.
    Failure,
}

/// DashboardState is the single shared slot written by the controller.
///
/// `data` only ever changes by wholesale replacement; `error` is kept apart
/// from it so a failure never touches the last good analytics.
#[derive(Debug, Clone)]
pub struct DashboardState {
    pub phase: Phase,
    pub data: Option<Arc<Analytics>>,
    pub error: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            data: None,
            error: None,
            updated_at: None,
        }
    }
}

/// What the presentation layer should show.
#[derive(Debug, Clone)]
pub enum View {
    /// Cold start: nothing fetched yet.
    Loading,
    /// No data and the last fetch failed; offer a retry.
    Error { message: String },
    /// Data available, possibly stale with an error indicator.
    Ready {
        analytics: Arc<Analytics>,
        error: Option<String>,
    },
}

impl DashboardState {
    pub fn view(&self) -> View {
        match (&self.data, &self.error) {
            (Some(analytics), error) => View::Ready {
                analytics: Arc::clone(analytics),
                error: error.clone(),
            },
            (None, Some(message)) => View::Error {
                message: message.clone(),
            },
            (None, None) => View::Loading,
        }
    }
}
