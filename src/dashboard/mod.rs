//! Refresh controller for the spread dashboard.
//!
//! Periodically pulls a snapshot, runs the analytics over it and swaps the
//! result into a single shared slot. Readers always see either the previous
//! analytics or the new ones, never a mix.

mod config;
mod error;
mod state;
mod stats;

pub use config::DashboardOptions;
pub use error::DashboardError;
pub use state::{DashboardState, Phase, View};
pub use stats::RefreshStats;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::Utc;
use tokio::sync::{Mutex, Notify, watch};
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use crate::analytics::Analytics;
use crate::domain::{FundingRate, SnapshotResult};
use crate::source::{FundingSource, SnapshotSource, SourceError};

/// Dashboard drives the refresh cadence and owns the displayed state.
pub struct Dashboard {
    source: Arc<dyn SnapshotSource>,
    funding: Arc<dyn FundingSource>,
    options: DashboardOptions,

    // Displayed state; the controller is the only writer.
    state: watch::Sender<DashboardState>,

    // Runtime state
    running: Mutex<bool>,
    shutdown: watch::Sender<bool>,
    retry: Notify,
    generation: AtomicU64,
    fetch_lock: Mutex<()>,
    stats: Mutex<RefreshStats>,
}

impl Dashboard {
    /// Creates a new Dashboard in the cold-start state.
    pub fn new(
        source: Arc<dyn SnapshotSource>,
        funding: Arc<dyn FundingSource>,
        options: DashboardOptions,
    ) -> Self {
        let (state, _) = watch::channel(DashboardState::default());
        let (shutdown, _) = watch::channel(false);

        Self {
            source,
            funding,
            options,
            state,
            running: Mutex::new(false),
            shutdown,
            retry: Notify::new(),
            generation: AtomicU64::new(0),
            fetch_lock: Mutex::new(()),
            stats: Mutex::new(RefreshStats::default()),
        }
    }

    /// Returns a receiver that observes every state replacement.
    pub fn subscribe(&self) -> watch::Receiver<DashboardState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current state.
    pub fn state(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    /// Returns what should currently be displayed.
    pub fn view(&self) -> View {
        self.state.borrow().view()
    }

    /// Returns a copy of the refresh statistics.
    pub async fn stats(&self) -> RefreshStats {
        self.stats.lock().await.clone()
    }

    /// Returns true if the refresh loop is running.
    pub async fn is_running(&self) -> bool {
        *self.running.lock().await
    }

    /// Runs the refresh loop until [`Dashboard::shutdown`] is called.
    ///
    /// The first refresh happens immediately. Shutdown is final: once it has
    /// been requested, `start` returns without fetching.
    pub async fn start(&self) -> Result<(), DashboardError> {
        {
            let mut running = self.running.lock().await;
            if *running {
                return Err(DashboardError::AlreadyRunning);
            }
            *running = true;
        }

        info!(
            source = %self.source.describe(),
            refresh_interval = ?self.options.refresh_interval,
            period_minutes = self.options.window.period_minutes,
            bucket_minutes = self.options.window.bucket_minutes,
            "Starting dashboard refresh loop"
        );

        self.run_loop().await;

        *self.running.lock().await = false;
        info!("Dashboard refresh loop stopped");

        Ok(())
    }

    /// Stops the loop and abandons any in-flight fetch.
    ///
    /// A fetch that completes after this call is discarded.
    pub fn shutdown(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.shutdown.send_replace(true);
    }

    /// Requests an immediate refresh instead of waiting for the next tick.
    pub async fn retry(&self) -> Result<(), DashboardError> {
        if !self.is_running().await {
            return Err(DashboardError::NotRunning);
        }
        debug!("Manual retry requested");
        self.retry.notify_one();
        Ok(())
    }

    /// Fetches one snapshot and swaps in the new analytics.
    ///
    /// On failure the previous analytics stay in place and only the error
    /// indicator changes. At most one fetch is in flight at a time.
    pub async fn refresh(&self) -> Result<(), DashboardError> {
        let _guard = self.fetch_lock.lock().await;
        let generation = self.generation.load(Ordering::SeqCst);

        self.state.send_modify(|s| s.phase = Phase::Fetching);

        let fetched = self.fetch().await;

        match fetched {
            Ok((snapshot, rates)) => {
                let previous = self.state.borrow().data.clone();
                let analytics = Arc::new(Analytics::compute(
                    snapshot,
                    rates,
                    self.options.window,
                    previous.as_deref(),
                ));

                let applied = self.apply_if_current(generation, |s| {
                    s.phase = Phase::Success;
                    s.data = Some(analytics);
                    s.error = None;
                    s.updated_at = Some(Utc::now());
                });
                if !applied {
                    return Err(self.discard_abandoned());
                }
                self.record_success().await;
                Ok(())
            }
            Err(e) => {
                let message = e.to_string();
                let applied = self.apply_if_current(generation, |s| {
                    s.phase = Phase::Failure;
                    s.error = Some(message.clone());
                });
                if !applied {
                    return Err(self.discard_abandoned());
                }
                self.record_failure(message).await;
                Err(e.into())
            }
        }
    }

    /// Writes the outcome of a fetch started under `generation`.
    ///
    /// The generation is checked under the state lock, so a fetch abandoned
    /// by [`Dashboard::shutdown`] never lands. Returns false if discarded.
    fn apply_if_current<F>(&self, generation: u64, update: F) -> bool
    where
        F: FnOnce(&mut DashboardState),
    {
        let mut applied = false;
        self.state.send_if_modified(|s| {
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            update(s);
            applied = true;
            true
        });
        applied
    }

    fn discard_abandoned(&self) -> DashboardError {
        info!("Discarding result of abandoned fetch");
        self.settle_abandoned();
        DashboardError::Cancelled
    }

    /// Pulls the snapshot and the funding rates.
    async fn fetch(&self) -> Result<(SnapshotResult, Vec<FundingRate>), SourceError> {
        let snapshot = self.source.fetch().await?;
        let rates = self.funding.rates().await?;
        Ok((snapshot, rates))
    }

    /// Timer-driven loop; one refresh per tick, never overlapping.
    async fn run_loop(&self) {
        let mut shutdown = self.shutdown.subscribe();
        let period = self.options.refresh_interval.max(Duration::from_millis(1));
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            if *shutdown.borrow_and_update() {
                break;
            }

            tokio::select! {
                _ = shutdown.changed() => break,
                _ = ticker.tick() => {}
                _ = self.retry.notified() => {
                    ticker.reset();
                }
            }

            tokio::select! {
                biased;
                _ = shutdown.changed() => {
                    info!("Abandoning in-flight fetch");
                    self.settle_abandoned();
                    break;
                }
                result = self.refresh() => self.log_cycle(result).await,
            }
        }
    }

    /// Leaves the Fetching phase without touching data or error.
    fn settle_abandoned(&self) {
        self.state.send_if_modified(|s| {
            if s.phase == Phase::Fetching {
                s.phase = Phase::Idle;
                true
            } else {
                false
            }
        });
    }

    async fn log_cycle(&self, result: Result<(), DashboardError>) {
        let stats = self.stats().await;

        match result {
            Ok(()) => {
                if stats.cycles.saturating_sub(1) % self.options.summary_every.max(1) == 0 {
                    info!(
                        cycle = stats.cycles,
                        successes = stats.successes,
                        failures = stats.failures,
                        "Refresh cycle running"
                    );
                } else {
                    debug!(cycle = stats.cycles, "Refresh succeeded");
                }
            }
            Err(DashboardError::Cancelled) => {}
            Err(e) => {
                warn!(
                    cycle = stats.cycles,
                    consecutive_failures = stats.consecutive_failures,
                    error = %e,
                    "Refresh failed, keeping last data"
                );
            }
        }
    }

    async fn record_success(&self) {
        let mut stats = self.stats.lock().await;
        stats.cycles += 1;
        stats.successes += 1;
        if stats.consecutive_failures > 0 {
            info!(
                failures = stats.consecutive_failures,
                "Snapshot source recovered"
            );
        }
        stats.consecutive_failures = 0;
        stats.last_success_at = Some(Utc::now());
        stats.last_error = None;
    }

    async fn record_failure(&self, message: String) {
        let mut stats = self.stats.lock().await;
        stats.cycles += 1;
        stats.failures += 1;
        stats.consecutive_failures += 1;
        stats.last_error = Some(message);
    }
}
