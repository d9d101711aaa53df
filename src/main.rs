mod analytics;
mod config;
mod dashboard;
mod domain;
mod report;
mod source;

use config::Config;
use dashboard::{Dashboard, DashboardOptions, Phase};
use source::{HttpSource, StaticFundingRates};
use std::env;
use std::sync::Arc;
use tracing::{Level, error, info};
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_CONFIG_PATH: &str = "configs/config.yaml";

fn parse_config_path() -> String {
    for arg in env::args().skip(1) {
        if let Some(path) = arg.strip_prefix("--config=") {
            return path.to_string();
        }
    }
    DEFAULT_CONFIG_PATH.to_string()
}

fn init_tracing(log_level: Option<&str>) {
    let level = match log_level {
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("warn") | Some("warning") => Level::WARN,
        Some("error") => Level::ERROR,
        Some("trace") => Level::TRACE,
        _ => Level::INFO,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

#[tokio::main]
async fn main() {
    let config_path = parse_config_path();

    let config = match Config::load_or_default(&config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return;
        }
    };

    init_tracing(config.app.log_level.as_deref());

    let source = match HttpSource::from_config(&config.source) {
        Ok(source) => source,
        Err(e) => {
            error!(error = %e, "Failed to create snapshot source");
            return;
        }
    };
    let funding = StaticFundingRates::new(config.funding.rates.clone());

    let dashboard = Arc::new(Dashboard::new(
        Arc::new(source),
        Arc::new(funding),
        DashboardOptions::from_config(&config.dashboard),
    ));

    info!(
        app = %config.app.name,
        env = %config.app.env,
        config = %config_path,
        endpoint = %config.source.endpoint,
        "Dashboard initialized"
    );

    let runner = Arc::clone(&dashboard);
    let mut loop_handle = tokio::spawn(async move { runner.start().await });

    let mut updates = dashboard.subscribe();
    let mut last_updated = None;
    report::log_view(&dashboard.view(), &config);

    loop {
        tokio::select! {
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                // Phase flips to Fetching every cycle; only render settled outcomes.
                if state.updated_at != last_updated || state.phase == Phase::Failure {
                    last_updated = state.updated_at;
                    report::log_view(&state.view(), &config);
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("Shutdown requested");
                dashboard.shutdown();
                break;
            }
            result = &mut loop_handle => {
                if let Ok(Err(e)) = result {
                    error!(error = %e, "Dashboard error");
                }
                return;
            }
        }
    }

    match loop_handle.await {
        Ok(Err(e)) => error!(error = %e, "Dashboard error"),
        Err(e) => error!(error = %e, "Refresh loop panicked"),
        Ok(Ok(())) => {}
    }

    let stats = dashboard.stats().await;
    info!(
        cycles = stats.cycles,
        successes = stats.successes,
        failures = stats.failures,
        last_success = ?stats.last_success_at,
        "Dashboard stopped"
    );
}
