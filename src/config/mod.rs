//! Configuration loading and validation for the spread dashboard.
//!
//! Uses serde_yaml to load YAML configuration files. Every section except
//! `app` is optional and falls back to the built-in defaults; the snapshot
//! endpoint can be overridden from the environment.

mod app;
mod dashboard;
mod duration;
mod error;
mod exchange;
mod funding;
mod source;

pub use app::AppConfig;
pub use dashboard::DashboardConfig;
pub use error::ConfigError;
pub use exchange::{ExchangeConfig, FALLBACK_COLOR};
pub use funding::{FundingConfig, FundingRateConfig};
pub use source::{DEFAULT_ENDPOINT, SourceConfig};

use serde::Deserialize;
use std::{collections::HashMap, env, fs, io};
use tracing::warn;

/// Environment variable overriding `source.endpoint`.
pub const ENDPOINT_ENV: &str = "SPREAD_API_URL";

/// Root configuration structure for the dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Application-level settings like name and log level.
    pub app: AppConfig,
    /// Snapshot endpoint settings.
    #[serde(default)]
    pub source: SourceConfig,
    /// Refresh cadence and analytics window.
    #[serde(default)]
    pub dashboard: DashboardConfig,
    /// Display metadata keyed by exchange key.
    #[serde(default = "exchange::default_exchanges")]
    pub exchanges: HashMap<String, ExchangeConfig>,
    /// Static funding-rate list.
    #[serde(default)]
    pub funding: FundingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app: AppConfig::default(),
            source: SourceConfig::default(),
            dashboard: DashboardConfig::default(),
            exchanges: exchange::default_exchanges(),
            funding: FundingConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Loads `.env` first (if present) so that `SPREAD_API_URL` can be set there.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::NotFound(path.to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        let mut config: Config = serde_yaml::from_str(&content)?;

        config.apply_env_overrides(|key| env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Like [`Config::load`], but a missing file yields the built-in defaults.
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::NotFound(path)) => {
                warn!(path = %path, "Config file not found, using defaults");
                let mut config = Config::default();
                config.apply_env_overrides(|key| env::var(key).ok());
                config.validate()?;
                Ok(config)
            }
            other => other,
        }
    }

    /// Applies environment overrides using the given lookup.
    fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.trim().is_empty()) {
            self.source.endpoint = endpoint.trim().to_string();
        }
    }

    /// Returns the display name for an exchange key, or the key itself.
    pub fn display_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.exchanges
            .get(&key.to_lowercase())
            .map(|ex| ex.display_name.as_str())
            .unwrap_or(key)
    }

    /// Returns the indicator color for an exchange key.
    pub fn color(&self, key: &str) -> &str {
        self.exchanges
            .get(&key.to_lowercase())
            .map(|ex| ex.color.as_str())
            .unwrap_or(FALLBACK_COLOR)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.trim().is_empty() {
            return Err(ConfigError::invalid("app.name", "is required"));
        }

        let endpoint = &self.source.endpoint;
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "source.endpoint",
                format!("{} is not an http(s) URL", endpoint),
            ));
        }

        if self.dashboard.period_minutes == 0 {
            return Err(ConfigError::invalid(
                "dashboard.period_minutes",
                "must be positive",
            ));
        }

        if !(1..=60).contains(&self.dashboard.bucket_minutes) {
            return Err(ConfigError::invalid(
                "dashboard.bucket_minutes",
                format!("{} is outside 1..=60", self.dashboard.bucket_minutes),
            ));
        }

        if self.dashboard.summary_every == 0 {
            return Err(ConfigError::invalid(
                "dashboard.summary_every",
                "must be positive",
            ));
        }

        for rate in &self.funding.rates {
            if rate.exchange.trim().is_empty() {
                return Err(ConfigError::invalid(
                    "funding.rates",
                    "exchange name is required",
                ));
            }
            if !rate.rate.is_finite() {
                return Err(ConfigError::invalid(
                    "funding.rates",
                    format!("rate for {} is not a finite number", rate.exchange),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
