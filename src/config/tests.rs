//! Tests for config module.

use super::*;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

// ==================== Duration parsing tests ====================

#[test]
fn test_parse_duration_seconds() {
    let d = duration::parse_duration("3s").unwrap();
    assert_eq!(d, Duration::from_secs(3));
}

#[test]
fn test_parse_duration_minutes() {
    let d = duration::parse_duration("15m").unwrap();
    assert_eq!(d, Duration::from_secs(900));
}

#[test]
fn test_parse_duration_hours() {
    let d = duration::parse_duration("1h").unwrap();
    assert_eq!(d, Duration::from_secs(3600));
}

#[test]
fn test_parse_duration_milliseconds() {
    let d = duration::parse_duration("500ms").unwrap();
    assert_eq!(d, Duration::from_millis(500));
}

#[test]
fn test_parse_duration_bare_number_is_seconds() {
    let d = duration::parse_duration("2").unwrap();
    assert_eq!(d, Duration::from_secs(2));
}

#[test]
fn test_parse_duration_compound() {
    let d = duration::parse_duration("1m30s").unwrap();
    assert_eq!(d, Duration::from_secs(90));
}

#[test]
fn test_parse_duration_empty() {
    let d = duration::parse_duration("").unwrap();
    assert_eq!(d, Duration::ZERO);
}

#[test]
fn test_parse_duration_invalid_unit() {
    let result = duration::parse_duration("10x");
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("unknown duration unit"));
}

#[test]
fn test_parse_duration_missing_number() {
    assert!(duration::parse_duration("s").is_err());
}

#[test]
fn test_parse_duration_overflow_is_an_error() {
    let result = duration::parse_duration("99999999999999999999h");
    assert!(result.unwrap_err().contains("invalid duration"));
}

// ==================== YAML field loading tests ====================

/// Parse config from YAML string (for testing).
fn from_yaml(yaml: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

fn minimal_valid_yaml() -> String {
    r#"
app:
  name: dashboard
"#
    .to_string()
}

#[test]
fn test_minimal_yaml_uses_defaults() {
    let cfg = from_yaml(&minimal_valid_yaml()).unwrap();

    assert_eq!(cfg.app.name, "dashboard");
    assert_eq!(cfg.app.env, "development");
    assert_eq!(cfg.source.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(cfg.source.request_timeout(), Duration::from_secs(10));
    assert_eq!(cfg.dashboard.refresh_interval(), Duration::from_secs(3));
    assert_eq!(cfg.dashboard.period_minutes, 15);
    assert_eq!(cfg.dashboard.bucket_minutes, 10);
    assert_eq!(cfg.exchanges.len(), 3);
    assert_eq!(cfg.funding.rates.len(), 3);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_load_source_and_dashboard_fields() {
    let yaml = r#"
app:
  name: dashboard
  env: production
  log_level: debug

source:
  endpoint: https://spread.example.com/api/spread
  request_timeout: 2s

dashboard:
  refresh_interval: 500ms
  period_minutes: 30
  bucket_minutes: 5
  summary_every: 10
"#;
    let cfg = from_yaml(yaml).unwrap();

    assert_eq!(cfg.app.log_level, Some("debug".to_string()));
    assert_eq!(cfg.source.endpoint, "https://spread.example.com/api/spread");
    assert_eq!(cfg.source.request_timeout(), Duration::from_secs(2));
    assert_eq!(cfg.dashboard.refresh_interval(), Duration::from_millis(500));
    assert_eq!(cfg.dashboard.period_minutes, 30);
    assert_eq!(cfg.dashboard.bucket_minutes, 5);
    assert_eq!(cfg.dashboard.summary_every, 10);
}

#[test]
fn test_load_exchange_table() {
    let yaml = r##"
app:
  name: dashboard

exchanges:
  paradex:
    display_name: Paradex
    color: "#ff00ff"
  vertex:
    display_name: Vertex
"##;
    let cfg = from_yaml(yaml).unwrap();

    assert_eq!(cfg.exchanges.len(), 2);
    assert_eq!(cfg.display_name("paradex"), "Paradex");
    assert_eq!(cfg.color("paradex"), "#ff00ff");
    assert_eq!(cfg.color("vertex"), FALLBACK_COLOR);
}

#[test]
fn test_display_name_lookup_is_case_insensitive() {
    let cfg = Config::default();

    assert_eq!(cfg.display_name("hyperliquid"), "Hyperliquid");
    assert_eq!(cfg.display_name("Aster"), "Aster");
    assert_eq!(cfg.color("LIGHTER"), "#3fb950");
}

#[test]
fn test_display_name_unknown_falls_back_to_key() {
    let cfg = Config::default();

    assert_eq!(cfg.display_name("dydx"), "dydx");
    assert_eq!(cfg.color("dydx"), FALLBACK_COLOR);
}

#[test]
fn test_load_funding_rates() {
    let yaml = r#"
app:
  name: dashboard

funding:
  rates:
    - exchange: Hyperliquid
      rate: 0.0001
      next_update_in: 30m
    - exchange: Lighter
      rate: -0.00005
"#;
    let cfg = from_yaml(yaml).unwrap();

    let rates = &cfg.funding.rates;
    assert_eq!(rates.len(), 2);
    assert_eq!(rates[0].exchange, "Hyperliquid");
    assert_eq!(rates[0].next_update_in, Duration::from_secs(1800));
    assert_eq!(rates[1].rate, -0.00005);
    assert_eq!(rates[1].next_update_in, Duration::from_secs(3600));
}

#[test]
fn test_missing_app_section_fails() {
    let yaml = r#"
dashboard:
  period_minutes: 15
"#;
    assert!(from_yaml(yaml).is_err());
}

// ==================== Environment override tests ====================

#[test]
fn test_env_overrides_endpoint() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();

    cfg.apply_env_overrides(|key| {
        (key == ENDPOINT_ENV).then(|| "http://10.0.0.5:9000/api/spread".to_string())
    });

    assert_eq!(cfg.source.endpoint, "http://10.0.0.5:9000/api/spread");
}

#[test]
fn test_env_override_ignores_blank_value() {
    let mut cfg = from_yaml(&minimal_valid_yaml()).unwrap();

    cfg.apply_env_overrides(|_| Some("   ".to_string()));

    assert_eq!(cfg.source.endpoint, DEFAULT_ENDPOINT);
}

// ==================== Validation tests ====================

#[test]
fn test_validate_empty_name() {
    let mut cfg = Config::default();
    cfg.app.name = String::new();

    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("app.name"));
}

#[test]
fn test_validate_endpoint_scheme() {
    let mut cfg = Config::default();
    cfg.source.endpoint = "localhost:8080/api/spread".to_string();

    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("source.endpoint"));
}

#[test]
fn test_validate_bucket_minutes_range() {
    let mut cfg = Config::default();
    cfg.dashboard.bucket_minutes = 0;
    assert!(cfg.validate().is_err());

    cfg.dashboard.bucket_minutes = 61;
    assert!(cfg.validate().is_err());

    cfg.dashboard.bucket_minutes = 60;
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_validate_period_minutes() {
    let mut cfg = Config::default();
    cfg.dashboard.period_minutes = 0;

    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("dashboard.period_minutes"));
}

#[test]
fn test_validate_non_finite_rate() {
    let mut cfg = Config::default();
    cfg.funding.rates[0].rate = f64::NAN;

    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("funding.rates"));
}

// ==================== File loading tests ====================

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
app:
  name: filebot
dashboard:
  refresh_interval: 5s
"#
    )
    .unwrap();

    let cfg = Config::load(file.path().to_str().unwrap()).unwrap();

    assert_eq!(cfg.app.name, "filebot");
    assert_eq!(cfg.dashboard.refresh_interval(), Duration::from_secs(5));
}

#[test]
fn test_load_invalid_yaml() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "app: [unclosed").unwrap();

    let result = Config::load(file.path().to_str().unwrap());
    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_load_missing_file() {
    let result = Config::load("/nonexistent/path/config.yaml");
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[test]
fn test_load_or_default_missing_file() {
    let cfg = Config::load_or_default("/nonexistent/path/config.yaml").unwrap();

    assert_eq!(cfg.app.name, "spread-dashboard");
    assert_eq!(cfg.dashboard.bucket_minutes, 10);
}

#[test]
fn test_load_validation_error_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
app:
  name: filebot
dashboard:
  bucket_minutes: 90
"#
    )
    .unwrap();

    let result = Config::load(file.path().to_str().unwrap());
    assert!(matches!(result, Err(ConfigError::Validation { .. })));
}
