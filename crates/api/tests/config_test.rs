use std::collections::HashMap;

use chrono_tz::Tz;
use fitbook_api::config::ApiConfig;
use fitbook_core::models::working_hours::WorkingHours;
use pretty_assertions::assert_eq;
use tracing::Level;

fn config_from(vars: &[(&str, &str)]) -> eyre::Result<ApiConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    ApiConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]).expect("Failed to build config");

    assert_eq!(config.host, "0.0.0.0");
    assert_eq!(config.port, 3000);
    assert_eq!(config.log_level, Level::INFO);
    assert_eq!(config.cors_origins, None);
    assert_eq!(config.request_timeout, 30);
    assert_eq!(config.default_timezone, Tz::UTC);
    assert_eq!(config.default_working_hours, WorkingHours::new(8, 20));
    assert_eq!(config.server_addr(), "0.0.0.0:3000");
}

#[test]
fn test_overrides() {
    let config = config_from(&[
        ("API_HOST", "127.0.0.1"),
        ("API_PORT", "8080"),
        ("LOG_LEVEL", "debug"),
        ("API_CORS_ORIGINS", "http://localhost:5173, https://fitbook.example,"),
        ("API_REQUEST_TIMEOUT_SECONDS", "5"),
        ("FITBOOK_TIMEZONE", "Europe/Warsaw"),
        ("FITBOOK_WORKING_HOURS", "6-22"),
    ])
    .expect("Failed to build config");

    assert_eq!(config.server_addr(), "127.0.0.1:8080");
    assert_eq!(config.log_level, Level::DEBUG);
    assert_eq!(
        config.cors_origins,
        Some(vec![
            "http://localhost:5173".to_string(),
            "https://fitbook.example".to_string(),
        ])
    );
    assert_eq!(config.request_timeout, 5);
    assert_eq!(config.default_timezone, Tz::Europe__Warsaw);
    assert_eq!(config.default_working_hours, WorkingHours::new(6, 22));
}

#[test]
fn test_unparseable_timeout_falls_back() {
    let config = config_from(&[("API_REQUEST_TIMEOUT_SECONDS", "soon")]).unwrap();

    assert_eq!(config.request_timeout, 30);
}

#[test]
fn test_invalid_port_is_rejected() {
    assert!(config_from(&[("API_PORT", "eighty")]).is_err());
}

#[test]
fn test_invalid_timezone_is_rejected() {
    assert!(config_from(&[("FITBOOK_TIMEZONE", "Mars/Olympus_Mons")]).is_err());
}

#[test]
fn test_invalid_working_hours_are_rejected() {
    assert!(config_from(&[("FITBOOK_WORKING_HOURS", "nine to five")]).is_err());
}
