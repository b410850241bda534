//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the FitBook API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `FITBOOK_TIMEZONE`: IANA timezone for requests that do not name one (default: "UTC")
//! - `FITBOOK_WORKING_HOURS`: Working hours for requests that do not send any,
//!   as `start-end` (default: "8-20")

use chrono_tz::Tz;
use eyre::{Result, WrapErr, eyre};
use fitbook_core::models::working_hours::WorkingHours;
use std::env;
use tracing::Level;

/// Configuration for the FitBook API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use fitbook_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}", config.server_addr());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Timezone used to resolve the requested day when the caller omits one
    pub default_timezone: Tz,

    /// Working hours used when the caller omits them
    pub default_working_hours: WorkingHours,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - FITBOOK_TIMEZONE is not a known IANA timezone
    /// - FITBOOK_WORKING_HOURS is not of the form `start-end`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = match lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        // Scheduling defaults
        let default_timezone = match lookup("FITBOOK_TIMEZONE") {
            Some(name) => name
                .parse::<Tz>()
                .map_err(|e| eyre!("Invalid FITBOOK_TIMEZONE value '{}': {}", name, e))?,
            None => Tz::UTC,
        };
        let default_working_hours = match lookup("FITBOOK_WORKING_HOURS") {
            Some(hours) => hours
                .parse::<WorkingHours>()
                .wrap_err("Invalid FITBOOK_WORKING_HOURS value")?,
            None => WorkingHours::default(),
        };

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            default_timezone,
            default_working_hours,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
