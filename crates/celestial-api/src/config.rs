//! Server configuration read from the environment.

use std::time::Duration;

use celestial_adapters::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};
use celestial_oracle::application::location_probe::DEFAULT_PROBE_TIMEOUT;
use secrecy::SecretString;

use crate::error::AppError;

/// Everything `main` needs to start the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind address host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Narrative service settings.
    pub gemini: GeminiConfig,
    /// IP geolocation endpoint. `None` disables server-side probing.
    pub location_lookup_url: Option<String>,
    /// Upper bound on one location read.
    pub probe_timeout: Duration,
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` or `LOCATION_PROBE_TIMEOUT_MS`
    /// is not a number.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` or `LOCATION_PROBE_TIMEOUT_MS`
    /// is not a number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());
        let port = match var("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|e| AppError::Config(format!("PORT must be a valid u16: {e}")))?,
            None => 3000,
        };
        let probe_timeout = match var("LOCATION_PROBE_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse().map(Duration::from_millis).map_err(|e| {
                AppError::Config(format!(
                    "LOCATION_PROBE_TIMEOUT_MS must be a whole number of milliseconds: {e}"
                ))
            })?,
            None => DEFAULT_PROBE_TIMEOUT,
        };

        Ok(Self {
            host,
            port,
            gemini: GeminiConfig {
                api_key: var("GEMINI_API_KEY").map(SecretString::from),
                model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
                base_url: var("GEMINI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            },
            location_lookup_url: var("LOCATION_LOOKUP_URL"),
            probe_timeout,
        })
    }
}
