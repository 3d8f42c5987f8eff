//! Command-line flags, each with an environment fallback.

use std::time::Duration;

use celestial_adapters::gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiConfig};
use clap::Parser;
use secrecy::SecretString;

/// Interactive star-reading in the terminal.
#[derive(Debug, Parser)]
#[command(name = "celestial", version, about)]
pub struct Args {
    /// Gemini API key. Without one every reading is the offline report.
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Gemini model name.
    #[arg(long, env = "GEMINI_MODEL", default_value = DEFAULT_MODEL)]
    pub gemini_model: String,

    /// Gemini API base URL.
    #[arg(long, env = "GEMINI_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub gemini_base_url: String,

    /// IP geolocation endpoint (ip-api.com JSON shape). Omit to skip
    /// location probing.
    #[arg(long, env = "LOCATION_LOOKUP_URL")]
    pub location_lookup_url: Option<String>,

    /// Upper bound on one location read, in milliseconds.
    #[arg(long, env = "LOCATION_PROBE_TIMEOUT_MS", default_value_t = 5000)]
    pub location_probe_timeout_ms: u64,
}

impl Args {
    /// Narrative service settings. A blank key counts as no key.
    #[must_use]
    pub fn gemini(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self
                .gemini_api_key
                .as_deref()
                .map(str::trim)
                .filter(|key| !key.is_empty())
                .map(|key| SecretString::from(key.to_owned())),
            model: self.gemini_model.clone(),
            base_url: self.gemini_base_url.clone(),
        }
    }

    /// Probe timeout as a duration.
    #[must_use]
    pub fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.location_probe_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "celestial",
            "--gemini-model",
            "m",
            "--location-probe-timeout-ms",
            "250",
            "--location-lookup-url",
            "http://ip-api.com/json",
        ])
        .unwrap();

        assert_eq!(args.gemini().model, "m");
        assert_eq!(args.probe_timeout(), Duration::from_millis(250));
        assert_eq!(
            args.location_lookup_url.as_deref(),
            Some("http://ip-api.com/json")
        );
    }

    #[test]
    fn test_blank_key_is_dropped() {
        let args =
            Args::try_parse_from(["celestial", "--gemini-api-key", "  "]).unwrap();

        assert!(args.gemini().api_key.is_none());
    }
}
