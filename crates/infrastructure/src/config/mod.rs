//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `forecast`: reference time zone for grouping and export
//!
//! Weather provider settings reuse `integration_weather::OpenWeatherConfig`.

mod forecast;
mod server;

use std::path::Path;

use integration_weather::OpenWeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub use forecast::ForecastConfig;
pub use server::{LogFormat, ServerConfig};

/// Prefix of environment overrides, e.g. `SKYCAST_SERVER__PORT`
pub const ENV_PREFIX: &str = "SKYCAST";

/// Environment variable read when no API key is configured
pub const LEGACY_API_KEY_VAR: &str = "OPEN_WEATHER_KEY";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server and logging
    #[serde(default)]
    pub server: ServerConfig,

    /// OpenWeather client
    #[serde(default)]
    pub weather: OpenWeatherConfig,

    /// Forecast grouping
    #[serde(default)]
    pub forecast: ForecastConfig,
}

impl AppConfig {
    /// Load configuration from environment and optional `config.toml`
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration, reading `path` instead of `config.toml` if given
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::with_name("config").required(false),
        };

        let builder = config::Config::builder()
            // Start with defaults
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("forecast.timezone", "UTC")?
            // Load from file if exists
            .add_source(file)
            // Override with environment variables (e.g., SKYCAST_WEATHER__API_KEY)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let mut config: Self = builder.build()?.try_deserialize()?;
        config.apply_legacy_api_key(std::env::var(LEGACY_API_KEY_VAR).ok());

        debug!(
            host = %config.server.host,
            port = config.server.port,
            zone = %config.forecast.timezone,
            units = %config.weather.units,
            "Configuration loaded"
        );

        if !config.has_api_key() {
            warn!("No OpenWeather API key configured (set SKYCAST_WEATHER__API_KEY)");
        }

        Ok(config)
    }

    /// Use `key` as API key when none is configured
    pub fn apply_legacy_api_key(&mut self, key: Option<String>) {
        if self.has_api_key() {
            return;
        }
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            debug!("Using API key from {LEGACY_API_KEY_VAR}");
            self.weather.api_key = SecretString::from(key);
        }
    }

    /// Whether a non-empty API key is configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.weather.api_key.expose_secret().trim().is_empty()
    }
}
