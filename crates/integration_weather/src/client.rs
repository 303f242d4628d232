//! OpenWeather client
//!
//! HTTP client for the OpenWeather API. Each query performs exactly one GET
//! request with the API key attached as the `appid` query parameter and
//! returns a normalized [`Outcome`].

use async_trait::async_trait;
pub use domain::Units;
use reqwest::{Client, header::CONTENT_TYPE};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::{debug, instrument, warn};

const GEOCODE_PATH: &str = "/geo/1.0/direct";
const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";

/// Weather client errors
///
/// Only transport-level failures are errors. Non-2xx responses are reported
/// through [`Outcome::success`].
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// The client could not be built from its configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl From<reqwest::Error> for WeatherError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_decode() {
            Self::ParseError(err.to_string())
        } else {
            Self::ConnectionFailed(err.to_string())
        }
    }
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct OpenWeatherConfig {
    /// OpenWeather API base URL (default: <http://api.openweathermap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// API key sent as `appid` (sensitive - uses SecretString)
    #[serde(default = "default_api_key", skip_serializing)]
    pub api_key: SecretString,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Unit system (default: metric)
    #[serde(default)]
    pub units: Units,
}

impl std::fmt::Debug for OpenWeatherConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenWeatherConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("timeout_secs", &self.timeout_secs)
            .field("units", &self.units)
            .finish()
    }
}

fn default_base_url() -> String {
    "http://api.openweathermap.org".to_string()
}

fn default_api_key() -> SecretString {
    SecretString::from(String::new())
}

const fn default_timeout() -> u64 {
    30
}

impl Default for OpenWeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: default_api_key(),
            timeout_secs: default_timeout(),
            units: Units::default(),
        }
    }
}

/// Normalized result of one upstream query
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// True iff the status code is 200 or 201
    pub success: bool,
    /// HTTP status code
    pub status_code: u16,
    /// JSON-decoded body, whatever the status
    pub payload: Option<serde_json::Value>,
}

impl Outcome {
    /// Whether a status code counts as a successful fetch
    #[must_use]
    pub const fn is_success_status(status_code: u16) -> bool {
        matches!(status_code, 200 | 201)
    }

    /// Build an outcome from a status code and raw body
    ///
    /// An empty body yields no payload. A body that is not JSON is a
    /// `ParseError` on success statuses and no payload otherwise.
    ///
    /// # Errors
    ///
    /// Returns `WeatherError::ParseError` for a malformed body on a 200/201.
    pub fn from_response(status_code: u16, body: &[u8]) -> Result<Self, WeatherError> {
        let success = Self::is_success_status(status_code);

        let payload = if body.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            match serde_json::from_slice(body) {
                Ok(value) => Some(value),
                Err(e) if success => return Err(WeatherError::ParseError(e.to_string())),
                Err(e) => {
                    debug!(status_code, error = %e, "Ignoring non-JSON error body");
                    None
                },
            }
        };

        Ok(Self {
            success,
            status_code,
            payload,
        })
    }

    /// Decode the payload into a typed record
    ///
    /// # Errors
    ///
    /// Returns `WeatherError::ParseError` if the payload is missing or does
    /// not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, WeatherError> {
        let payload = self
            .payload
            .clone()
            .ok_or_else(|| WeatherError::ParseError("Response has no body".to_string()))?;
        serde_json::from_value(payload).map_err(|e| WeatherError::ParseError(e.to_string()))
    }
}

/// Weather client trait for the three upstream queries
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Look up places matching a free-text name
    async fn geocode(&self, query: &str) -> Result<Outcome, WeatherError>;

    /// Current conditions at a coordinate, in the configured units
    async fn current_conditions(&self, latitude: f64, longitude: f64)
    -> Result<Outcome, WeatherError>;

    /// Five day / three hour forecast at a coordinate
    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        units: Units,
    ) -> Result<Outcome, WeatherError>;
}

/// OpenWeather HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new OpenWeather client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::InvalidConfiguration(e.to_string()))?;

        if config.api_key.expose_secret().is_empty() {
            warn!("No OpenWeather API key configured; upstream requests will be rejected");
        }

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_defaults() -> Result<Self, WeatherError> {
        Self::new(OpenWeatherConfig::default())
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &OpenWeatherConfig {
        &self.config
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    fn coordinate_params(latitude: f64, longitude: f64, units: Units) -> [(&'static str, String); 3] {
        [
            ("lat", latitude.to_string()),
            ("lon", longitude.to_string()),
            ("units", units.as_str().to_string()),
        ]
    }

    /// Issue one GET and normalize the response
    async fn fetch(&self, path: &str, params: &[(&str, String)]) -> Result<Outcome, WeatherError> {
        let url = self.endpoint(path);
        debug!(url = %url, "Querying OpenWeather");

        let response = self
            .client
            .get(&url)
            .header(CONTENT_TYPE, "application/json")
            .query(&[("appid", self.config.api_key.expose_secret())])
            .query(params)
            .send()
            .await?;

        let status_code = response.status().as_u16();
        let body = response.bytes().await?;
        let outcome = Outcome::from_response(status_code, &body)?;

        if outcome.success {
            debug!(status_code, "OpenWeather request succeeded");
        } else {
            warn!(status_code, path, "OpenWeather rejected request");
        }

        Ok(outcome)
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<Outcome, WeatherError> {
        self.fetch(GEOCODE_PATH, &[("q", query.to_string())]).await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn current_conditions(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Outcome, WeatherError> {
        let params = Self::coordinate_params(latitude, longitude, self.config.units);
        self.fetch(CURRENT_PATH, &params).await
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, units = %units))]
    async fn forecast(
        &self,
        latitude: f64,
        longitude: f64,
        units: Units,
    ) -> Result<Outcome, WeatherError> {
        let params = Self::coordinate_params(latitude, longitude, units);
        self.fetch(FORECAST_PATH, &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = OpenWeatherConfig::default();
        assert_eq!(config.base_url, "http://api.openweathermap.org");
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.units, Units::Metric);
        assert!(config.api_key.expose_secret().is_empty());
    }

    #[test]
    fn test_config_debug_redacts_key() {
        let config = OpenWeatherConfig {
            api_key: SecretString::from("super-secret".to_string()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_config_deserialization() {
        let json = r#"{"base_url": "https://custom.api.com", "api_key": "abc", "units": "imperial"}"#;
        let config: OpenWeatherConfig = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(config.base_url, "https://custom.api.com");
        assert_eq!(config.api_key.expose_secret(), "abc");
        assert_eq!(config.units, Units::Imperial);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_config_serialization_skips_key() {
        let config = OpenWeatherConfig {
            api_key: SecretString::from("abc".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).expect("should serialize");
        assert!(!json.contains("api_key"));
        assert!(json.contains("\"units\":\"metric\""));
    }

    #[test]
    fn test_success_statuses() {
        assert!(Outcome::is_success_status(200));
        assert!(Outcome::is_success_status(201));
        assert!(!Outcome::is_success_status(204));
        assert!(!Outcome::is_success_status(401));
        assert!(!Outcome::is_success_status(500));
    }

    #[test]
    fn test_outcome_keeps_error_payload() {
        let body = br#"{"cod": 401, "message": "Invalid API key"}"#;
        let outcome = Outcome::from_response(401, body).expect("should normalize");
        assert!(!outcome.success);
        assert_eq!(outcome.status_code, 401);
        let payload = outcome.payload.expect("payload kept");
        assert_eq!(payload["message"], "Invalid API key");
    }

    #[test]
    fn test_outcome_empty_body() {
        let outcome = Outcome::from_response(500, b"").expect("should normalize");
        assert!(!outcome.success);
        assert!(outcome.payload.is_none());
    }

    #[test]
    fn test_outcome_html_error_body() {
        let outcome =
            Outcome::from_response(502, b"<html>Bad Gateway</html>").expect("should normalize");
        assert!(!outcome.success);
        assert!(outcome.payload.is_none());
    }

    #[test]
    fn test_outcome_malformed_success_body() {
        let err = Outcome::from_response(200, b"{not json").expect_err("should fail");
        assert!(matches!(err, WeatherError::ParseError(_)));
    }

    #[test]
    fn test_outcome_decode() {
        let outcome = Outcome::from_response(200, br#"{"list": []}"#).expect("should normalize");
        let decoded: crate::ForecastResponse = outcome.decode().expect("should decode");
        assert!(decoded.list.is_empty());

        let empty = Outcome {
            success: true,
            status_code: 200,
            payload: None,
        };
        assert!(empty.decode::<crate::ForecastResponse>().is_err());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let client = OpenWeatherClient::new(OpenWeatherConfig {
            base_url: "http://localhost:9999/".to_string(),
            ..Default::default()
        })
        .expect("client creation should succeed");
        assert_eq!(
            client.endpoint(FORECAST_PATH),
            "http://localhost:9999/data/2.5/forecast"
        );
    }

    #[test]
    fn test_coordinate_params() {
        let params = OpenWeatherClient::coordinate_params(51.507_321_9, -0.127_647_4, Units::Metric);
        assert_eq!(params[0], ("lat", "51.5073219".to_string()));
        assert_eq!(params[1], ("lon", "-0.1276474".to_string()));
        assert_eq!(params[2], ("units", "metric".to_string()));
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::Timeout("after 30s".to_string());
        assert!(err.to_string().contains("timed out"));

        let err = WeatherError::ParseError("eof".to_string());
        assert_eq!(err.to_string(), "Parse error: eof");
    }

    #[test]
    fn test_client_creation() {
        assert!(OpenWeatherClient::with_defaults().is_ok());
    }
}
