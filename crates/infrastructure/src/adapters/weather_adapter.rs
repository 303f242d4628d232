//! Weather adapter - Implements WeatherPort using integration_weather

use application::{error::ApplicationError, ports::WeatherPort};
use async_trait::async_trait;
use domain::{CurrentConditions, GeoLocation, HourlyForecast, Location, Metric};
use integration_weather::{
    ConditionsRecord, ForecastEntry, ForecastResponse, GeoRecord, OpenWeatherClient,
    OpenWeatherConfig, Outcome, Units, WeatherClient, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather lookups using the OpenWeather API
pub struct WeatherAdapter {
    client: OpenWeatherClient,
    forecast_units: Units,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .field("base_url", &self.client.config().base_url)
            .field("forecast_units", &self.forecast_units)
            .finish()
    }
}

impl WeatherAdapter {
    /// Create an adapter from client configuration
    ///
    /// Forecasts are requested in the configured units.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to initialize.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, ApplicationError> {
        let forecast_units = config.units;
        let client = OpenWeatherClient::new(config).map_err(Self::map_error)?;
        Ok(Self {
            client,
            forecast_units,
        })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::InvalidConfiguration(e) => ApplicationError::Configuration(e),
            WeatherError::ConnectionFailed(_)
            | WeatherError::Timeout(_)
            | WeatherError::ParseError(_) => ApplicationError::Transport(err.to_string()),
        }
    }

    /// Turn a rejected outcome into an error
    fn accept(outcome: Outcome) -> Result<Outcome, ApplicationError> {
        if outcome.success {
            Ok(outcome)
        } else {
            Err(ApplicationError::UpstreamRejected {
                status: outcome.status_code,
            })
        }
    }

    fn map_location(record: GeoRecord) -> Location {
        Location::new(
            record.lat,
            record.lon,
            record.name,
            record.country.unwrap_or_default(),
        )
    }

    fn map_current(record: &ConditionsRecord) -> CurrentConditions {
        let main = record.main();
        CurrentConditions {
            temperature: main.temp.map(|r| r.value()),
            feels_like: main.feels_like.map(|r| r.value()),
            humidity: main.humidity.map(|r| r.value()),
            wind_speed: record.wind_speed().map(|r| r.value()),
            condition_labels: Vec::new(),
        }
        .with_descriptions(record.descriptions())
    }

    fn map_forecast(entry: &ForecastEntry) -> Result<HourlyForecast, ApplicationError> {
        let main = entry.main();
        let forecast = HourlyForecast::at_unix(entry.dt)
            .map_err(|e| ApplicationError::Transport(format!("Bad forecast timestamp: {e}")))?
            .with_reading(Metric::Temp, main.temp)
            .with_reading(Metric::FeelsLike, main.feels_like)
            .with_reading(Metric::Humidity, main.humidity)
            .with_reading(Metric::WindSpeed, entry.wind_speed())
            .with_descriptions(entry.descriptions());
        Ok(forecast)
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self))]
    async fn geocode(&self, term: &str) -> Result<Vec<Location>, ApplicationError> {
        let outcome = self.client.geocode(term).await.map_err(Self::map_error)?;
        let records: Vec<GeoRecord> = Self::accept(outcome)?
            .decode()
            .map_err(Self::map_error)?;

        debug!(results = records.len(), "Geocoded search term");
        Ok(records.into_iter().map(Self::map_location).collect())
    }

    #[instrument(skip(self), fields(location = %location))]
    async fn current_conditions(
        &self,
        location: &GeoLocation,
    ) -> Result<CurrentConditions, ApplicationError> {
        let outcome = self
            .client
            .current_conditions(location.latitude(), location.longitude())
            .await
            .map_err(Self::map_error)?;
        let record: ConditionsRecord = Self::accept(outcome)?
            .decode()
            .map_err(Self::map_error)?;

        Ok(Self::map_current(&record))
    }

    #[instrument(skip(self), fields(location = %location))]
    async fn hourly_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<Vec<HourlyForecast>, ApplicationError> {
        let outcome = self
            .client
            .forecast(location.latitude(), location.longitude(), self.forecast_units)
            .await
            .map_err(Self::map_error)?;
        let response: ForecastResponse = Self::accept(outcome)?
            .decode()
            .map_err(Self::map_error)?;

        debug!(steps = response.list.len(), "Fetched forecast");
        response.list.iter().map(Self::map_forecast).collect()
    }
}

#[cfg(test)]
mod tests {
    use domain::Reading;

    use super::*;

    fn decode<T: serde::de::DeserializeOwned>(json: &str) -> T {
        let outcome = Outcome::from_response(200, json.as_bytes()).unwrap();
        outcome.decode().unwrap()
    }

    #[test]
    fn adapter_creation() {
        let adapter = WeatherAdapter::new(OpenWeatherConfig::default());
        assert!(adapter.is_ok());
    }

    #[test]
    fn debug_output() {
        let adapter = WeatherAdapter::new(OpenWeatherConfig::default()).unwrap();
        let debug = format!("{adapter:?}");
        assert!(debug.contains("WeatherAdapter"));
        assert!(debug.contains("api.openweathermap.org"));
    }

    #[test]
    fn map_error_variants() {
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::Timeout("30s".into())),
            ApplicationError::Transport(_)
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::ParseError("eof".into())),
            ApplicationError::Transport(_)
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::ConnectionFailed("dns".into())),
            ApplicationError::Transport(_)
        ));
        assert!(matches!(
            WeatherAdapter::map_error(WeatherError::InvalidConfiguration("tls".into())),
            ApplicationError::Configuration(_)
        ));
    }

    #[test]
    fn rejected_outcome_carries_status() {
        let outcome = Outcome {
            success: false,
            status_code: 401,
            payload: None,
        };
        let err = WeatherAdapter::accept(outcome).unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::UpstreamRejected { status: 401 }
        ));
    }

    #[test]
    fn location_without_country() {
        let record: GeoRecord = decode(r#"{"name": "Atlantis", "lat": 1.0, "lon": 2.0}"#);
        let location = WeatherAdapter::map_location(record);
        assert_eq!(location.name, "Atlantis");
        assert_eq!(location.country, "");
    }

    #[test]
    fn current_conditions_mapping() {
        let record: ConditionsRecord = decode(
            r#"{
                "weather": [{"description": "moderate rain"}],
                "main": {"temp": 20, "feels_like": 19, "humidity": 77},
                "wind": {"speed": 9.25}
            }"#,
        );

        let current = WeatherAdapter::map_current(&record);
        assert_eq!(current.temperature, Some(20.0));
        assert_eq!(current.feels_like, Some(19.0));
        assert_eq!(current.humidity, Some(77.0));
        assert_eq!(current.wind_speed, Some(9.25));
        assert_eq!(current.condition_labels, ["Moderate rain"]);
    }

    #[test]
    fn forecast_mapping() {
        let entry: ForecastEntry = decode(
            r#"{
                "dt": 1661871600,
                "main": {"temp": 16, "feels_like": 15},
                "weather": [{"description": "light rain"}, {"description": "mist"}]
            }"#,
        );

        let forecast = WeatherAdapter::map_forecast(&entry).unwrap();
        assert_eq!(forecast.timestamp.timestamp(), 1_661_871_600);
        assert_eq!(forecast.temperature, Some(Reading::whole(16)));
        assert_eq!(forecast.humidity, None);
        assert_eq!(forecast.wind_speed, None);
        assert_eq!(forecast.condition_labels, ["Light rain", "Mist"]);
    }

    #[test]
    fn out_of_range_timestamp_is_transport_error() {
        let entry: ForecastEntry = decode(r#"{"dt": 9223372036854775807}"#);
        assert!(matches!(
            WeatherAdapter::map_forecast(&entry),
            Err(ApplicationError::Transport(_))
        ));
    }
}
