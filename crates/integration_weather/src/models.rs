//! Raw OpenWeather payload records
//!
//! Only the fields the application reads are modelled; everything else in the
//! payload is ignored. Numeric readings are optional because the provider
//! omits them for some stations, and keep whether they were sent as integers.

use domain::Reading;
use serde::Deserialize;

/// One row of a geocoding response (`/geo/1.0/direct`)
#[derive(Debug, Clone, Deserialize)]
pub struct GeoRecord {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: Option<String>,
}

/// `main` block shared by current and forecast payloads
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MainBlock {
    #[serde(default)]
    pub temp: Option<Reading>,
    #[serde(default)]
    pub feels_like: Option<Reading>,
    #[serde(default)]
    pub humidity: Option<Reading>,
}

/// `wind` block
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WindBlock {
    #[serde(default)]
    pub speed: Option<Reading>,
}

/// One element of the `weather` array
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherDescription {
    #[serde(default)]
    pub description: Option<String>,
}

/// Current weather payload (`/data/2.5/weather`)
#[derive(Debug, Clone, Deserialize)]
pub struct ConditionsRecord {
    #[serde(default)]
    pub main: Option<MainBlock>,
    #[serde(default)]
    pub wind: Option<WindBlock>,
    #[serde(default)]
    pub weather: Option<Vec<WeatherDescription>>,
}

/// One step of the forecast `list`
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    /// Unix timestamp in seconds
    pub dt: i64,
    #[serde(default)]
    pub main: Option<MainBlock>,
    #[serde(default)]
    pub wind: Option<WindBlock>,
    #[serde(default)]
    pub weather: Option<Vec<WeatherDescription>>,
}

/// Forecast payload (`/data/2.5/forecast`)
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
}

fn descriptions_of(weather: Option<&Vec<WeatherDescription>>) -> Vec<&str> {
    weather
        .map(|items| {
            items
                .iter()
                .filter_map(|w| w.description.as_deref())
                .collect()
        })
        .unwrap_or_default()
}

impl ConditionsRecord {
    /// Raw description strings in payload order
    #[must_use]
    pub fn descriptions(&self) -> Vec<&str> {
        descriptions_of(self.weather.as_ref())
    }

    #[must_use]
    pub fn main(&self) -> MainBlock {
        self.main.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn wind_speed(&self) -> Option<Reading> {
        self.wind.as_ref().and_then(|w| w.speed)
    }
}

impl ForecastEntry {
    /// Raw description strings in payload order
    #[must_use]
    pub fn descriptions(&self) -> Vec<&str> {
        descriptions_of(self.weather.as_ref())
    }

    #[must_use]
    pub fn main(&self) -> MainBlock {
        self.main.clone().unwrap_or_default()
    }

    #[must_use]
    pub fn wind_speed(&self) -> Option<Reading> {
        self.wind.as_ref().and_then(|w| w.speed)
    }
}
