//! OpenWeather integration
//!
//! Client for the OpenWeather geocoding, current weather and 5 day / 3 hour
//! forecast APIs (<https://openweathermap.org/api>). Every query returns a
//! normalized [`Outcome`]; only transport failures are errors.

pub mod client;
mod models;

pub use client::{OpenWeatherClient, OpenWeatherConfig, Outcome, Units, WeatherClient, WeatherError};
pub use models::{
    ConditionsRecord, ForecastEntry, ForecastResponse, GeoRecord, MainBlock, WeatherDescription,
    WindBlock,
};
