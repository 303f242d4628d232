//! Weather service port
//!
//! Defines the interface for weather data retrieval. Implementations return
//! domain objects; a non-success answer from the provider is reported as
//! `ApplicationError::UpstreamRejected` and a transport failure as
//! `ApplicationError::Transport`.

use async_trait::async_trait;
use domain::{CurrentConditions, GeoLocation, HourlyForecast, Location};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for weather service operations
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Find candidate locations for a free-text place name
    async fn geocode(&self, term: &str) -> Result<Vec<Location>, ApplicationError>;

    /// Current conditions at a coordinate
    async fn current_conditions(
        &self,
        location: &GeoLocation,
    ) -> Result<CurrentConditions, ApplicationError>;

    /// Flat list of forecast steps at a coordinate, in provider order
    async fn hourly_forecast(
        &self,
        location: &GeoLocation,
    ) -> Result<Vec<HourlyForecast>, ApplicationError>;
}
