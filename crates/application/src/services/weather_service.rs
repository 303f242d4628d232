//! Weather service - search, show and export use cases
//!
//! Failures from the weather provider are absorbed here: they are logged and
//! turned into an empty result, so aggregation and export only ever see
//! data that was actually fetched.

use std::{fmt, sync::Arc};

use domain::{CurrentConditions, DayBucket, GeoLocation, Location, ReferenceZone};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use super::{CsvExport, CsvExporter, ForecastAggregator};
use crate::{error::ApplicationError, ports::WeatherPort};

/// Everything shown for one selected location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationOverview {
    pub location: Location,
    pub current: Option<CurrentConditions>,
    pub days: Vec<DayBucket>,
}

/// Service for looking up and exporting weather by location
pub struct WeatherService {
    weather: Arc<dyn WeatherPort>,
    aggregator: ForecastAggregator,
    exporter: CsvExporter,
}

impl fmt::Debug for WeatherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherService")
            .field("zone", &self.aggregator.zone())
            .finish_non_exhaustive()
    }
}

impl WeatherService {
    /// Create a service grouping days in the given reference zone
    pub fn new(weather: Arc<dyn WeatherPort>, zone: ReferenceZone) -> Self {
        Self {
            weather,
            aggregator: ForecastAggregator::new(zone),
            exporter: CsvExporter::new(zone),
        }
    }

    /// Reference zone for calendar days and export columns
    pub const fn zone(&self) -> ReferenceZone {
        self.aggregator.zone()
    }

    /// Find locations matching a place name
    ///
    /// A blank term is not a search and returns nothing without a request.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Vec<Location> {
        let term = term.trim();
        if term.is_empty() {
            debug!("Blank search term, skipping lookup");
            return Vec::new();
        }

        match self.weather.geocode(term).await {
            Ok(locations) => {
                info!(results = locations.len(), "Location search completed");
                locations
            },
            Err(e) => {
                Self::log_degraded("geocode", &e);
                Vec::new()
            },
        }
    }

    /// Current conditions, or `None` if they could not be fetched
    #[instrument(skip(self), fields(location = %location))]
    pub async fn current(&self, location: &GeoLocation) -> Option<CurrentConditions> {
        match self.weather.current_conditions(location).await {
            Ok(current) => Some(current),
            Err(e) => {
                Self::log_degraded("current_conditions", &e);
                None
            },
        }
    }

    /// Forecast grouped by day, empty if it could not be fetched
    #[instrument(skip(self), fields(location = %location))]
    pub async fn forecast(&self, location: &GeoLocation) -> Vec<DayBucket> {
        match self.weather.hourly_forecast(location).await {
            Ok(forecasts) => {
                debug!(steps = forecasts.len(), "Forecast fetched");
                self.aggregator.group(forecasts)
            },
            Err(e) => {
                Self::log_degraded("hourly_forecast", &e);
                Vec::new()
            },
        }
    }

    /// Current conditions and daily forecast for a location
    ///
    /// Only invalid coordinates are an error.
    #[instrument(skip(self), fields(location = %location))]
    pub async fn overview(&self, location: &Location) -> Result<LocationOverview, ApplicationError> {
        let geo = location.geo_location()?;

        let current = self.current(&geo).await;
        let days = self.forecast(&geo).await;

        Ok(LocationOverview {
            location: location.clone(),
            current,
            days,
        })
    }

    /// Forecast for a location rendered as CSV
    #[instrument(skip(self), fields(location = %location))]
    pub async fn export(&self, location: &Location) -> Result<CsvExport, ApplicationError> {
        let geo = location.geo_location()?;
        let days = self.forecast(&geo).await;

        let export = self.exporter.export(&location.name, &days)?;
        info!(filename = %export.filename, days = days.len(), "Forecast exported");
        Ok(export)
    }

    fn log_degraded(operation: &'static str, error: &ApplicationError) {
        match error.upstream_status() {
            Some(status) => warn!(operation, status, "Weather provider rejected request"),
            None => warn!(operation, error = %error, "Weather lookup failed"),
        }
    }
}
