//! Location handlers
//!
//! Search by place name, show one location, and download its forecast as
//! CSV. Upstream failures never surface as errors here: the service has
//! already turned them into empty results.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::header,
    response::IntoResponse,
};
use chrono::{DateTime, NaiveDate, Utc};
use domain::{CurrentConditions, DayBucket, HourlyForecast, Location, Reading, ReferenceZone, Units};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{error::ApiError, state::AppState};

/// Query for `GET /v1/locations`
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text place name; absent or blank means "not searching"
    #[serde(default)]
    pub term: Option<String>,
}

/// Search results
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub term: Option<String>,
    pub locations: Vec<Location>,
}

/// Coordinates and label of a selected location
#[derive(Debug, Deserialize)]
pub struct CoordinateParams {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

impl CoordinateParams {
    fn into_location(self, country: String) -> Result<Location, ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::BadRequest("name must not be empty".to_string()));
        }
        Ok(Location::new(self.lat, self.lng, self.name, country))
    }
}

/// Current conditions panel
#[derive(Debug, Serialize)]
pub struct CurrentView {
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub conditions: Vec<String>,
    pub summary: String,
}

impl CurrentView {
    fn new(current: CurrentConditions, units: Units) -> Self {
        let summary = current.summary(units);
        Self {
            temperature: current.temperature,
            feels_like: current.feels_like,
            humidity: current.humidity,
            wind_speed: current.wind_speed,
            conditions: current.condition_labels,
            summary,
        }
    }
}

/// Daily means, absent where no forecast carried the reading
#[derive(Debug, Serialize)]
pub struct Averages {
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
}

/// One forecast step
#[derive(Debug, Serialize)]
pub struct ForecastView {
    pub timestamp: DateTime<Utc>,
    /// `HHMM` in the reference zone
    pub local_time: String,
    pub temperature: Option<Reading>,
    pub feels_like: Option<Reading>,
    pub humidity: Option<Reading>,
    pub wind_speed: Option<Reading>,
    pub conditions: Option<String>,
}

impl ForecastView {
    fn new(forecast: &HourlyForecast, zone: ReferenceZone) -> Self {
        Self {
            timestamp: forecast.timestamp,
            local_time: zone.hour_minute(&forecast.timestamp).to_string(),
            temperature: forecast.temperature,
            feels_like: forecast.feels_like,
            humidity: forecast.humidity,
            wind_speed: forecast.wind_speed,
            conditions: forecast.condition_text(),
        }
    }
}

/// One calendar day of the forecast
#[derive(Debug, Serialize)]
pub struct DayView {
    pub date: NaiveDate,
    pub date_text: String,
    pub key: String,
    pub averages: Averages,
    pub forecasts: Vec<ForecastView>,
}

impl DayView {
    fn new(day: &DayBucket, zone: ReferenceZone) -> Self {
        Self {
            date: day.date,
            date_text: day.date_text(),
            key: day.key.clone(),
            averages: Averages {
                temperature: day.average_temperature(),
                feels_like: day.average_feels_like(),
                humidity: day.average_humidity(),
                wind_speed: day.average_wind_speed(),
            },
            forecasts: day
                .forecasts
                .iter()
                .map(|f| ForecastView::new(f, zone))
                .collect(),
        }
    }
}

/// Overview of one location
#[derive(Debug, Serialize)]
pub struct OverviewResponse {
    pub location: Location,
    pub timezone: String,
    /// Unit system of every reading in the response
    pub units: Units,
    pub current: Option<CurrentView>,
    pub days: Vec<DayView>,
}

/// Search locations by name
#[instrument(skip(state, params))]
pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let Query(params) = params?;
    let term = params.term.filter(|t| !t.trim().is_empty());

    let locations = match &term {
        Some(term) => state.weather_service.search(term).await,
        None => Vec::new(),
    };

    Ok(Json(SearchResponse { term, locations }))
}

/// Current conditions and daily forecast for a location
#[instrument(skip(state, country, params))]
pub async fn show(
    State(state): State<AppState>,
    country: Result<Path<String>, PathRejection>,
    params: Result<Query<CoordinateParams>, QueryRejection>,
) -> Result<Json<OverviewResponse>, ApiError> {
    let Path(country) = country?;
    let Query(params) = params?;
    let location = params.into_location(country)?;

    let overview = state.weather_service.overview(&location).await?;
    let zone = state.weather_service.zone();
    let units = state.config.weather.units;

    Ok(Json(OverviewResponse {
        location: overview.location,
        timezone: zone.name().to_string(),
        units,
        current: overview.current.map(|c| CurrentView::new(c, units)),
        days: overview.days.iter().map(|d| DayView::new(d, zone)).collect(),
    }))
}

/// Forecast for a location as a CSV download
#[instrument(skip(state, country, params))]
pub async fn export(
    State(state): State<AppState>,
    country: Result<Path<String>, PathRejection>,
    params: Result<Query<CoordinateParams>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(country) = country?;
    let Query(params) = params?;
    let location = params.into_location(country)?;

    let export = state.weather_service.export(&location).await?;
    info!(filename = %export.filename, bytes = export.content.len(), "Serving CSV export");

    let disposition = format!(
        "attachment; filename=\"{}\"",
        export.filename.replace('"', "")
    );

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        export.content,
    ))
}
