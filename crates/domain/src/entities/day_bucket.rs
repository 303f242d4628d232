//! Day bucket entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::HourlyForecast;
use crate::value_objects::Metric;

/// All forecasts that fall on one calendar day of the reference zone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayBucket {
    /// Calendar day in the reference zone
    pub date: NaiveDate,
    /// First instant of that day
    pub start: DateTime<Utc>,
    /// `YYYYMMDD` grouping key
    pub key: String,
    /// Forecasts in input order
    pub forecasts: Vec<HourlyForecast>,
}

impl DayBucket {
    /// Create an empty bucket for a calendar day
    #[must_use]
    pub fn new(date: NaiveDate, start: DateTime<Utc>) -> Self {
        Self {
            date,
            start,
            key: Self::key_for(date),
            forecasts: Vec::new(),
        }
    }

    /// Grouping key for a calendar day
    #[must_use]
    pub fn key_for(date: NaiveDate) -> String {
        date.format("%Y%m%d").to_string()
    }

    /// Append a forecast, keeping input order
    pub fn push(&mut self, forecast: HourlyForecast) {
        self.forecasts.push(forecast);
    }

    /// Number of forecasts in the bucket
    #[must_use]
    pub fn len(&self) -> usize {
        self.forecasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.forecasts.is_empty()
    }

    /// Arithmetic mean of a metric over the forecasts that carry it
    ///
    /// Forecasts missing the reading are left out of both the sum and the
    /// count. Returns `None` when no forecast carries the reading.
    #[must_use]
    pub fn average(&self, metric: Metric) -> Option<f64> {
        let (sum, count) = self
            .forecasts
            .iter()
            .filter_map(|f| f.metric(metric))
            .fold((0.0_f64, 0_u32), |(sum, count), v| (sum + v, count + 1));

        (count > 0).then(|| sum / f64::from(count))
    }

    #[must_use]
    pub fn average_temperature(&self) -> Option<f64> {
        self.average(Metric::Temp)
    }

    #[must_use]
    pub fn average_feels_like(&self) -> Option<f64> {
        self.average(Metric::FeelsLike)
    }

    #[must_use]
    pub fn average_humidity(&self) -> Option<f64> {
        self.average(Metric::Humidity)
    }

    #[must_use]
    pub fn average_wind_speed(&self) -> Option<f64> {
        self.average(Metric::WindSpeed)
    }

    /// Date formatted `DD/MM/YYYY` for display
    #[must_use]
    pub fn date_text(&self) -> String {
        self.date.format("%d/%m/%Y").to_string()
    }
}
