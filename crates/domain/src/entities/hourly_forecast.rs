//! Hourly forecast entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    errors::DomainError,
    value_objects::{Metric, Reading},
};

/// Upper-case the first character of a provider description and lower-case
/// the rest ("light rain" -> "Light rain")
#[must_use]
pub fn capitalize_description(description: &str) -> String {
    let mut chars = description.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// One forecast step for a single instant
///
/// Numeric readings are optional: upstream payloads may omit any of them and
/// the forecast is still grouped, it just contributes nothing to that
/// metric's average.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Forecast instant (UTC)
    pub timestamp: DateTime<Utc>,
    /// Air temperature
    pub temperature: Option<Reading>,
    /// Apparent temperature
    pub feels_like: Option<Reading>,
    /// Relative humidity in percent
    pub humidity: Option<Reading>,
    /// Wind speed
    pub wind_speed: Option<Reading>,
    /// Capitalised condition descriptions, possibly empty
    pub condition_labels: Vec<String>,
}

impl HourlyForecast {
    /// Create a forecast with no readings for the given instant
    #[must_use]
    pub const fn at(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            temperature: None,
            feels_like: None,
            humidity: None,
            wind_speed: None,
            condition_labels: Vec::new(),
        }
    }

    /// Create a forecast for a Unix timestamp in seconds
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateTime` if the timestamp is out of range.
    pub fn at_unix(seconds: i64) -> Result<Self, DomainError> {
        DateTime::from_timestamp(seconds, 0)
            .map(Self::at)
            .ok_or_else(|| DomainError::InvalidDateTime(format!("unix timestamp {seconds}")))
    }

    /// Set a reading from a plain value
    #[must_use]
    pub fn with_metric(self, metric: Metric, value: Option<f64>) -> Self {
        self.with_reading(metric, value.map(Reading::decimal))
    }

    /// Set a reading, keeping the form the provider sent it in
    #[must_use]
    pub fn with_reading(mut self, metric: Metric, value: Option<Reading>) -> Self {
        match metric {
            Metric::FeelsLike => self.feels_like = value,
            Metric::Humidity => self.humidity = value,
            Metric::Temp => self.temperature = value,
            Metric::WindSpeed => self.wind_speed = value,
        }
        self
    }

    /// Set the condition labels, capitalising each raw description
    #[must_use]
    pub fn with_descriptions<I, S>(mut self, descriptions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.condition_labels = descriptions
            .into_iter()
            .map(|d| capitalize_description(d.as_ref()))
            .collect();
        self
    }

    /// Reading for a metric, if present
    #[must_use]
    pub const fn reading(&self, metric: Metric) -> Option<Reading> {
        match metric {
            Metric::FeelsLike => self.feels_like,
            Metric::Humidity => self.humidity,
            Metric::Temp => self.temperature,
            Metric::WindSpeed => self.wind_speed,
        }
    }

    /// Value of a metric, if present
    #[must_use]
    pub fn metric(&self, metric: Metric) -> Option<f64> {
        self.reading(metric).map(|r| r.value())
    }

    /// Condition labels joined for display, `None` when there are none
    #[must_use]
    pub fn condition_text(&self) -> Option<String> {
        if self.condition_labels.is_empty() {
            None
        } else {
            Some(self.condition_labels.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalizes_first_letter() {
        assert_eq!(capitalize_description("light rain"), "Light rain");
        assert_eq!(capitalize_description("Overcast CLOUDS"), "Overcast clouds");
        assert_eq!(capitalize_description(""), "");
        assert_eq!(capitalize_description("ébrouement"), "Ébrouement");
    }

    #[test]
    fn builds_from_unix_seconds() {
        let forecast = HourlyForecast::at_unix(1_661_871_600).expect("valid timestamp");
        assert_eq!(forecast.timestamp.to_rfc3339(), "2022-08-30T15:00:00+00:00");
        assert!(forecast.condition_labels.is_empty());
    }

    #[test]
    fn rejects_out_of_range_unix_seconds() {
        assert!(HourlyForecast::at_unix(i64::MAX).is_err());
    }

    #[test]
    fn metric_accessor_matches_fields() {
        let forecast = HourlyForecast::at_unix(0)
            .expect("valid timestamp")
            .with_metric(Metric::Temp, Some(20.0))
            .with_metric(Metric::FeelsLike, Some(19.0))
            .with_metric(Metric::Humidity, Some(90.0));

        assert_eq!(forecast.metric(Metric::Temp), Some(20.0));
        assert_eq!(forecast.metric(Metric::FeelsLike), Some(19.0));
        assert_eq!(forecast.metric(Metric::Humidity), Some(90.0));
        assert_eq!(forecast.metric(Metric::WindSpeed), None);
    }

    #[test]
    fn with_reading_keeps_whole_numbers() {
        let forecast = HourlyForecast::at_unix(0)
            .expect("valid timestamp")
            .with_reading(Metric::Humidity, Some(Reading::whole(90)));

        assert_eq!(forecast.metric(Metric::Humidity), Some(90.0));
        assert_eq!(forecast.reading(Metric::Humidity).map(|r| r.to_string()).as_deref(), Some("90"));
    }

    #[test]
    fn descriptions_are_capitalized() {
        let forecast = HourlyForecast::at_unix(0)
            .expect("valid timestamp")
            .with_descriptions(["light rain", "mist"]);
        assert_eq!(forecast.condition_labels, ["Light rain", "Mist"]);
        assert_eq!(forecast.condition_text().as_deref(), Some("Light rain, Mist"));
    }

    #[test]
    fn condition_text_single_and_empty() {
        let single = HourlyForecast::at_unix(0)
            .expect("valid timestamp")
            .with_descriptions(["rain"]);
        assert_eq!(single.condition_text().as_deref(), Some("Rain"));

        let none = HourlyForecast::at_unix(0).expect("valid timestamp");
        assert_eq!(none.condition_text(), None);
    }
}
