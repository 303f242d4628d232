//! Current conditions entity

use serde::{Deserialize, Serialize};

use super::hourly_forecast::capitalize_description;
use crate::value_objects::{Metric, Units};

/// Observed weather right now at a location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    /// Capitalised condition descriptions, possibly empty
    pub condition_labels: Vec<String>,
}

impl CurrentConditions {
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
    pub const fn metric(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::FeelsLike => self.feels_like,
            Metric::Humidity => self.humidity,
            Metric::Temp => self.temperature,
            Metric::WindSpeed => self.wind_speed,
        }
    }

    /// Condition labels joined for display
    #[must_use]
    pub fn condition_text(&self) -> Option<String> {
        (!self.condition_labels.is_empty()).then(|| self.condition_labels.join(", "))
    }

    /// One-line summary labelled in the units the readings were fetched in
    #[must_use]
    pub fn summary(&self, units: Units) -> String {
        let degrees = units.temperature_suffix();
        let mut parts = Vec::new();
        if let Some(text) = self.condition_text() {
            parts.push(text);
        }
        if let Some(temp) = self.temperature {
            parts.push(format!("{temp:.1}{degrees}"));
        }
        if let Some(feels) = self.feels_like {
            parts.push(format!("feels like {feels:.1}{degrees}"));
        }
        if let Some(humidity) = self.humidity {
            parts.push(format!("humidity {humidity:.0}%"));
        }
        if let Some(wind) = self.wind_speed {
            parts.push(format!("wind {wind:.1}{}", units.speed_suffix()));
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_present_readings() {
        let current = CurrentConditions {
            temperature: Some(20.0),
            feels_like: Some(19.0),
            humidity: Some(77.0),
            wind_speed: Some(9.4),
            condition_labels: Vec::new(),
        }
        .with_descriptions(["moderate rain"]);

        assert_eq!(
            current.summary(Units::Metric),
            "Moderate rain, 20.0°C, feels like 19.0°C, humidity 77%, wind 9.4 m/s"
        );
    }

    #[test]
    fn summary_skips_missing_readings() {
        let current = CurrentConditions {
            temperature: Some(-3.5),
            ..CurrentConditions::default()
        };
        assert_eq!(current.summary(Units::Metric), "-3.5°C");
        assert_eq!(current.metric(Metric::Humidity), None);
    }

    #[test]
    fn summary_uses_imperial_labels() {
        let current = CurrentConditions {
            temperature: Some(68.0),
            wind_speed: Some(10.0),
            ..CurrentConditions::default()
        };
        assert_eq!(current.summary(Units::Imperial), "68.0°F, wind 10.0 mph");
    }

    #[test]
    fn summary_uses_kelvin_for_standard_units() {
        let current = CurrentConditions {
            temperature: Some(293.5),
            feels_like: Some(292.0),
            ..CurrentConditions::default()
        };
        assert_eq!(current.summary(Units::Standard), "293.5 K, feels like 292.0 K");
    }
}
