//! Forecast metrics

use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric reading carried by every forecast record
///
/// Variants are declared in the order their columns appear within one hour
/// group of the CSV export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Apparent temperature
    FeelsLike,
    /// Relative humidity in percent
    Humidity,
    /// Air temperature
    Temp,
    /// Wind speed
    WindSpeed,
}

impl Metric {
    /// Every metric, in column order
    pub const ALL: [Self; 4] = [Self::FeelsLike, Self::Humidity, Self::Temp, Self::WindSpeed];

    /// Lowercase column name used in export headers
    #[must_use]
    pub const fn column_name(&self) -> &'static str {
        match self {
            Self::FeelsLike => "feels_like",
            Self::Humidity => "humidity",
            Self::Temp => "temp",
            Self::WindSpeed => "wind_speed",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
