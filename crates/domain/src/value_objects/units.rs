//! Unit systems offered by the weather provider

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit system readings are reported in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    /// Kelvin, m/s
    Standard,
    /// Celsius, m/s
    #[default]
    Metric,
    /// Fahrenheit, mph
    Imperial,
}

impl Units {
    /// Query parameter value
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Suffix for temperatures
    #[must_use]
    pub const fn temperature_suffix(&self) -> &'static str {
        match self {
            Self::Standard => " K",
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Suffix for wind speeds
    #[must_use]
    pub const fn speed_suffix(&self) -> &'static str {
        match self {
            Self::Standard | Self::Metric => " m/s",
            Self::Imperial => " mph",
        }
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
