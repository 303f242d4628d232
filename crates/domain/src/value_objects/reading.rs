//! Numeric readings as reported by the provider

use serde::{Deserialize, Serialize};
use std::fmt;

/// A reading that remembers whether it arrived as a whole number
///
/// Providers send `90` for some fields and `20.0` for others. Both compare
/// equal as values, but exports print them the way they were received.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawReading", into = "RawReading")]
pub struct Reading {
    value: f64,
    whole: bool,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum RawReading {
    Whole(i64),
    Decimal(f64),
}

impl From<RawReading> for Reading {
    fn from(raw: RawReading) -> Self {
        match raw {
            RawReading::Whole(value) => Self::whole(value),
            RawReading::Decimal(value) => Self::decimal(value),
        }
    }
}

impl From<Reading> for RawReading {
    #[allow(clippy::cast_possible_truncation)]
    fn from(reading: Reading) -> Self {
        if reading.whole {
            Self::Whole(reading.value as i64)
        } else {
            Self::Decimal(reading.value)
        }
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        Self::decimal(value)
    }
}

impl Reading {
    /// A reading sent as an integer
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn whole(value: i64) -> Self {
        Self {
            value: value as f64,
            whole: true,
        }
    }

    /// A reading sent as a decimal number
    #[must_use]
    pub const fn decimal(value: f64) -> Self {
        Self {
            value,
            whole: false,
        }
    }

    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Whether the provider sent an integer
    #[must_use]
    pub const fn is_whole(&self) -> bool {
        self.whole
    }
}

/// Integers print bare (`90`), integral decimals keep one place (`20.0`)
impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.whole {
            write!(f, "{:.0}", self.value)
        } else if self.value.is_finite() && self.value.fract() == 0.0 {
            write!(f, "{:.1}", self.value)
        } else {
            write!(f, "{}", self.value)
        }
    }
}
