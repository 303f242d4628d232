//! Time-of-day label

use chrono::Timelike;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 24-hour wall-clock time, rendered as four digits (`HHMM`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HourMinute {
    hour: u8,
    minute: u8,
}

impl HourMinute {
    /// Create a time of day, returning `None` when out of range
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Option<Self> {
        if hour < 24 && minute < 60 {
            Some(Self { hour, minute })
        } else {
            None
        }
    }

    /// Take the hour and minute of any chrono time value
    #[must_use]
    pub fn of<T: Timelike>(time: &T) -> Self {
        // chrono guarantees hour < 24 and minute < 60
        let hour = u8::try_from(time.hour()).unwrap_or_default();
        let minute = u8::try_from(time.minute()).unwrap_or_default();
        Self { hour, minute }
    }

    #[must_use]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[must_use]
    pub const fn minute(&self) -> u8 {
        self.minute
    }
}

impl fmt::Display for HourMinute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{:02}", self.hour, self.minute)
    }
}
