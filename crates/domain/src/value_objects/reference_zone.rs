//! Reference time zone value object

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{errors::DomainError, value_objects::HourMinute};

/// The single time zone used to turn forecast instants into calendar days
/// and wall-clock labels
///
/// Aggregation and export must be given the same zone, otherwise day keys and
/// `HHMM` column labels disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReferenceZone(Tz);

impl ReferenceZone {
    /// Parse an IANA time zone name (e.g. `Europe/London`)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownTimeZone` if the name is not in the IANA database.
    pub fn new(name: &str) -> Result<Self, DomainError> {
        name.trim()
            .parse::<Tz>()
            .map(Self)
            .map_err(|_| DomainError::UnknownTimeZone(name.to_string()))
    }

    /// UTC
    #[must_use]
    pub const fn utc() -> Self {
        Self(Tz::UTC)
    }

    /// IANA name of the zone
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Convert an instant into wall-clock time in this zone
    #[must_use]
    pub fn localize(&self, instant: &DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.0)
    }

    /// Calendar date an instant falls on in this zone
    #[must_use]
    pub fn local_date(&self, instant: &DateTime<Utc>) -> NaiveDate {
        self.localize(instant).date_naive()
    }

    /// Wall-clock `HHMM` of an instant in this zone
    #[must_use]
    pub fn hour_minute(&self, instant: &DateTime<Utc>) -> HourMinute {
        HourMinute::of(&self.localize(instant))
    }

    /// First instant of the given calendar day in this zone
    ///
    /// Returns `None` only when local midnight does not exist (a DST gap at
    /// midnight) and no later time in the first hour does either.
    #[must_use]
    pub fn start_of_day(&self, date: NaiveDate) -> Option<DateTime<Utc>> {
        let midnight = date.and_time(NaiveTime::MIN);
        self.0
            .from_local_datetime(&midnight)
            .earliest()
            .or_else(|| {
                // Zones that jump over midnight start the day at 01:00
                let one_am = midnight + chrono::Duration::hours(1);
                self.0.from_local_datetime(&one_am).earliest()
            })
            .map(|start| start.with_timezone(&Utc))
    }
}

impl Default for ReferenceZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl fmt::Display for ReferenceZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReferenceZone {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ReferenceZone {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ReferenceZone> for String {
    fn from(zone: ReferenceZone) -> Self {
        zone.name().to_string()
    }
}

impl From<Tz> for ReferenceZone {
    fn from(tz: Tz) -> Self {
        Self(tz)
    }
}
