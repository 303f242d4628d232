//! Location entity

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{errors::DomainError, value_objects::GeoLocation};

/// A named place returned by a geocode search
///
/// Carries the coordinates for follow-up queries and the labels shown to the
/// user. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lng: f64,
    /// Display name (e.g. "London")
    pub name: String,
    /// ISO country code (e.g. "GB")
    pub country: String,
}

impl Location {
    /// Create a new location
    pub fn new(lat: f64, lng: f64, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            lat,
            lng,
            name: name.into(),
            country: country.into(),
        }
    }

    /// Validated coordinates of this location
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidCoordinates` when lat/lng are out of range.
    pub fn geo_location(&self) -> Result<GeoLocation, DomainError> {
        GeoLocation::new(self.lat, self.lng)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.country.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}, {}", self.name, self.country)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_country() {
        let loc = Location::new(51.507_321_9, -0.127_647_4, "London", "GB");
        assert_eq!(loc.to_string(), "London, GB");
    }

    #[test]
    fn display_without_country() {
        let loc = Location::new(0.0, 0.0, "Null Island", "");
        assert_eq!(loc.to_string(), "Null Island");
    }

    #[test]
    fn geo_location_validates() {
        let loc = Location::new(51.5, -0.12, "London", "GB");
        let geo = loc.geo_location().expect("valid coordinates");
        assert!((geo.latitude() - 51.5).abs() < f64::EPSILON);

        let bad = Location::new(123.0, 0.0, "Nowhere", "XX");
        assert!(bad.geo_location().is_err());
    }
}
