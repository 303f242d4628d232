//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Unknown IANA time zone name
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    /// Timestamp outside the representable range
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}
