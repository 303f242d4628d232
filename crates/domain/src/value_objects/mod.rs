//! Value Objects - Immutable, identity-less domain primitives

mod geo_location;
mod hour_minute;
mod metric;
mod reading;
mod reference_zone;
mod units;

pub use geo_location::GeoLocation;
pub use hour_minute::HourMinute;
pub use metric::Metric;
pub use reading::Reading;
pub use reference_zone::ReferenceZone;
pub use units::Units;
