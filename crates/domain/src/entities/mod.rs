//! Domain entities - Forecast records and the groupings built from them

mod current_conditions;
mod day_bucket;
mod hourly_forecast;
mod location;

pub use current_conditions::CurrentConditions;
pub use day_bucket::DayBucket;
pub use hourly_forecast::{HourlyForecast, capitalize_description};
pub use location::Location;
