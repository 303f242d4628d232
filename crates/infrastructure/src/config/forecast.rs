//! Forecast grouping configuration.

use domain::ReferenceZone;
use serde::{Deserialize, Serialize};

/// Forecast grouping settings
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// IANA zone used for calendar days and export column times (default: UTC)
    #[serde(default)]
    pub timezone: ReferenceZone,
}
