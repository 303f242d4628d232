//! Application state shared across handlers

use std::sync::Arc;

use application::WeatherService;
use infrastructure::AppConfig;

/// Shared application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Weather lookups, grouping and export
    pub weather_service: Arc<WeatherService>,
    /// Application configuration
    pub config: Arc<AppConfig>,
}
