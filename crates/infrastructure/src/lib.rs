//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer and owns process-level
//! concerns: configuration loading and log subscriber setup.

pub mod adapters;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use config::{AppConfig, ForecastConfig, LogFormat, ServerConfig};
pub use telemetry::{TelemetryError, init_tracing};
