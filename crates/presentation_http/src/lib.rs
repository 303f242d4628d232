//! skycast HTTP presentation layer
//!
//! This crate provides the HTTP API: location search, a per-location
//! overview of current conditions and daily forecast, and CSV export.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
