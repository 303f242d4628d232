//! Route definitions

use axum::{Router, routing::get};

use crate::{handlers, state::AppState};

/// Create the main router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoint
        .route("/health", get(handlers::health::health_check))
        // Locations API (v1)
        .route("/v1/locations", get(handlers::locations::search))
        .route("/v1/locations/{country}", get(handlers::locations::show))
        .route(
            "/v1/locations/{country}/export",
            get(handlers::locations::export),
        )
        // Attach state
        .with_state(state)
}
