pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;
use crate::wall::handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Reference data
        .route("/api/v1/cabinets", get(handlers::handle_list_cabinets))
        .route("/api/v1/units", get(handlers::handle_list_units))
        .route(
            "/api/v1/aspect-ratios",
            get(handlers::handle_list_aspect_ratios),
        )
        // Sizing
        .route(
            "/api/v1/configurations",
            post(handlers::handle_search_configurations),
        )
        .route(
            "/api/v1/configurations/adjust",
            post(handlers::handle_adjust_configuration),
        )
        .route("/api/v1/implied", post(handlers::handle_implied_values))
        .with_state(state)
}
