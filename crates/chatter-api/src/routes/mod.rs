//! Route definitions

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{health, spam_checks};
use crate::state::AppState;

/// Create the main API router (health routes are mounted separately)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Liveness and readiness probes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/spam-checks",
            post(spam_checks::enqueue_spam_check).get(spam_checks::list_spam_checks),
        )
        .route("/spam-checks/:check_id", get(spam_checks::get_spam_check))
}
