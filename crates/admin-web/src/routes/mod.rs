//! Route handlers for the dashboard API.

pub mod alert;
pub mod health;
pub mod subscribers;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all API routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // API endpoints
        .route("/api/subscribers", get(subscribers::list_api))
        .route("/api/alert", post(alert::send_api))
}
