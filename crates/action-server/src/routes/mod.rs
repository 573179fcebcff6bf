//! Route handlers for the action server.

pub mod health;
pub mod webhook;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/actions", get(webhook::list_actions))
        .route("/webhook", post(webhook::run_action))
}
