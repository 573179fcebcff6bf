//! Error types for the admin web interface.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors that can occur in the admin web interface.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Invalid request input.
    #[error("{0}")]
    Validation(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] database::DatabaseError),

    /// Broadcast could not start.
    #[error("Broadcast error: {0}")]
    Broadcast(#[from] broadcaster::BroadcastError),
}

impl IntoResponse for AdminError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AdminError::Validation(msg) => (StatusCode::BAD_REQUEST, *msg),
            AdminError::Database(err) => {
                tracing::error!("Database error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch subscribers")
            }
            AdminError::Broadcast(err) => {
                tracing::error!("Broadcast error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "An internal error occurred.")
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, Json(body)).into_response()
    }
}

/// Result type for admin operations.
pub type Result<T> = std::result::Result<T, AdminError>;
