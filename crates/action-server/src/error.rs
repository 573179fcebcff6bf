//! Error types for the action server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

/// Errors returned by the webhook.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The requested action is not registered.
    #[error("No registered action found for name '{0}'.")]
    ActionNotFound(String),
}

impl From<actions::ActionError> for ServerError {
    fn from(err: actions::ActionError) -> Self {
        match err {
            actions::ActionError::NotFound(name) => ServerError::ActionNotFound(name),
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        match &self {
            ServerError::ActionNotFound(name) => {
                tracing::warn!(action = %name, "Unknown action requested");
                let body = serde_json::json!({
                    "error": self.to_string(),
                    "action_name": name,
                });
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }
        }
    }
}

/// Result type for webhook handlers.
pub type Result<T> = std::result::Result<T, ServerError>;
