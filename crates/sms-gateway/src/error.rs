//! Error types for sms-gateway.

use thiserror::Error;

/// Errors that can occur when talking to the SMS API.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error response returned by the provider.
    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    /// Non-success status without a parseable error body.
    #[error("Request failed: {0}")]
    Request(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}
