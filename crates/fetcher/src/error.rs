//! Error types for fetch operations.

use std::time::Duration;

use thiserror::Error;

/// Why a single attempt failed. Every variant is retried.
#[derive(Debug, Error)]
pub enum AttemptError {
    /// Connection, TLS, or per-attempt timeout failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The provider answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not valid JSON for the expected payload.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Terminal failure of a fetch, after retries.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Every attempt failed; carries the last attempt's error.
    #[error("{endpoint} failed after {attempts} attempt(s): {source}")]
    Exhausted {
        endpoint: String,
        attempts: u32,
        #[source]
        source: AttemptError,
    },

    /// The overall deadline elapsed before any attempt succeeded.
    #[error("{endpoint} did not complete within {deadline:?}")]
    DeadlineExceeded { endpoint: String, deadline: Duration },

    /// The HTTP client could not be built.
    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),
}
