//! Broadcast error types.

use thiserror::Error;

/// Errors that abort a whole broadcast.
///
/// Per-recipient failures never appear here; they are counted in
/// [`BroadcastResult`](crate::BroadcastResult).
#[derive(Debug, Error)]
pub enum BroadcastError {
    /// The subscriber snapshot could not be read.
    #[error("Storage error: {0}")]
    Storage(#[from] database::DatabaseError),

    /// The SMS transport could not be configured.
    #[error("Gateway error: {0}")]
    Gateway(#[from] sms_gateway::GatewayError),
}

/// Result type for broadcast operations.
pub type Result<T> = std::result::Result<T, BroadcastError>;
