//! Error types for action dispatch.

use thiserror::Error;

/// Errors that can occur when dispatching an action.
#[derive(Debug, Error)]
pub enum ActionError {
    /// No action registered under this name.
    #[error("Action not found: {0}")]
    NotFound(String),
}
