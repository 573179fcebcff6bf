//! Application state shared across handlers.

use std::sync::Arc;

use actions::ActionRegistry;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Registered actions.
    pub registry: Arc<ActionRegistry>,
}

impl AppState {
    /// Create new application state.
    pub fn new(registry: ActionRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
