//! Application state shared across handlers.

use broadcaster::Broadcaster;
use database::Database;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Subscriber store.
    pub db: Database,
    /// Alert broadcaster.
    pub broadcaster: Broadcaster,
}

impl AppState {
    /// Create new application state.
    pub fn new(db: Database, broadcaster: Broadcaster) -> Self {
        Self { db, broadcaster }
    }
}
