//! Webhook server running conversational actions for the dialogue engine.
//!
//! The dialogue engine posts the selected action name and conversation state
//! to `/webhook` and receives reply texts and slot events back.

mod config;
mod error;
mod protocol;
mod routes;
mod state;

use std::sync::Arc;

use actions::default_registry;
use database::Database;
use fetcher::Fetcher;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    info!(
        addr = %config.addr,
        health_api = %config.provider.health_api_url,
        "Starting action server"
    );

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Data provider client
    let fetcher = Fetcher::http()?
        .with_backoff_base(config.backoff_base)
        .with_deadline(config.fetch_deadline);

    let registry = default_registry(fetcher, Arc::new(config.provider.clone()), db);
    let state = AppState::new(registry);

    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "Action server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
