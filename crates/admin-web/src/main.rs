//! Dashboard API for the health alert bot.
//!
//! Lists subscribers, sends alerts to all of them, and serves the static
//! dashboard files.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use broadcaster::{Broadcaster, SmsNotifier};
use database::Database;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
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
    info!(addr = %config.addr, "Starting admin web server");

    // Connect to database
    let db = Database::connect(&config.database_url).await?;
    db.migrate().await?;

    // Outbound delivery
    let notifier = SmsNotifier::from_config(config.sms.clone())?;
    let broadcaster = Broadcaster::new(db.clone(), Arc::new(notifier))
        .with_concurrency(config.broadcast_concurrency);

    // Build application state
    let state = AppState::new(db, broadcaster);

    // Build router
    let app = routes::router()
        .fallback_service(ServeDir::new(&config.dashboard_dir))
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    info!(addr = %config.addr, dashboard = %config.dashboard_dir.display(), "Admin web server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
