//! SQLite subscriber store for the health alert bot.
//!
//! This crate owns the `subscribers` table: phone numbers registered to
//! receive outbound alerts, keyed by delivery address.
//!
//! # Example
//!
//! ```no_run
//! use database::{subscriber, Database};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:alerts.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Register a number
//!     subscriber::upsert(db.pool(), "+919876543210", "Ludhiana").await?;
//!
//!     for s in subscriber::list_all(db.pool()).await? {
//!         println!("{} ({})", s.phone_number, s.location);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod models;
pub mod subscriber;

pub use error::{DatabaseError, Result};
pub use models::Subscriber;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
///
/// Cloning is cheap; every clone shares the same pool, so one handle
/// constructed at startup is passed to every component that needs it.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `sqlite::memory:` for tests.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
