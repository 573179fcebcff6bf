//! Outbound alert delivery for the health alert bot.
//!
//! - [`Notifier`] sends one message to one address and reports a [`Delivery`]
//!   outcome instead of failing. [`SmsNotifier`] is the SMS-backed
//!   implementation; without credentials it runs in dry-run mode.
//! - [`Broadcaster`] snapshots every subscriber and sends the same text to
//!   each of them, tallying sent and failed deliveries.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use broadcaster::{Broadcaster, SmsNotifier};
//! use database::Database;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let db = Database::connect("sqlite:alerts.db?mode=rwc").await?;
//! let broadcaster = Broadcaster::new(db, Arc::new(SmsNotifier::dry_run()));
//!
//! let result = broadcaster.broadcast("Boil water before drinking.").await?;
//! println!("sent={} failed={}", result.sent, result.failed);
//! # Ok(())
//! # }
//! ```

pub mod coordinator;
pub mod error;
pub mod notifier;

pub use coordinator::{BroadcastResult, Broadcaster};
pub use error::{BroadcastError, Result};
pub use notifier::{Delivery, Notifier, SmsNotifier};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
