//! SMS gateway client library.
//!
//! This crate provides a Rust client for sending text messages through a
//! Twilio-compatible REST API (`POST /2010-04-01/Accounts/{sid}/Messages.json`).
//!
//! # Example
//!
//! ```no_run
//! use sms_gateway::{GatewayConfig, SmsClient};
//!
//! # async fn example() -> Result<(), sms_gateway::GatewayError> {
//! let config = GatewayConfig::new("ACXXXXXXXX", "auth-token", "+15005550006");
//! let client = SmsClient::new(config)?;
//!
//! let result = client.send_text("+919876543210", "Boil water before drinking.").await?;
//! println!("Queued as {}", result.sid);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::SmsClient;
pub use config::GatewayConfig;
pub use error::GatewayError;
pub use types::*;

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
