//! Single-recipient delivery.

use async_trait::async_trait;
use sms_gateway::{GatewayConfig, SmsClient};
use tracing::{info, warn};

use crate::error::Result;

/// Outcome of sending one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// Accepted by the transport under this identifier.
    Sent { id: String },
    /// No transport configured; the message was only logged.
    DryRun,
    /// The transport rejected the message or could not be reached.
    Failed { reason: String },
}

impl Delivery {
    /// Whether this counts as a successful send.
    pub fn is_success(&self) -> bool {
        !matches!(self, Delivery::Failed { .. })
    }
}

/// Sends a text message to one address.
///
/// Implementations must not fail: transport problems are reported as
/// [`Delivery::Failed`] so that one bad address cannot abort a broadcast.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send `text` to `address`.
    async fn send(&self, address: &str, text: &str) -> Delivery;
}

/// SMS-backed notifier.
#[derive(Debug, Clone)]
pub struct SmsNotifier {
    client: Option<SmsClient>,
}

impl SmsNotifier {
    /// Deliver through the given client.
    pub fn new(client: SmsClient) -> Self {
        Self {
            client: Some(client),
        }
    }

    /// Log messages instead of sending them.
    pub fn dry_run() -> Self {
        Self { client: None }
    }

    /// Build from optional gateway credentials; `None` selects dry-run mode.
    pub fn from_config(config: Option<GatewayConfig>) -> Result<Self> {
        match config {
            Some(config) => Ok(Self::new(SmsClient::new(config)?)),
            None => {
                warn!("SMS credentials not configured, outbound messages will only be logged");
                Ok(Self::dry_run())
            }
        }
    }

    /// Whether messages are only logged.
    pub fn is_dry_run(&self) -> bool {
        self.client.is_none()
    }
}

#[async_trait]
impl Notifier for SmsNotifier {
    async fn send(&self, address: &str, text: &str) -> Delivery {
        let Some(client) = &self.client else {
            info!(recipient = %address, message = %text, "Dry run, not sending");
            return Delivery::DryRun;
        };

        match client.send_text(address, text).await {
            Ok(result) => {
                info!(recipient = %address, sid = %result.sid, "Message sent");
                Delivery::Sent { id: result.sid }
            }
            Err(err) => {
                warn!(recipient = %address, error = %err, "Message failed");
                Delivery::Failed {
                    reason: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dry_run_succeeds() {
        let notifier = SmsNotifier::from_config(None).unwrap();
        assert!(notifier.is_dry_run());

        let delivery = notifier.send("+15550001", "hello").await;
        assert_eq!(delivery, Delivery::DryRun);
        assert!(delivery.is_success());
    }

    #[tokio::test]
    async fn test_transport_error_becomes_failed() {
        let config = GatewayConfig::new("AC123", "secret", "+15005550006")
            .with_base_url("http://127.0.0.1:1");
        let notifier = SmsNotifier::from_config(Some(config)).unwrap();

        let delivery = notifier.send("+15550001", "hello").await;
        assert!(matches!(delivery, Delivery::Failed { .. }));
        assert!(!delivery.is_success());
    }

    #[test]
    fn test_bad_credentials_rejected_at_startup() {
        let config = GatewayConfig::new("", "", "+15005550006");
        assert!(SmsNotifier::from_config(Some(config)).is_err());
    }
}
