//! Broadcast to every subscriber.

use std::sync::Arc;

use database::{subscriber, Database};
use futures::future;
use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{info, warn};

use crate::error::Result;
use crate::notifier::{Delivery, Notifier};

/// Tally of one broadcast.
///
/// `sent + failed` always equals the number of subscribers in the snapshot
/// taken when the broadcast started.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BroadcastResult {
    pub sent: usize,
    pub failed: usize,
    /// One `"<address>: <reason>"` entry per failed delivery.
    pub errors: Vec<String>,
}

impl BroadcastResult {
    /// Number of recipients attempted.
    pub fn total(&self) -> usize {
        self.sent + self.failed
    }

    fn record(mut self, address: String, delivery: Delivery) -> Self {
        match delivery {
            Delivery::Failed { reason } => {
                self.failed += 1;
                self.errors.push(format!("{}: {}", address, reason));
            }
            Delivery::Sent { .. } | Delivery::DryRun => self.sent += 1,
        }
        self
    }
}

/// Sends one message to all subscribers.
#[derive(Clone)]
pub struct Broadcaster {
    db: Database,
    notifier: Arc<dyn Notifier>,
    concurrency: usize,
}

impl Broadcaster {
    /// Default number of sends in flight at once.
    pub const DEFAULT_CONCURRENCY: usize = 8;

    /// Create a broadcaster over the subscriber store and a notifier.
    pub fn new(db: Database, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            db,
            notifier,
            concurrency: Self::DEFAULT_CONCURRENCY,
        }
    }

    /// Limit the number of concurrent sends (minimum 1).
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Send `message` to every current subscriber.
    ///
    /// The subscriber list is read once up front; subscribers added while
    /// the broadcast runs are not included. Only a failure to read that list
    /// is returned as an error.
    pub async fn broadcast(&self, message: &str) -> Result<BroadcastResult> {
        let subscribers = subscriber::list_all(self.db.pool()).await?;
        let recipient_count = subscribers.len();

        info!(recipient_count, concurrency = self.concurrency, "Sending broadcast");

        let result = stream::iter(subscribers)
            .map(|s| {
                let notifier = Arc::clone(&self.notifier);
                async move {
                    let delivery = notifier.send(&s.phone_number, message).await;
                    if let Delivery::Failed { ref reason } = delivery {
                        warn!(recipient = %s.phone_number, error = %reason, "Broadcast failed");
                    }
                    (s.phone_number, delivery)
                }
            })
            .buffer_unordered(self.concurrency)
            .fold(BroadcastResult::default(), |acc, (address, delivery)| {
                future::ready(acc.record(address, delivery))
            })
            .await;

        info!(sent = result.sent, failed = result.failed, "Broadcast complete");
        debug_assert_eq!(result.total(), recipient_count);

        Ok(result)
    }
}
