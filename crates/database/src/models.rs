//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A phone number registered to receive outbound alerts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Subscriber {
    /// Delivery address (e.g., "+919876543210"). Primary key.
    pub phone_number: String,
    /// Location given on the subscription form.
    pub location: String,
    /// Unix epoch seconds of the latest subscription.
    pub subscribed_at: i64,
}
