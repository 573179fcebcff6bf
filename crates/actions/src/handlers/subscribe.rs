//! Subscription form submission.

use async_trait::async_trait;
use database::{subscriber, Database};
use tracing::{error, info};

use crate::action::{Action, ActionOutput, Event, Outcome};
use crate::context::ActionContext;
use crate::i18n::{render, MessageKey};

const PHONE_SLOT: &str = "phone_number";
const LOCATION_SLOT: &str = "location";

/// Stores the phone number and location collected by the subscription form.
///
/// On success the form slots are cleared so the form can run again.
pub struct SubscribeAlerts {
    db: Database,
}

impl SubscribeAlerts {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Action for SubscribeAlerts {
    fn name(&self) -> &str {
        "action_subscribe_alerts"
    }

    async fn run(&self, ctx: &ActionContext) -> ActionOutput {
        let language = ctx.language();
        let (Some(phone_number), Some(location)) =
            (ctx.param(PHONE_SLOT), ctx.param(LOCATION_SLOT))
        else {
            return ActionOutput::reply(
                Outcome::MissingParameter,
                render(language, MessageKey::SubscribeMissing, &[]),
            );
        };

        if let Err(err) = subscriber::upsert(self.db.pool(), &phone_number, &location).await {
            error!(
                sender = %ctx.sender_id,
                phone_number = %phone_number,
                location = %location,
                error = %err,
                "Failed to save subscription"
            );
            return ActionOutput::reply(
                Outcome::StorageFailed,
                render(language, MessageKey::SubscribeFailed, &[]),
            );
        }

        info!(phone_number = %phone_number, location = %location, "Subscribed");
        ActionOutput::reply(
            Outcome::Success,
            render(language, MessageKey::Subscribed, &[("location", location.as_str())]),
        )
        .with_events(vec![
            Event::reset_slot(PHONE_SLOT),
            Event::reset_slot(LOCATION_SLOT),
        ])
    }
}
