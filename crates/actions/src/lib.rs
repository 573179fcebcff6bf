//! Conversational actions for the health alert bot.
//!
//! The dialogue engine picks an action by name and hands it the
//! conversation state as an [`ActionContext`]. Each action returns an
//! [`ActionOutput`]: a localized reply, the [`Outcome`] it reached, and any
//! slot events. Actions never return errors; data provider and storage
//! failures become fallback replies.
//!
//! # Built-in Actions
//!
//! - [`Symptoms`] - `action_get_symptoms`, symptoms of a disease.
//! - [`VaccineSchedule`] - `action_get_vaccine_schedule`, vaccines due for an age group.
//! - [`PreventionTips`] - `action_get_prevention_tips`, how to prevent a disease.
//! - [`VaccinationCenters`] - `action_get_vaccination_centers`, today's CoWIN sessions.
//! - [`OutbreakAlerts`] - `action_get_outbreak_alerts`, WHO outbreak indicators.
//! - [`SubscribeAlerts`] - `action_subscribe_alerts`, stores a subscription form.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actions::{default_registry, ActionContext, ProviderConfig};
//!
//! let registry = default_registry(Fetcher::http()?, Arc::new(ProviderConfig::default()), db);
//! let ctx = ActionContext::new("user-1").with_entity("disease", "dengue");
//! let output = registry.run("action_get_symptoms", &ctx).await?;
//! println!("{}", output.text);
//! ```

mod action;
mod context;
mod error;
mod handlers;
pub mod i18n;
mod provider;
mod registry;

pub use action::{Action, ActionOutput, Event, Outcome};
pub use context::{ActionContext, Entity};
pub use error::ActionError;
pub use handlers::{
    OutbreakAlerts, PreventionTips, SubscribeAlerts, Symptoms, VaccinationCenters,
    VaccineSchedule,
};
pub use i18n::Language;
pub use provider::{ProviderConfig, TopicPayload};
pub use registry::ActionRegistry;

// Re-export async_trait for convenience
pub use async_trait::async_trait;

use std::sync::Arc;

use database::Database;
use fetcher::Fetcher;

/// Create a registry with every built-in action registered.
pub fn default_registry(
    fetcher: Fetcher,
    provider: Arc<ProviderConfig>,
    db: Database,
) -> ActionRegistry {
    let mut registry = ActionRegistry::new();

    // Health information
    registry.register(Symptoms::new(fetcher.clone(), provider.clone()));
    registry.register(VaccineSchedule::new(fetcher.clone(), provider.clone()));
    registry.register(PreventionTips::new(fetcher.clone(), provider.clone()));
    registry.register(VaccinationCenters::new(fetcher.clone(), provider.clone()));
    registry.register(OutbreakAlerts::new(fetcher, provider));

    // Subscriptions
    registry.register(SubscribeAlerts::new(db));

    registry
}
