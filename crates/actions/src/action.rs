//! Action trait definition and types.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;

use crate::context::ActionContext;

/// Which path an action took. Exactly one applies per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A required parameter was absent; the reply asks for it.
    MissingParameter,
    /// The data provider could not be reached after retries.
    ServiceUnavailable,
    /// The provider answered but had nothing for this topic.
    NoData,
    /// The reply carries the requested information.
    Success,
    /// The subscriber store rejected a write.
    StorageFailed,
}

/// A side effect for the dialogue engine to apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event")]
pub enum Event {
    /// Set (or clear, with `null`) a slot.
    #[serde(rename = "slot")]
    SlotSet { name: String, value: Value },
}

impl Event {
    /// Clear a slot.
    pub fn reset_slot(name: impl Into<String>) -> Self {
        Event::SlotSet {
            name: name.into(),
            value: Value::Null,
        }
    }
}

/// Result of running an action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutput {
    /// Path taken.
    pub outcome: Outcome,
    /// Reply text for the user.
    pub text: String,
    /// Slot updates and other side effects.
    pub events: Vec<Event>,
}

impl ActionOutput {
    /// Create an output with no events.
    pub fn reply(outcome: Outcome, text: impl Into<String>) -> Self {
        Self {
            outcome,
            text: text.into(),
            events: Vec::new(),
        }
    }

    /// Attach events.
    pub fn with_events(mut self, events: Vec<Event>) -> Self {
        self.events = events;
        self
    }
}

/// A unit of conversational logic invoked by name.
///
/// Actions never fail: every error is turned into a localized reply with
/// the matching [`Outcome`].
#[async_trait]
pub trait Action: Send + Sync {
    /// The action's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Run the action against the current conversation state.
    async fn run(&self, ctx: &ActionContext) -> ActionOutput;
}
