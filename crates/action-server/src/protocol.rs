//! Wire types for the dialogue engine's action webhook.

use std::collections::HashMap;

use actions::{ActionContext, ActionOutput, Event};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /webhook`.
#[derive(Debug, Deserialize)]
pub struct ActionCall {
    /// Name of the action to run.
    pub next_action: String,
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub tracker: Tracker,
}

/// Conversation state sent along with the call.
#[derive(Debug, Default, Deserialize)]
pub struct Tracker {
    #[serde(default)]
    pub sender_id: Option<String>,
    #[serde(default)]
    pub slots: HashMap<String, Value>,
    #[serde(default)]
    pub latest_message: LatestMessage,
}

/// The latest user message.
#[derive(Debug, Default, Deserialize)]
pub struct LatestMessage {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub entities: Vec<RawEntity>,
}

/// An entity as extracted by the NLU engine.
#[derive(Debug, Deserialize)]
pub struct RawEntity {
    pub entity: String,
    #[serde(default)]
    pub value: Value,
}

impl ActionCall {
    /// Conversation state in the form the actions expect.
    ///
    /// Entities whose value is not a string or number are dropped.
    pub fn context(&self) -> ActionContext {
        let sender_id = self
            .sender_id
            .clone()
            .or_else(|| self.tracker.sender_id.clone())
            .unwrap_or_default();

        let ctx = self
            .tracker
            .latest_message
            .entities
            .iter()
            .filter_map(|e| {
                let value = match &e.value {
                    Value::String(s) => s.clone(),
                    Value::Number(n) => n.to_string(),
                    _ => return None,
                };
                Some((e.entity.as_str(), value))
            })
            .fold(ActionContext::new(sender_id), |ctx, (entity, value)| {
                ctx.with_entity(entity, value)
            });

        self.tracker
            .slots
            .iter()
            .fold(ctx, |ctx, (name, value)| ctx.with_slot(name.as_str(), value.clone()))
    }
}

/// Body of a successful webhook response.
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    pub events: Vec<Event>,
    pub responses: Vec<BotResponse>,
}

/// A message for the dialogue engine to deliver.
#[derive(Debug, Serialize)]
pub struct BotResponse {
    pub text: String,
}

impl From<ActionOutput> for ActionResponse {
    fn from(output: ActionOutput) -> Self {
        Self {
            events: output.events,
            responses: vec![BotResponse { text: output.text }],
        }
    }
}
