//! Conversation state handed to an action.

use std::collections::HashMap;

use serde_json::Value;

use crate::i18n::Language;

/// An entity extracted from the latest user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Entity type (e.g., "disease").
    pub entity: String,
    /// Extracted value (e.g., "dengue").
    pub value: String,
}

/// What the dialogue engine knows when it invokes an action.
#[derive(Debug, Clone, Default)]
pub struct ActionContext {
    /// Conversation identifier.
    pub sender_id: String,
    /// Entities from the latest message, in extraction order.
    pub entities: Vec<Entity>,
    /// Slot values persisted across turns.
    pub slots: HashMap<String, Value>,
}

impl ActionContext {
    /// Create an empty context for a conversation.
    pub fn new(sender_id: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            ..Default::default()
        }
    }

    /// Add an entity.
    pub fn with_entity(mut self, entity: impl Into<String>, value: impl Into<String>) -> Self {
        self.entities.push(Entity {
            entity: entity.into(),
            value: value.into(),
        });
        self
    }

    /// Set a slot.
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.slots.insert(name.into(), value.into());
        self
    }

    /// First non-blank value of the named entity in the latest message.
    pub fn latest_entity(&self, name: &str) -> Option<&str> {
        self.entities
            .iter()
            .filter(|e| e.entity == name)
            .map(|e| e.value.trim())
            .find(|v| !v.is_empty())
    }

    /// A slot as text. Strings and numbers are accepted; blanks are `None`.
    pub fn slot_str(&self, name: &str) -> Option<String> {
        match self.slots.get(name)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// The entity if present in this turn, otherwise the slot of the same name.
    pub fn param(&self, name: &str) -> Option<String> {
        self.latest_entity(name)
            .map(str::to_string)
            .or_else(|| self.slot_str(name))
    }

    /// Reply language from the `language` slot.
    pub fn language(&self) -> Language {
        self.slot_str("language")
            .map(|code| Language::from_code(&code))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_entity_takes_first_match() {
        let ctx = ActionContext::new("u1")
            .with_entity("location", "Ludhiana")
            .with_entity("disease", "dengue")
            .with_entity("disease", "malaria");
        assert_eq!(ctx.latest_entity("disease"), Some("dengue"));
        assert_eq!(ctx.latest_entity("age_group"), None);
    }

    #[test]
    fn test_blank_entity_ignored() {
        let ctx = ActionContext::new("u1").with_entity("disease", "  ");
        assert_eq!(ctx.latest_entity("disease"), None);
    }

    #[test]
    fn test_param_falls_back_to_slot() {
        let ctx = ActionContext::new("u1").with_slot("district_id", 145);
        assert_eq!(ctx.param("district_id").as_deref(), Some("145"));

        let ctx = ctx.with_entity("district_id", "146");
        assert_eq!(ctx.param("district_id").as_deref(), Some("146"));
    }

    #[test]
    fn test_language_defaults_to_english() {
        assert_eq!(ActionContext::new("u1").language(), Language::English);
        let ctx = ActionContext::new("u1").with_slot("language", "pa");
        assert_eq!(ctx.language(), Language::Punjabi);
        let ctx = ActionContext::new("u1").with_slot("language", Value::Null);
        assert_eq!(ctx.language(), Language::English);
    }
}
