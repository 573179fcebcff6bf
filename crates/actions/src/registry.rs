//! Registry for dispatching actions by name.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::action::{Action, ActionOutput};
use crate::context::ActionContext;
use crate::error::ActionError;

/// Holds the registered actions and dispatches to them by name.
pub struct ActionRegistry {
    actions: HashMap<String, Arc<dyn Action>>,
}

impl ActionRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Register an action, replacing any with the same name.
    pub fn register<A: Action + 'static>(&mut self, action: A) {
        let name = action.name().to_string();
        info!("Registering action: {}", name);
        self.actions.insert(name, Arc::new(action));
    }

    /// Registered action names, sorted.
    pub fn list_actions(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.actions.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Check if an action is registered.
    pub fn has_action(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Run the named action.
    pub async fn run(&self, name: &str, ctx: &ActionContext) -> Result<ActionOutput, ActionError> {
        let action = self
            .actions
            .get(name)
            .ok_or_else(|| ActionError::NotFound(name.to_string()))?;

        debug!(action = name, sender = %ctx.sender_id, "Running action");
        let output = action.run(ctx).await;
        info!(action = name, outcome = ?output.outcome, "Action completed");

        Ok(output)
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Outcome;
    use async_trait::async_trait;

    struct EchoAction;

    #[async_trait]
    impl Action for EchoAction {
        fn name(&self) -> &str {
            "action_echo"
        }

        async fn run(&self, ctx: &ActionContext) -> ActionOutput {
            match ctx.latest_entity("text") {
                Some(text) => ActionOutput::reply(Outcome::Success, text),
                None => ActionOutput::reply(Outcome::MissingParameter, "say something"),
            }
        }
    }

    #[tokio::test]
    async fn test_registry_run() {
        let mut registry = ActionRegistry::new();
        registry.register(EchoAction);

        assert!(registry.has_action("action_echo"));
        assert_eq!(registry.list_actions(), vec!["action_echo"]);

        let ctx = ActionContext::new("u1").with_entity("text", "hello");
        let output = registry.run("action_echo", &ctx).await.unwrap();
        assert_eq!(output.outcome, Outcome::Success);
        assert_eq!(output.text, "hello");
    }

    #[tokio::test]
    async fn test_registry_not_found() {
        let registry = ActionRegistry::new();
        let result = registry.run("action_missing", &ActionContext::new("u1")).await;
        assert!(matches!(result, Err(ActionError::NotFound(_))));
    }
}
