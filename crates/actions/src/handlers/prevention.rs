//! Prevention tips for a named disease.

use std::sync::Arc;

use async_trait::async_trait;
use fetcher::Fetcher;

use crate::action::{Action, ActionOutput, Outcome};
use crate::context::ActionContext;
use crate::handlers::topic;
use crate::i18n::{render, MessageKey};
use crate::provider::ProviderConfig;

/// Answers "how do I prevent X" from `/prevention/{x}`.
pub struct PreventionTips {
    fetcher: Fetcher,
    provider: Arc<ProviderConfig>,
}

impl PreventionTips {
    pub fn new(fetcher: Fetcher, provider: Arc<ProviderConfig>) -> Self {
        Self { fetcher, provider }
    }
}

#[async_trait]
impl Action for PreventionTips {
    fn name(&self) -> &str {
        "action_get_prevention_tips"
    }

    async fn run(&self, ctx: &ActionContext) -> ActionOutput {
        let language = ctx.language();
        let Some(disease) = ctx.param("disease") else {
            return ActionOutput::reply(
                Outcome::MissingParameter,
                render(language, MessageKey::SpecifyDisease, &[]),
            );
        };

        let path = format!("/prevention/{}", urlencoding::encode(&disease));
        let request = self.provider.health_request(&path, language.code());

        topic::answer(
            &self.fetcher,
            &request,
            language,
            MessageKey::Prevention,
            "disease",
            &disease,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{fetcher, provider, StubTransport};

    #[tokio::test]
    async fn test_tips_list() {
        let transport = StubTransport::ok(r#"{"tips":["use mosquito nets","drain standing water"]}"#);
        let action = PreventionTips::new(fetcher(transport.clone()), provider());
        let ctx = ActionContext::new("u1")
            .with_entity("disease", "malaria")
            .with_slot("language", "pa");

        let output = action.run(&ctx).await;
        assert_eq!(output.outcome, Outcome::Success);
        assert!(output.text.contains("use mosquito nets, drain standing water"));

        let requests = transport.requests.lock().unwrap();
        assert_eq!(requests[0].0, "http://health.test/prevention/malaria");
        assert!(requests[0].1.contains(&("lang".to_string(), "pa".to_string())));
    }

    #[tokio::test]
    async fn test_missing_disease() {
        let transport = StubTransport::ok("{}");
        let action = PreventionTips::new(fetcher(transport.clone()), provider());

        let output = action.run(&ActionContext::new("u1")).await;
        assert_eq!(output.outcome, Outcome::MissingParameter);
        assert_eq!(transport.request_count(), 0);
    }
}
