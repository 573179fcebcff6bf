//! Vaccine schedule for an age group.

use std::sync::Arc;

use async_trait::async_trait;
use fetcher::Fetcher;

use crate::action::{Action, ActionOutput, Outcome};
use crate::context::ActionContext;
use crate::handlers::topic;
use crate::i18n::{render, MessageKey};
use crate::provider::ProviderConfig;

/// Answers "which vaccines are due for X" from `/vaccines/schedule`.
///
/// The age group is sent as the `age_group` query parameter.
pub struct VaccineSchedule {
    fetcher: Fetcher,
    provider: Arc<ProviderConfig>,
}

impl VaccineSchedule {
    pub fn new(fetcher: Fetcher, provider: Arc<ProviderConfig>) -> Self {
        Self { fetcher, provider }
    }
}

#[async_trait]
impl Action for VaccineSchedule {
    fn name(&self) -> &str {
        "action_get_vaccine_schedule"
    }

    async fn run(&self, ctx: &ActionContext) -> ActionOutput {
        let language = ctx.language();
        let Some(age_group) = ctx.param("age_group") else {
            return ActionOutput::reply(
                Outcome::MissingParameter,
                render(language, MessageKey::SpecifyAgeGroup, &[]),
            );
        };

        let request = self
            .provider
            .health_request("/vaccines/schedule", language.code())
            .param("age_group", age_group.as_str());

        topic::answer(
            &self.fetcher,
            &request,
            language,
            MessageKey::VaccineSchedule,
            "age_group",
            &age_group,
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{fetcher, provider, StubTransport};

    #[tokio::test]
    async fn test_schedule_success_after_retry() {
        let transport = StubTransport::new(&[
            (502, "bad gateway"),
            (200, r#"{"schedule":[{"vaccine":"BCG","due":"at birth"}]}"#),
        ]);
        let action = VaccineSchedule::new(fetcher(transport.clone()), provider());
        let ctx = ActionContext::new("u1").with_entity("age_group", "infant");

        let output = action.run(&ctx).await;
        assert_eq!(output.outcome, Outcome::Success);
        assert_eq!(output.text, "Vaccine schedule for infant: BCG (at birth)");
        assert_eq!(transport.request_count(), 2);

        let requests = transport.requests.lock().unwrap();
        assert!(requests[1].1.contains(&("age_group".to_string(), "infant".to_string())));
    }

    #[tokio::test]
    async fn test_incomplete_schedule_rows_are_no_data() {
        let transport = StubTransport::ok(r#"{"schedule":[{"due":"at birth"}]}"#);
        let action = VaccineSchedule::new(fetcher(transport.clone()), provider());
        let ctx = ActionContext::new("u1").with_entity("age_group", "infant");

        let output = action.run(&ctx).await;
        assert_eq!(output.outcome, Outcome::NoData);
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_age_group() {
        let transport = StubTransport::ok("{}");
        let action = VaccineSchedule::new(fetcher(transport.clone()), provider());

        let output = action.run(&ActionContext::new("u1")).await;
        assert_eq!(output.outcome, Outcome::MissingParameter);
        assert_eq!(transport.request_count(), 0);
    }
}
