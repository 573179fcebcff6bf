//! Symptoms of a named disease.

use std::sync::Arc;

use async_trait::async_trait;
use fetcher::Fetcher;

use crate::action::{Action, ActionOutput, Outcome};
use crate::context::ActionContext;
use crate::handlers::topic;
use crate::i18n::{render, MessageKey};
use crate::provider::ProviderConfig;

/// Answers "what are the symptoms of X" from `/diseases/{x}/symptoms`.
///
/// # Entities
///
/// - `disease` (required)
pub struct Symptoms {
    fetcher: Fetcher,
    provider: Arc<ProviderConfig>,
}

impl Symptoms {
    pub fn new(fetcher: Fetcher, provider: Arc<ProviderConfig>) -> Self {
        Self { fetcher, provider }
    }
}

#[async_trait]
impl Action for Symptoms {
    fn name(&self) -> &str {
        "action_get_symptoms"
    }

    async fn run(&self, ctx: &ActionContext) -> ActionOutput {
        let language = ctx.language();
        let Some(disease) = ctx.param("disease") else {
            return ActionOutput::reply(
                Outcome::MissingParameter,
                render(language, MessageKey::SpecifyDisease, &[]),
            );
        };

        let path = format!("/diseases/{}/symptoms", urlencoding::encode(&disease));
        let request = self.provider.health_request(&path, language.code());

        topic::answer(
            &self.fetcher,
            &request,
            language,
            MessageKey::Symptoms,
            "disease",
            &disease,
        )
        .await
    }
}
