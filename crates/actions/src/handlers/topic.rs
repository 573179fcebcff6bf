//! Shared fetch-and-render path for the topic actions.

use fetcher::{FetchRequest, Fetcher};
use tracing::warn;

use crate::action::{ActionOutput, Outcome};
use crate::i18n::{render, Language, MessageKey};
use crate::provider::TopicPayload;

/// Fetch a topic payload and turn it into a reply.
///
/// `param` names the placeholder `value` fills in the success template.
pub(crate) async fn answer(
    fetcher: &Fetcher,
    request: &FetchRequest,
    language: Language,
    success: MessageKey,
    param: &str,
    value: &str,
) -> ActionOutput {
    let payload = match fetcher.fetch::<TopicPayload>(request).await {
        Ok(payload) => payload,
        Err(err) => {
            warn!(endpoint = %request.endpoint, error = %err, "Topic fetch failed");
            return ActionOutput::reply(
                Outcome::ServiceUnavailable,
                render(language, MessageKey::ServiceUnavailable, &[]),
            );
        }
    };

    match payload.summary_text() {
        Some(summary) => ActionOutput::reply(
            Outcome::Success,
            render(language, success, &[(param, value), ("summary", summary.as_str())]),
        ),
        None => ActionOutput::reply(
            Outcome::NoData,
            render(language, MessageKey::NoData, &[("topic", value)]),
        ),
    }
}
