//! Outbreak indicators from the WHO Global Health Observatory.

use std::sync::Arc;

use async_trait::async_trait;
use fetcher::Fetcher;
use tracing::warn;

use crate::action::{Action, ActionOutput, Outcome};
use crate::context::ActionContext;
use crate::i18n::{render, MessageKey};
use crate::provider::{IndicatorsPayload, ProviderConfig};

const MAX_INDICATORS: usize = 5;

/// Lists WHO indicators whose name mentions an outbreak.
pub struct OutbreakAlerts {
    fetcher: Fetcher,
    provider: Arc<ProviderConfig>,
}

impl OutbreakAlerts {
    pub fn new(fetcher: Fetcher, provider: Arc<ProviderConfig>) -> Self {
        Self { fetcher, provider }
    }
}

#[async_trait]
impl Action for OutbreakAlerts {
    fn name(&self) -> &str {
        "action_get_outbreak_alerts"
    }

    async fn run(&self, ctx: &ActionContext) -> ActionOutput {
        let language = ctx.language();
        let request = self
            .provider
            .request(&self.provider.indicators_url, language.code());

        let payload = match self.fetcher.fetch::<IndicatorsPayload>(&request).await {
            Ok(payload) => payload,
            Err(err) => {
                warn!(error = %err, "WHO indicator fetch failed");
                return ActionOutput::reply(
                    Outcome::ServiceUnavailable,
                    render(language, MessageKey::ServiceUnavailable, &[]),
                );
            }
        };

        let outbreaks: Vec<&str> = payload
            .value
            .iter()
            .filter_map(|i| i.indicator_name.as_deref())
            .filter(|name| name.to_lowercase().contains("outbreak"))
            .take(MAX_INDICATORS)
            .collect();

        if outbreaks.is_empty() {
            return ActionOutput::reply(
                Outcome::NoData,
                render(language, MessageKey::NoOutbreaks, &[]),
            );
        }

        let mut reply = render(language, MessageKey::OutbreakHeader, &[]);
        for name in outbreaks {
            reply.push_str("\n- ");
            reply.push_str(name);
        }

        ActionOutput::reply(Outcome::Success, reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{fetcher, provider, StubTransport};

    #[tokio::test]
    async fn test_filters_outbreak_indicators() {
        let transport = StubTransport::ok(
            r#"{"value":[
                {"IndicatorCode":"A","IndicatorName":"Cholera OUTBREAK reports"},
                {"IndicatorCode":"B","IndicatorName":"Life expectancy at birth"},
                {"IndicatorCode":"C","IndicatorName":"Meningitis outbreak response"}
            ]}"#,
        );
        let action = OutbreakAlerts::new(fetcher(transport), provider());

        let output = action.run(&ActionContext::new("u1")).await;
        assert_eq!(output.outcome, Outcome::Success);
        assert_eq!(
            output.text,
            "Latest WHO outbreak indicators:\n- Cholera OUTBREAK reports\n- Meningitis outbreak response"
        );
    }

    #[tokio::test]
    async fn test_unnamed_indicators_ignored() {
        let transport = StubTransport::ok(
            r#"{"value":[{"IndicatorCode":"A"},{"IndicatorName":"Ebola outbreak cases"}]}"#,
        );
        let action = OutbreakAlerts::new(fetcher(transport.clone()), provider());

        let output = action.run(&ActionContext::new("u1")).await;
        assert_eq!(output.outcome, Outcome::Success);
        assert!(output.text.ends_with("\n- Ebola outbreak cases"));
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_no_matching_indicators() {
        let transport =
            StubTransport::ok(r#"{"value":[{"IndicatorName":"Life expectancy at birth"}]}"#);
        let action = OutbreakAlerts::new(fetcher(transport), provider());

        let output = action.run(&ActionContext::new("u1")).await;
        assert_eq!(output.outcome, Outcome::NoData);
    }
}
