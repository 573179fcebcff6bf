//! Vaccination centers open today in a district.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;
use fetcher::Fetcher;
use tracing::warn;

use crate::action::{Action, ActionOutput, Outcome};
use crate::context::ActionContext;
use crate::i18n::{render, MessageKey};
use crate::provider::{Center, CentersPayload, ProviderConfig};

/// Centers listed in a reply.
const MAX_CENTERS: usize = 5;

/// Lists today's sessions from the CoWIN public calendar.
///
/// # Entities / slots
///
/// - `district_id` (optional): falls back to the configured default district.
pub struct VaccinationCenters {
    fetcher: Fetcher,
    provider: Arc<ProviderConfig>,
}

impl VaccinationCenters {
    pub fn new(fetcher: Fetcher, provider: Arc<ProviderConfig>) -> Self {
        Self { fetcher, provider }
    }
}

#[async_trait]
impl Action for VaccinationCenters {
    fn name(&self) -> &str {
        "action_get_vaccination_centers"
    }

    async fn run(&self, ctx: &ActionContext) -> ActionOutput {
        let language = ctx.language();
        let district_id = ctx
            .param("district_id")
            .unwrap_or_else(|| self.provider.default_district_id.clone());
        let today = Local::now().format("%d-%m-%Y").to_string();

        let request = self
            .provider
            .request(&self.provider.centers_url, language.code())
            .param("district_id", &district_id)
            .param("date", today);

        let payload = match self.fetcher.fetch::<CentersPayload>(&request).await {
            Ok(payload) => payload,
            Err(err) => {
                warn!(district_id = %district_id, error = %err, "Vaccination center fetch failed");
                return ActionOutput::reply(
                    Outcome::ServiceUnavailable,
                    render(language, MessageKey::ServiceUnavailable, &[]),
                );
            }
        };

        let lines: Vec<String> = payload
            .centers
            .iter()
            .filter_map(Center::line)
            .take(MAX_CENTERS)
            .collect();

        if lines.is_empty() {
            return ActionOutput::reply(
                Outcome::NoData,
                render(language, MessageKey::NoCenters, &[]),
            );
        }

        let mut reply = render(language, MessageKey::CentersHeader, &[]);
        for line in lines {
            reply.push_str("\n- ");
            reply.push_str(&line);
        }

        ActionOutput::reply(Outcome::Success, reply)
    }
}
