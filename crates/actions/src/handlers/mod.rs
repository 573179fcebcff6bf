//! Built-in actions.

mod outbreak_alerts;
mod prevention;
mod subscribe;
mod symptoms;
mod topic;
mod vaccination_centers;
mod vaccine_schedule;

pub use outbreak_alerts::OutbreakAlerts;
pub use prevention::PreventionTips;
pub use subscribe::SubscribeAlerts;
pub use symptoms::Symptoms;
pub use vaccination_centers::VaccinationCenters;
pub use vaccine_schedule::VaccineSchedule;

#[cfg(test)]
pub(crate) mod test_support {
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use async_trait::async_trait;
    use fetcher::{AttemptError, Fetcher, HttpTransport, RawResponse, Sleeper};

    use crate::provider::ProviderConfig;

    /// Answers every request from a script, repeating the last entry.
    pub struct StubTransport {
        responses: Mutex<VecDeque<(u16, String)>>,
        pub requests: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    impl StubTransport {
        pub fn new(responses: &[(u16, &str)]) -> Arc<Self> {
            Arc::new(Self {
                responses: Mutex::new(
                    responses
                        .iter()
                        .map(|(status, body)| (*status, body.to_string()))
                        .collect(),
                ),
                requests: Mutex::new(Vec::new()),
            })
        }

        pub fn ok(body: &str) -> Arc<Self> {
            Self::new(&[(200, body)])
        }

        pub fn request_count(&self) -> usize {
            self.requests.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl HttpTransport for StubTransport {
        async fn get(
            &self,
            url: &str,
            query: &[(String, String)],
            _timeout: Duration,
        ) -> Result<RawResponse, AttemptError> {
            self.requests
                .lock()
                .unwrap()
                .push((url.to_string(), query.to_vec()));
            let mut responses = self.responses.lock().unwrap();
            let (status, body) = if responses.len() > 1 {
                responses.pop_front().unwrap()
            } else {
                responses.front().cloned().unwrap_or((503, String::new()))
            };
            Ok(RawResponse { status, body })
        }
    }

    struct NoSleep;

    #[async_trait]
    impl Sleeper for NoSleep {
        async fn sleep(&self, _duration: Duration) {}
    }

    pub fn fetcher(transport: Arc<StubTransport>) -> Fetcher {
        Fetcher::new(transport).with_sleeper(Arc::new(NoSleep))
    }

    pub fn provider() -> Arc<ProviderConfig> {
        Arc::new(ProviderConfig {
            health_api_url: "http://health.test".to_string(),
            centers_url: "http://cowin.test/calendarByDistrict".to_string(),
            indicators_url: "http://gho.test/Indicator".to_string(),
            max_retries: 1,
            ..Default::default()
        })
    }
}
