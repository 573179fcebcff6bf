//! Retrying fetch of typed JSON payloads.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::error::{AttemptError, FetchError};
use crate::retry::{linear_backoff, RetryState, Sleeper, TokioSleeper};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Query parameter carrying the reply language.
pub const LANGUAGE_PARAM: &str = "lang";

/// A single GET against a data provider endpoint.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Full endpoint URL.
    pub endpoint: String,
    /// Extra query parameters.
    pub params: BTreeMap<String, String>,
    /// Language tag, sent as [`LANGUAGE_PARAM`].
    pub language: String,
    /// Timeout for each attempt.
    pub timeout: Duration,
    /// Retries after the first attempt.
    pub max_retries: u32,
}

impl FetchRequest {
    /// Default per-attempt timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);
    /// Default number of retries.
    pub const DEFAULT_MAX_RETRIES: u32 = 2;

    /// Create a request with default timeout and retries.
    pub fn new(endpoint: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            params: BTreeMap::new(),
            language: language.into(),
            timeout: Self::DEFAULT_TIMEOUT,
            max_retries: Self::DEFAULT_MAX_RETRIES,
        }
    }

    /// Add a query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Set the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the number of retries after the first attempt.
    pub fn max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Total attempts this request may make.
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Query pairs with the language tag merged in.
    ///
    /// The language always wins over a caller-supplied `lang` parameter.
    pub fn query(&self) -> Vec<(String, String)> {
        let mut params = self.params.clone();
        params.insert(LANGUAGE_PARAM.to_string(), self.language.clone());
        params.into_iter().collect()
    }
}

/// Fetches JSON payloads with bounded retries and linear backoff.
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn HttpTransport>,
    sleeper: Arc<dyn Sleeper>,
    backoff_base: Duration,
    deadline: Option<Duration>,
}

impl Fetcher {
    /// Default backoff base; attempt `n` waits `n` times this.
    pub const DEFAULT_BACKOFF_BASE: Duration = Duration::from_millis(500);
    /// Default deadline across all attempts.
    pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(15);

    /// Create a fetcher over the given transport.
    pub fn new(transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            sleeper: Arc::new(TokioSleeper),
            backoff_base: Self::DEFAULT_BACKOFF_BASE,
            deadline: Some(Self::DEFAULT_DEADLINE),
        }
    }

    /// Create a fetcher backed by reqwest.
    pub fn http() -> Result<Self, FetchError> {
        Ok(Self::new(Arc::new(ReqwestTransport::new()?)))
    }

    /// Replace the sleeper used between attempts.
    pub fn with_sleeper(mut self, sleeper: Arc<dyn Sleeper>) -> Self {
        self.sleeper = sleeper;
        self
    }

    /// Set the backoff base.
    pub fn with_backoff_base(mut self, backoff_base: Duration) -> Self {
        self.backoff_base = backoff_base;
        self
    }

    /// Set or clear the deadline across all attempts.
    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    /// Fetch and decode a payload.
    ///
    /// An empty body decodes to `T::default()`. Any non-2xx status,
    /// transport error, or undecodable body fails the attempt.
    pub async fn fetch<T>(&self, request: &FetchRequest) -> Result<T, FetchError>
    where
        T: DeserializeOwned + Default + Send,
    {
        match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, self.run(request))
                .await
                .map_err(|_| {
                    warn!(endpoint = %request.endpoint, ?deadline, "Fetch deadline exceeded");
                    FetchError::DeadlineExceeded {
                        endpoint: request.endpoint.clone(),
                        deadline,
                    }
                })?,
            None => self.run(request).await,
        }
    }

    async fn run<T>(&self, request: &FetchRequest) -> Result<T, FetchError>
    where
        T: DeserializeOwned + Default + Send,
    {
        let query = request.query();
        let max_attempts = request.max_attempts();
        let mut state = RetryState::Attempting(1);

        loop {
            state = match state {
                RetryState::Attempting(attempt) => {
                    debug!(endpoint = %request.endpoint, attempt, max_attempts, "Fetching");
                    let outcome = self.attempt(request, &query).await;
                    if let Err(ref e) = outcome {
                        warn!(endpoint = %request.endpoint, attempt, error = %e, "Fetch attempt failed");
                    }
                    RetryState::after_attempt(attempt, max_attempts, outcome)
                }
                RetryState::Backoff(attempt) => {
                    let delay = linear_backoff(self.backoff_base, attempt);
                    debug!(endpoint = %request.endpoint, attempt, ?delay, "Backing off");
                    self.sleeper.sleep(delay).await;
                    RetryState::Attempting(attempt + 1)
                }
                RetryState::Succeeded(payload) => return Ok(payload),
                RetryState::Exhausted { attempts, last } => {
                    info!(endpoint = %request.endpoint, attempts, "Fetch retries exhausted");
                    return Err(FetchError::Exhausted {
                        endpoint: request.endpoint.clone(),
                        attempts,
                        source: last,
                    });
                }
            };
        }
    }

    async fn attempt<T>(
        &self,
        request: &FetchRequest,
        query: &[(String, String)],
    ) -> Result<T, AttemptError>
    where
        T: DeserializeOwned + Default,
    {
        let response = self
            .transport
            .get(&request.endpoint, query, request.timeout)
            .await?;

        if !response.is_success() {
            return Err(AttemptError::Status {
                status: response.status,
                body: truncate(&response.body, 200),
            });
        }

        decode(&response.body)
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("backoff_base", &self.backoff_base)
            .field("deadline", &self.deadline)
            .finish_non_exhaustive()
    }
}

fn decode<T: DeserializeOwned + Default>(body: &str) -> Result<T, AttemptError> {
    let body = body.trim();
    if body.is_empty() || body == "null" {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(body)?)
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
