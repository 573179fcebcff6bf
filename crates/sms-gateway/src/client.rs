//! SMS REST API client.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::config::GatewayConfig;
use crate::error::GatewayError;
use crate::types::{ApiErrorBody, SendParams, SendResult};

/// Client for sending messages through the SMS API.
#[derive(Clone)]
pub struct SmsClient {
    http: Client,
    config: GatewayConfig,
}

impl SmsClient {
    /// Build a client for the given account.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        if config.account_sid.is_empty() || config.auth_token.is_empty() {
            return Err(GatewayError::Config(
                "account SID and auth token are required".to_string(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(GatewayError::Http)?;

        Ok(Self { http, config })
    }

    /// Send a text message from the configured number.
    pub async fn send_text(&self, to: &str, body: &str) -> Result<SendResult, GatewayError> {
        let params = SendParams::text(to, &self.config.from_number, body);
        self.send(params).await
    }

    /// Send a message using explicit parameters.
    pub async fn send(&self, params: SendParams) -> Result<SendResult, GatewayError> {
        let url = self.config.messages_url();
        debug!(to = %params.to, "Creating message");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&params)
            .send()
            .await
            .map_err(GatewayError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(GatewayError::Http)?;

        if !status.is_success() {
            return Err(error_from_body(status.as_u16(), &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Map a non-2xx response body to the most specific error available.
fn error_from_body(status: u16, body: &str) -> GatewayError {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            code: Some(code),
            message,
        }) => GatewayError::Api {
            code,
            message: message.unwrap_or_default(),
        },
        _ => GatewayError::Request(format!("HTTP {}: {}", status, body)),
    }
}

impl std::fmt::Debug for SmsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsClient")
            .field("config", &self.config)
            .finish()
    }
}
