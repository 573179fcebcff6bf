//! Configuration types for sms-gateway.

/// Default base URL of the provider API.
pub const DEFAULT_BASE_URL: &str = "https://api.twilio.com";

/// Credentials and endpoint for the SMS API.
#[derive(Clone)]
pub struct GatewayConfig {
    /// Base URL of the REST API (e.g., "https://api.twilio.com").
    pub base_url: String,
    /// Account SID, also used as the basic-auth user.
    pub account_sid: String,
    /// Auth token, used as the basic-auth password.
    pub auth_token: String,
    /// Sender number every message is sent from.
    pub from_number: String,
}

impl GatewayConfig {
    /// Create a configuration against the default provider URL.
    pub fn new(
        account_sid: impl Into<String>,
        auth_token: impl Into<String>,
        from_number: impl Into<String>,
    ) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            account_sid: account_sid.into(),
            auth_token: auth_token.into(),
            from_number: from_number.into(),
        }
    }

    /// Override the base URL (useful for a local stub or regional edge).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the message-creation endpoint URL.
    pub fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url,
            urlencoding::encode(&self.account_sid)
        )
    }
}

// Keep the auth token out of logs.
impl std::fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("base_url", &self.base_url)
            .field("account_sid", &self.account_sid)
            .field("from_number", &self.from_number)
            .finish_non_exhaustive()
    }
}
