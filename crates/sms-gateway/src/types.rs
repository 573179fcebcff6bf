//! Request and response types for the messages endpoint.

use serde::{Deserialize, Serialize};

/// Form parameters for creating a message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SendParams {
    /// Recipient phone number.
    pub to: String,
    /// Sender phone number.
    pub from: String,
    /// Message text.
    pub body: String,
}

impl SendParams {
    /// Create send params for a text message.
    pub fn text(
        to: impl Into<String>,
        from: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            to: to.into(),
            from: from.into(),
            body: body.into(),
        }
    }
}

/// Result of creating a message.
#[derive(Debug, Clone, Deserialize)]
pub struct SendResult {
    /// Provider-assigned message identifier.
    pub sid: String,

    /// Delivery status at creation time (e.g., "queued").
    #[serde(default)]
    pub status: Option<String>,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    /// Provider error code.
    #[serde(default)]
    pub code: Option<i64>,
    /// Human-readable message.
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_result_parses_minimal_body() {
        let result: SendResult = serde_json::from_str(r#"{"sid":"SM123"}"#).unwrap();
        assert_eq!(result.sid, "SM123");
        assert!(result.status.is_none());
    }

    #[test]
    fn test_send_params_field_names() {
        let params = SendParams::text("+911", "+100", "hi");
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["To"], "+911");
        assert_eq!(value["From"], "+100");
        assert_eq!(value["Body"], "hi");
    }
}
