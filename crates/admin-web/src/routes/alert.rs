//! Alert broadcast.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{AdminError, Result};
use crate::state::AppState;

/// Request body for `POST /api/alert`.
#[derive(Debug, Deserialize)]
pub struct AlertRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for a completed broadcast.
#[derive(Debug, Serialize)]
pub struct AlertResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub sent: usize,
    pub failed: usize,
}

/// Send an alert to every subscriber.
///
/// A missing or unparseable body is treated the same as an empty message.
pub async fn send_api(
    State(state): State<AppState>,
    body: Option<Json<AlertRequest>>,
) -> Result<Json<AlertResponse>> {
    let message = body
        .and_then(|Json(req)| req.message)
        .filter(|m| !m.trim().is_empty())
        .ok_or(AdminError::Validation("Message is required"))?;

    let result = state.broadcaster.broadcast(&message).await?;
    info!(
        sent = result.sent,
        failed = result.failed,
        "Alert sent to {} subscribers. Failed for {}.",
        result.sent,
        result.failed
    );

    Ok(Json(AlertResponse {
        status: "success",
        message: "Alerts queued for delivery.",
        sent: result.sent,
        failed: result.failed,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::state_with;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    fn body(message: Option<&str>) -> Option<Json<AlertRequest>> {
        Some(Json(AlertRequest {
            message: message.map(str::to_string),
        }))
    }

    #[tokio::test]
    async fn test_empty_message_rejected_without_sending() {
        let (state, notifier) = state_with(&[("+15550001", "Ludhiana")]).await;

        let err = send_api(State(state), body(Some(""))).await.unwrap_err();
        assert!(matches!(err, AdminError::Validation("Message is required")));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(notifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_blank_message_rejected() {
        let (state, notifier) = state_with(&[("+15550001", "Ludhiana")]).await;

        let err = send_api(State(state), body(Some("  \n\t"))).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(notifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_missing_message_rejected() {
        let (state, notifier) = state_with(&[("+15550001", "Ludhiana")]).await;

        assert!(send_api(State(state.clone()), body(None)).await.is_err());
        assert!(send_api(State(state), None).await.is_err());
        assert_eq!(notifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_alert_sent_to_all_subscribers() {
        let (state, notifier) = state_with(&[
            ("+15550001", "Ludhiana"),
            ("+15550002", "Mohali"),
            ("+15550003", "Patiala"),
        ])
        .await;

        let Json(response) = send_api(State(state), body(Some("Boil water"))).await.unwrap();
        assert_eq!(response.status, "success");
        assert_eq!(response.sent, 3);
        assert_eq!(response.failed, 0);
        assert_eq!(notifier.calls(), 3);

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["sent"], 3);
        assert_eq!(value["failed"], 0);
    }
}
