//! Subscriber listing.

use axum::extract::State;
use axum::Json;
use database::subscriber;
use serde::Serialize;

use crate::error::Result;
use crate::state::AppState;

/// Response body for `GET /api/subscribers`.
#[derive(Debug, Serialize)]
pub struct SubscribersResponse {
    pub subscribers: Vec<SubscriberInfo>,
}

/// A subscriber as shown on the dashboard.
#[derive(Debug, Serialize)]
pub struct SubscriberInfo {
    pub phone_number: String,
    pub location: String,
}

/// List all subscribers.
pub async fn list_api(State(state): State<AppState>) -> Result<Json<SubscribersResponse>> {
    let subscribers = subscriber::list_all(state.db.pool())
        .await?
        .into_iter()
        .map(|s| SubscriberInfo {
            phone_number: s.phone_number,
            location: s.location,
        })
        .collect();

    Ok(Json(SubscribersResponse { subscribers }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::state_with;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use broadcaster::{Broadcaster, SmsNotifier};
    use database::Database;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_list_subscribers() {
        let (state, _) = state_with(&[("+15550001", "Ludhiana"), ("+15550002", "Mohali")]).await;

        let Json(response) = list_api(State(state)).await.unwrap();
        let mut numbers: Vec<_> = response
            .subscribers
            .iter()
            .map(|s| (s.phone_number.as_str(), s.location.as_str()))
            .collect();
        numbers.sort();
        assert_eq!(numbers, vec![("+15550001", "Ludhiana"), ("+15550002", "Mohali")]);
    }

    #[tokio::test]
    async fn test_list_serializes_expected_shape() {
        let (state, _) = state_with(&[("+15550001", "Ludhiana")]).await;

        let Json(response) = list_api(State(state)).await.unwrap();
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"subscribers": [{"phone_number": "+15550001", "location": "Ludhiana"}]})
        );
    }

    #[tokio::test]
    async fn test_storage_failure_is_500() {
        // No migration: the subscribers table does not exist.
        let db = Database::connect("sqlite::memory:").await.unwrap();
        let broadcaster = Broadcaster::new(db.clone(), Arc::new(SmsNotifier::dry_run()));
        let state = AppState::new(db, broadcaster);

        let err = list_api(State(state)).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
