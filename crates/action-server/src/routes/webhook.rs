//! Action webhook.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use crate::protocol::{ActionCall, ActionResponse};
use crate::state::AppState;

/// A registered action name.
#[derive(Debug, Serialize)]
pub struct ActionInfo {
    pub name: String,
}

/// Run the action named in the call.
pub async fn run_action(
    State(state): State<AppState>,
    Json(call): Json<ActionCall>,
) -> Result<Json<ActionResponse>> {
    debug!(
        action = %call.next_action,
        text = ?call.tracker.latest_message.text,
        "Webhook call"
    );

    let ctx = call.context();
    let output = state.registry.run(&call.next_action, &ctx).await?;

    Ok(Json(output.into()))
}

/// List registered actions.
pub async fn list_actions(State(state): State<AppState>) -> Json<Vec<ActionInfo>> {
    Json(
        state
            .registry
            .list_actions()
            .into_iter()
            .map(|name| ActionInfo {
                name: name.to_string(),
            })
            .collect(),
    )
}
