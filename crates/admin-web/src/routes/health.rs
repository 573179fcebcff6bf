//! `GET /health`.

use axum::Json;
use serde_json::{json, Value};

/// Always `{"status":"ok"}` while the server is accepting requests.
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
