use axum::{extract::State, routing::get, Json, Router};
use newsquill_service::TextGenerator;
use serde_json::{json, Value};

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/health", get(health))
}

async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "status": "ok", "generator": state.generator.name() }))
}
