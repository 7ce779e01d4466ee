pub mod feedback;
pub mod health;
pub mod question;
pub mod rephrase;

use std::any::Any;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router};
use newsquill_core::NewsquillError;
use newsquill_service::TextGenerator;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

pub const INVALID_JSON: &str = "Invalid JSON in request body";
pub const INTERNAL_ERROR: &str = "Internal server error";

pub struct InnerAppState {
    pub generator: Arc<dyn TextGenerator>,
}

pub type AppState = Arc<InnerAppState>;

pub type ApiError = (StatusCode, Json<Value>);

pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(health::routes())
        .merge(question::routes())
        .merge(feedback::routes())
        .merge(rephrase::routes())
        .with_state(state);

    with_layers(api)
}

pub(crate) fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!("handler panicked: {detail}");
    to_error(NewsquillError::Internal(detail.to_string())).into_response()
}

/// Parse a request body that must be a JSON object.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, NewsquillError> {
    let invalid = || NewsquillError::InvalidInput(INVALID_JSON.to_string());
    let value: Value = serde_json::from_slice(body).map_err(|_| invalid())?;
    if !value.is_object() {
        return Err(invalid());
    }
    serde_json::from_value(value).map_err(|_| invalid())
}

/// Internal details are logged, never returned to the client.
pub(crate) fn to_error(e: NewsquillError) -> ApiError {
    let (status, msg) = match &e {
        NewsquillError::InvalidInput(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        NewsquillError::Internal(_) => {
            error!("{e}");
            (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR.to_string())
        }
    };
    (status, Json(json!({ "error": msg })))
}
