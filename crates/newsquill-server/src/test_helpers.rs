use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use newsquill_service::{MockGenerator, TextGenerator};
use serde_json::Value;
use tokio::net::TcpListener;
use tower::ServiceExt;

use crate::routes::InnerAppState;

/// Build a test router around the given mock generator.
pub fn test_router(generator: MockGenerator) -> Router {
    test_router_shared(Arc::new(generator))
}

/// Build a test router around a generator the caller keeps a handle to,
/// e.g. to inspect recorded prompts afterwards.
pub fn test_router_shared(generator: Arc<dyn TextGenerator>) -> Router {
    crate::routes::build_router(Arc::new(InnerAppState { generator }))
}

/// POST a JSON value and return (status, parsed JSON body).
pub async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, &body.to_string()).await
}

/// POST a raw body with a JSON content type and return (status, parsed JSON body).
pub async fn post_raw(app: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let resp = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn an axum test server on a random port. Returns the TestServer
/// with the `base_url` (e.g. "http://127.0.0.1:12345").
pub async fn spawn_test_server(generator: MockGenerator) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let generator: Arc<dyn TextGenerator> = Arc::new(generator);
    let handle = tokio::spawn(async move {
        crate::serve(listener, generator).await.unwrap();
    });
    TestServer {
        base_url,
        _handle: handle,
    }
}
