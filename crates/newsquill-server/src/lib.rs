pub mod config;
mod routes;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use std::sync::Arc;

use anyhow::Result;
use newsquill_service::TextGenerator;
use tokio::net::TcpListener;

use routes::InnerAppState;

pub async fn serve(listener: TcpListener, generator: Arc<dyn TextGenerator>) -> Result<()> {
    let state = Arc::new(InnerAppState { generator });
    let app = routes::build_router(state);
    axum::serve(listener, app).await?;
    Ok(())
}
