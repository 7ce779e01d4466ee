use anyhow::Result;
use clap::Parser;
use newsquill_service::TextGenerator;
use tokio::net::TcpListener;
use tracing::info;

use newsquill_server::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::parse();
    let addr = config.addr()?;
    let generator = config.build_generator();
    info!(
        "text generation: {} at {} (model {}, timeout {}s)",
        generator.name(),
        config.base_url,
        config.model,
        config.timeout_secs
    );

    let listener = TcpListener::bind(addr).await?;
    info!("newsquill-server listening on http://{addr}");

    newsquill_server::serve(listener, generator).await?;
    Ok(())
}
