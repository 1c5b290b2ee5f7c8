//! Arclight node entry point.

use anyhow::{Context, Result};
use node_runtime::config::NodeConfig;
use node_runtime::NodeRuntime;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = NodeConfig::from_env();
    let runtime = NodeRuntime::new(config);

    runtime.start().await.context("node startup failed")?;

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    info!("shutdown signal received");

    runtime.shutdown().await;
    Ok(())
}
