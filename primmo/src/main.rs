#![recursion_limit = "256"]

mod config;
mod error;
mod web;

use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let config = ServerConfig::load()?;
    info!(addr = %config.addr, "starting primmo");
    if let Err(e) = web::start_web(config).await {
        error!("web server stopped: {e}");
        return Err(e.into());
    }
    info!("web server shut down");
    Ok(())
}
