use std::sync::Arc;

use anyhow::Result;
use log::info;

use crestline::config::{self, Config};
use crestline::logger::setup_logger;
use crestline::web::{start_http_server, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logger
    setup_logger()?;

    let config: Arc<Config> = Arc::new(config::read_config());

    let (shutdown_tx, shutdown_rx) = tokio::sync::broadcast::channel::<()>(1);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown requested");
            let _ = shutdown_tx.send(());
        }
    });

    start_http_server(AppState { config }, shutdown_rx).await;

    Ok(())
}
