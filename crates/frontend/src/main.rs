use anyhow::{Context, Result};
use dotenv::dotenv;
use frontend::{handler::AppRouter, state::AppState};
use shared::{config::Config, utils::init_logger};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config = Config::init().context("Failed to load configuration")?;

    let _log_guard = init_logger("frontend", config.dev_mode, config.enable_file_log);

    let port = config.port;

    let state = AppState::new(config).context("Failed to create AppState")?;

    info!("🚀 Laundry front end starting");

    AppRouter::serve(port, state)
        .await
        .context("Failed to start server")?;

    info!("Shutting down servers...");

    Ok(())
}
