//! Games & Connect API server
//!
//! Main application entry point

use anyhow::Context;
use tracing::info;

use games_connect::{config::Settings, server, utils::logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new().context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes file logs on exit
    let _log_guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", games_connect::info());

    server::run(settings).await?;

    Ok(())
}
