use anyhow::Result;
use colored::Colorize;
use ev_charge_cost::{config, init_tracing, server};
use std::path::Path;
use tracing::info;

/// Execute the start command
///
/// Loads configuration, initializes logging and serves until shutdown.
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting EV charging cost service...".green());

    let cfg = config::load_config(config_path)?;

    init_tracing(&cfg.server.log_level, &cfg.server.log_format);
    info!(config = %config_path.display(), "Configuration loaded");

    // Blocks until shutdown
    server::start_server(cfg).await?;

    Ok(())
}
