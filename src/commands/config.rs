use anyhow::Result;
use colored::Colorize;
use ev_charge_cost::config;
use std::path::Path;

/// Execute the config show command
///
/// Prints the effective configuration (defaults, file and environment merged) as TOML
pub fn show(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    println!("{}", "Current Configuration:".green().bold());
    println!();

    let toml_string = toml::to_string_pretty(&cfg)?;
    println!("{}", toml_string);

    Ok(())
}
