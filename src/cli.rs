use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ev-charge-cost", version, about = "EV charging cost calculator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the HTTP server (default)
    Start,

    /// Calculate a charging cost locally without starting the server
    Quote {
        /// Battery capacity in kWh
        #[arg(short, long)]
        battery_capacity: f64,

        /// On-peak rate in cents per kWh
        #[arg(long)]
        on_peak: f64,

        /// Off-peak rate in cents per kWh
        #[arg(long)]
        off_peak: f64,

        /// Charging speed: level1 or level2
        #[arg(short, long, default_value = "level2")]
        speed: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Test configuration validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display the effective configuration
    Show,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
