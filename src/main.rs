use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Quote {
            battery_capacity,
            on_peak,
            off_peak,
            speed,
            json,
        } => {
            commands::quote::execute(battery_capacity, on_peak, off_peak, &speed, json)?;
        }
        cli::Commands::Test => {
            commands::test::execute(&args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
        },
        cli::Commands::Version => {
            println!("EV Charge Cost v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
