mod orders;
mod pipeline;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "leadmart-cli")]
#[command(about = "Lead marketplace pipeline command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Acquire raw leads for the maintenance target and any pending orders
    Scrape,
    /// Verify the latest raw batch and publish the verified output
    Verify,
    /// Run both stages back to back under one run id
    Run,
    /// Inspect or submit lead-sourcing orders
    Orders {
        #[command(subcommand)]
        command: orders::OrderCommands,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = leadmart_core::load_app_config_from_env();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Scrape) => pipeline::run_scrape(&config),
        Some(Commands::Verify) => pipeline::run_verify(&config),
        Some(Commands::Run) => pipeline::run_full(&config),
        Some(Commands::Orders { command }) => orders::handle(&config, command),
        None => {
            println!("leadmart-cli: use `run`, `scrape`, `verify`, or `orders` (see --help)");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests;
