//! rpsboard - record and rank two-player gesture games
//!
//! - `serve`: HTTP API (record games, leaderboard, history)
//! - `migrate`: create the results table ahead of time

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "rpsboard",
    author,
    version,
    about = "Game results, leaderboard and history service for gesture games"
)]
struct Cli {
    /// Debug logging unless RUST_LOG says otherwise
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::ServeArgs),
    /// Create the results table if it does not exist
    Migrate(commands::MigrateArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(cli.debug)?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await,
        Commands::Migrate(args) => commands::run_migrate(args).await,
    }
}
