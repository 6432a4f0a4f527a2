//! Schema bootstrap command, for running ahead of deployment

use anyhow::{Context, Result};
use clap::Parser;

use rpsboard_server::db::{create_pool, migrations};

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}

/// Create the results table if missing
pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = create_pool(&args.database_url)
        .await
        .context("Failed to connect to database")?;

    migrations::run(&pool)
        .await
        .context("Failed to bootstrap schema")?;

    pool.close().await;
    Ok(())
}
