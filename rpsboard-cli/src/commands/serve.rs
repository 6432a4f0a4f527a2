//! HTTP server command
//!
//! Bootstraps the schema, then serves the game API until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use rpsboard_server::db::{create_pool_with_options, migrations, pool::DEFAULT_MAX_CONNECTIONS};
use rpsboard_server::{run_server, GameStore, MemoryGameStore, PgGameStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8000")]
    pub bind: SocketAddr,

    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Keep games in memory only, ignoring any database URL
    #[arg(long)]
    pub memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let store: Arc<dyn GameStore> = if args.memory {
        tracing::warn!("Using in-memory store; recorded games are lost on exit");
        Arc::new(MemoryGameStore::new())
    } else {
        let database_url = args.database_url.context(
            "DATABASE_URL not set. Set via --database-url, DATABASE_URL env or .env, or pass --memory",
        )?;

        let pool = create_pool_with_options(&database_url, args.max_connections)
            .await
            .context("Failed to create database pool")?;

        migrations::run(&pool)
            .await
            .context("Failed to bootstrap schema")?;

        Arc::new(PgGameStore::new(pool))
    };

    tracing::info!("Starting rpsboard server on {}", args.bind);

    let config = ServerConfig {
        bind_addr: args.bind,
    };

    run_server(store, config).await.context("Server error")?;

    Ok(())
}
