//! rpsboard-server: HTTP API over the game results table
//!
//! - `db`: connection pool, schema bootstrap, `GameStore` backends
//! - `http`: axum router, handlers, error mapping

pub mod db;
pub mod http;

pub use db::{create_pool, GameStore, MemoryGameStore, PgGameStore, StoreError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
