//! Database layer - connection pool, schema and game storage
//!
//! # Design Principles
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - One table, append-only: insert and read, never update or delete
//! - Handlers talk to `GameStore`, not to the pool

pub mod migrations;
pub mod pool;
pub mod store;

pub use pool::{create_pool, create_pool_with_options};
pub use store::{GameStore, MemoryGameStore, PgGameStore, StoreError};
