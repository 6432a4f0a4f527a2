//! Game result storage
//!
//! `GameStore` is the seam between handlers and persistence:
//! - `PgGameStore`: the `results` table via sqlx
//! - `MemoryGameStore`: process-local, for `serve --memory` and tests

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rpsboard_core::{GameResult, NewGame};
use sqlx::{FromRow, PgPool};
use tokio::sync::RwLock;

/// Storage error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Append-only storage for game results.
#[async_trait]
pub trait GameStore: Send + Sync {
    /// Insert one game, returning the row with its assigned id and timestamp.
    async fn record(&self, game: NewGame) -> Result<GameResult, StoreError>;

    /// Every stored game, oldest (lowest id) first.
    ///
    /// Leaderboard tie-breaks follow this order, so it must be stable.
    async fn all(&self) -> Result<Vec<GameResult>, StoreError>;

    /// The `limit` most recent games, newest (highest id) first.
    async fn recent(&self, limit: usize) -> Result<Vec<GameResult>, StoreError>;
}

/// Row shape of the `results` table
#[derive(Debug, Clone, FromRow)]
struct GameRow {
    id: i64,
    player1: String,
    player2: String,
    winner: String,
    p1_gesture: String,
    p2_gesture: String,
    timestamp: DateTime<Utc>,
}

impl From<GameRow> for GameResult {
    fn from(r: GameRow) -> Self {
        Self {
            id: r.id,
            player1: r.player1,
            player2: r.player2,
            winner: r.winner,
            p1_gesture: r.p1_gesture,
            p2_gesture: r.p2_gesture,
            timestamp: r.timestamp,
        }
    }
}

/// PostgreSQL-backed store
#[derive(Debug, Clone)]
pub struct PgGameStore {
    pool: PgPool,
}

impl PgGameStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GameStore for PgGameStore {
    /// Single insert inside a transaction; rolled back before the error
    /// surfaces if the insert fails. No retry.
    async fn record(&self, game: NewGame) -> Result<GameResult, StoreError> {
        let mut tx = self.pool.begin().await?;

        let inserted: Result<GameRow, sqlx::Error> = sqlx::query_as(
            r#"
            INSERT INTO results (player1, player2, winner, p1_gesture, p2_gesture)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, player1, player2, winner, p1_gesture, p2_gesture, timestamp
            "#,
        )
        .bind(&game.player1)
        .bind(&game.player2)
        .bind(&game.winner)
        .bind(&game.p1_gesture)
        .bind(&game.p2_gesture)
        .fetch_one(&mut *tx)
        .await;

        let row = match inserted {
            Ok(row) => row,
            Err(e) => {
                if let Err(rollback) = tx.rollback().await {
                    tracing::warn!(error = %rollback, "rollback after failed insert also failed");
                }
                return Err(e.into());
            }
        };

        tx.commit().await?;
        tracing::debug!(id = row.id, "game recorded");
        Ok(row.into())
    }

    async fn all(&self) -> Result<Vec<GameResult>, StoreError> {
        let rows: Vec<GameRow> = sqlx::query_as(
            r#"
            SELECT id, player1, player2, winner, p1_gesture, p2_gesture, timestamp
            FROM results
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(GameResult::from).collect())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<GameResult>, StoreError> {
        let rows: Vec<GameRow> = sqlx::query_as(
            r#"
            SELECT id, player1, player2, winner, p1_gesture, p2_gesture, timestamp
            FROM results
            ORDER BY id DESC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(GameResult::from).collect())
    }
}

/// In-process store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct MemoryGameStore {
    games: RwLock<Vec<GameResult>>,
}

impl MemoryGameStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GameStore for MemoryGameStore {
    async fn record(&self, game: NewGame) -> Result<GameResult, StoreError> {
        let mut games = self.games.write().await;
        let id = games.last().map_or(1, |g| g.id + 1);
        let result = game.into_result(id, Utc::now());
        games.push(result.clone());
        Ok(result)
    }

    async fn all(&self) -> Result<Vec<GameResult>, StoreError> {
        Ok(self.games.read().await.clone())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<GameResult>, StoreError> {
        let games = self.games.read().await;
        Ok(games.iter().rev().take(limit).cloned().collect())
    }
}
