//! Schema bootstrap for the results table
//!
//! Idempotent; run once before the server accepts requests.

use sqlx::PgPool;

/// Create the `results` table if it does not exist.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running schema bootstrap...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS results (
            id BIGSERIAL PRIMARY KEY,
            player1 TEXT NOT NULL,
            player2 TEXT NOT NULL,
            winner TEXT NOT NULL,
            p1_gesture TEXT NOT NULL,
            p2_gesture TEXT NOT NULL,
            timestamp TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::info!("Schema bootstrap complete");
    Ok(())
}
