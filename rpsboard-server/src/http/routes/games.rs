//! Game endpoints: record a finished game, read the recent history

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use rpsboard_core::{GameResult, NewGame, HISTORY_LIMIT};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Record acknowledgement
#[derive(Debug, Serialize)]
pub struct RecordResponse {
    pub status: &'static str,
}

/// POST /record-game
///
/// The winner is stored as sent; it is not checked against the players.
async fn record_game(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewGame>,
) -> Result<Json<RecordResponse>, ApiError> {
    let stored = state.store.record(req).await?;
    tracing::info!(
        id = stored.id,
        player1 = %stored.player1,
        player2 = %stored.player2,
        winner = %stored.winner,
        "game recorded"
    );

    Ok(Json(RecordResponse { status: "success" }))
}

/// GET /history - newest first, at most `HISTORY_LIMIT` rows
async fn history(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<GameResult>>, ApiError> {
    let games = state.store.recent(HISTORY_LIMIT).await?;
    Ok(Json(games))
}

/// Game routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/record-game", post(record_game))
        .route("/history", get(history))
}
