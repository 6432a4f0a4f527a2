//! Leaderboard endpoint
//!
//! Scores are rebuilt from a full scan on every request. A failed read
//! degrades to an empty board instead of an error response.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use rpsboard_core::{compute_leaderboard, LeaderboardEntry};

use crate::http::server::AppState;

/// GET /leaderboard
async fn leaderboard(State(state): State<Arc<AppState>>) -> Json<Vec<LeaderboardEntry>> {
    match state.store.all().await {
        Ok(games) => Json(compute_leaderboard(&games)),
        Err(e) => {
            tracing::error!("Leaderboard read failed, returning empty board: {}", e);
            Json(Vec::new())
        }
    }
}

/// Leaderboard routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/leaderboard", get(leaderboard))
}
