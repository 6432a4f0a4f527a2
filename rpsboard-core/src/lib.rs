//! rpsboard-core: game results and leaderboard scoring
//!
//! Pure domain types with no I/O. Storage and HTTP live in `rpsboard-server`.

pub mod game;
pub mod leaderboard;

pub use game::{GameResult, NewGame, Outcome, HISTORY_LIMIT, TIE_SENTINEL};
pub use leaderboard::{
    compute_leaderboard, LeaderboardEntry, LEADERBOARD_LIMIT, TIE_POINTS, WIN_POINTS,
};
