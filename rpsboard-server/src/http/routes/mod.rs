//! Route handlers organized by resource

pub mod games;
pub mod health;
pub mod leaderboard;
