//! Leaderboard scoring
//!
//! Scores are rebuilt from the full set of rows on every call: a win is
//! worth [`WIN_POINTS`], a tie gives each player [`TIE_POINTS`], a loss
//! scores nothing. Every player that ever appeared gets an entry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::game::{GameResult, Outcome};

pub const WIN_POINTS: i64 = 2;
pub const TIE_POINTS: i64 = 1;

/// Maximum number of entries returned by [`compute_leaderboard`].
pub const LEADERBOARD_LIMIT: usize = 10;

/// One ranked leaderboard row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: i64,
}

/// Score accumulator that remembers first-seen order for tie-breaking.
#[derive(Debug, Default)]
struct Tally {
    entries: Vec<LeaderboardEntry>,
    index: HashMap<String, usize>,
}

impl Tally {
    fn slot(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.entries.len();
        self.entries.push(LeaderboardEntry {
            name: name.to_owned(),
            score: 0,
        });
        self.index.insert(name.to_owned(), idx);
        idx
    }

    fn award(&mut self, name: &str, points: i64) {
        let idx = self.slot(name);
        self.entries[idx].score += points;
    }

    fn add(&mut self, game: &GameResult) {
        self.slot(&game.player1);
        self.slot(&game.player2);

        match game.outcome() {
            Outcome::Tie => {
                self.award(&game.player1, TIE_POINTS);
                self.award(&game.player2, TIE_POINTS);
            }
            Outcome::Winner(name) => self.award(name, WIN_POINTS),
            Outcome::Unmatched => {}
        }
    }
}

/// Rank players by cumulative score, highest first, top [`LEADERBOARD_LIMIT`].
///
/// Equal scores keep the order in which the players were first seen in
/// `games` (the sort is stable).
pub fn compute_leaderboard(games: &[GameResult]) -> Vec<LeaderboardEntry> {
    let mut tally = Tally::default();
    for game in games {
        tally.add(game);
    }

    let mut entries = tally.entries;
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(LEADERBOARD_LIMIT);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::NewGame;
    use chrono::Utc;

    fn game(id: i64, p1: &str, p2: &str, winner: &str) -> GameResult {
        NewGame {
            player1: p1.into(),
            player2: p2.into(),
            winner: winner.into(),
            p1_gesture: "rock".into(),
            p2_gesture: "paper".into(),
        }
        .into_result(id, Utc::now())
    }

    fn entry(name: &str, score: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.into(),
            score,
        }
    }

    #[test]
    fn empty_input_gives_empty_board() {
        assert!(compute_leaderboard(&[]).is_empty());
    }

    #[test]
    fn mixed_results_rank_with_first_seen_tie_break() {
        let games = vec![
            game(1, "Alice", "Bob", "Alice"),
            game(2, "Alice", "Bob", "Tie"),
            game(3, "Bob", "Carol", "Carol"),
        ];

        let board = compute_leaderboard(&games);
        assert_eq!(
            board,
            vec![entry("Alice", 2), entry("Carol", 2), entry("Bob", 1)]
        );
    }

    #[test]
    fn loser_still_listed_with_zero() {
        let board = compute_leaderboard(&[game(1, "Alice", "Bob", "Bob")]);
        assert_eq!(board, vec![entry("Bob", 2), entry("Alice", 0)]);
    }

    #[test]
    fn unmatched_winner_scores_nobody() {
        let games = vec![
            game(1, "Alice", "Bob", "Alice"),
            game(2, "Carol", "Dave", "Alice"),
        ];

        let board = compute_leaderboard(&games);
        assert_eq!(
            board,
            vec![
                entry("Alice", 2),
                entry("Bob", 0),
                entry("Carol", 0),
                entry("Dave", 0),
            ]
        );
    }

    #[test]
    fn self_match_tie_counts_twice() {
        let board = compute_leaderboard(&[game(1, "Solo", "Solo", "Tie")]);
        assert_eq!(board, vec![entry("Solo", 2)]);
    }

    #[test]
    fn self_match_win_counts_once() {
        let board = compute_leaderboard(&[game(1, "Solo", "Solo", "Solo")]);
        assert_eq!(board, vec![entry("Solo", 2)]);
    }

    #[test]
    fn truncates_to_limit() {
        let games: Vec<_> = (0..15)
            .map(|i| {
                let p1 = format!("p{}", i * 2);
                let p2 = format!("p{}", i * 2 + 1);
                game(i, &p1, &p2, &p1)
            })
            .collect();

        let board = compute_leaderboard(&games);
        assert_eq!(board.len(), LEADERBOARD_LIMIT);
        assert!(board.iter().all(|e| e.score == WIN_POINTS));
        assert_eq!(board[0].name, "p0");
        assert_eq!(board[9].name, "p18");
    }
}
