//! Game result records
//!
//! A `GameResult` is one completed round between two players. Rows are
//! append-only: nothing in the system updates or deletes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Literal `winner` value recorded when neither player won.
pub const TIE_SENTINEL: &str = "Tie";

/// Maximum number of rows returned by the history feed.
pub const HISTORY_LIMIT: usize = 25;

/// A stored game result.
///
/// `id` is assigned by storage and strictly increases with insertion order,
/// so "most recent" is derived from it rather than from `timestamp`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub id: i64,
    pub player1: String,
    pub player2: String,
    pub winner: String,
    pub p1_gesture: String,
    pub p2_gesture: String,
    pub timestamp: DateTime<Utc>,
}

/// Payload for recording a game. Id and timestamp are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGame {
    pub player1: String,
    pub player2: String,
    pub winner: String,
    pub p1_gesture: String,
    pub p2_gesture: String,
}

impl NewGame {
    /// Materialize the row storage would produce for this payload.
    pub fn into_result(self, id: i64, timestamp: DateTime<Utc>) -> GameResult {
        GameResult {
            id,
            player1: self.player1,
            player2: self.player2,
            winner: self.winner,
            p1_gesture: self.p1_gesture,
            p2_gesture: self.p2_gesture,
            timestamp,
        }
    }
}

/// How a row's free-form `winner` relates to its players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    /// `winner` is the tie sentinel.
    Tie,
    /// `winner` names one of the row's two players.
    Winner(&'a str),
    /// `winner` is neither player nor the sentinel. Scores nothing.
    Unmatched,
}

impl<'a> Outcome<'a> {
    /// Classify a winner string against the two players of a row.
    ///
    /// Matching is exact string equality; the sentinel is checked first.
    /// Only this row's players can win it: a `winner` naming someone seen
    /// in another row is `Unmatched` and scores nobody.
    pub fn classify(player1: &'a str, player2: &'a str, winner: &str) -> Self {
        if winner == TIE_SENTINEL {
            Self::Tie
        } else if winner == player1 {
            Self::Winner(player1)
        } else if winner == player2 {
            Self::Winner(player2)
        } else {
            Self::Unmatched
        }
    }
}

impl GameResult {
    pub fn outcome(&self) -> Outcome<'_> {
        Outcome::classify(&self.player1, &self.player2, &self.winner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn game(winner: &str) -> GameResult {
        NewGame {
            player1: "Alice".into(),
            player2: "Bob".into(),
            winner: winner.into(),
            p1_gesture: "rock".into(),
            p2_gesture: "scissors".into(),
        }
        .into_result(7, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn classify_outcomes() {
        assert_eq!(game("Tie").outcome(), Outcome::Tie);
        assert_eq!(game("Alice").outcome(), Outcome::Winner("Alice"));
        assert_eq!(game("Bob").outcome(), Outcome::Winner("Bob"));
        assert_eq!(game("Carol").outcome(), Outcome::Unmatched);
    }

    #[test]
    fn sentinel_is_case_sensitive() {
        assert_eq!(game("tie").outcome(), Outcome::Unmatched);
    }

    #[test]
    fn player_named_tie_still_ties() {
        let outcome = Outcome::classify("Tie", "Bob", "Tie");
        assert_eq!(outcome, Outcome::Tie);
    }

    #[test]
    fn serializes_all_history_fields() {
        let value = serde_json::to_value(game("Alice")).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["player1"], "Alice");
        assert_eq!(value["p2_gesture"], "scissors");
        assert_eq!(value["timestamp"], "2024-05-01T12:00:00Z");
    }
}
