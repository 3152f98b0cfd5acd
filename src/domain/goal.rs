//! Goal and game summary records.

use chrono::{NaiveDate, NaiveTime};

use super::GameId;

/// One scoring play, flattened for tabular output.
///
/// Immutable once constructed. `home_score` and `away_score` are the
/// running score immediately after this goal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Goal {
    /// Season identifier, e.g. `20232024`.
    pub season: u32,
    /// Game the goal was scored in.
    pub game_id: GameId,
    /// Calendar date of the game.
    pub game_date: NaiveDate,
    /// Period number, starting at 1.
    pub period: u8,
    /// Elapsed clock within the period (hour is always zero).
    pub time_in_period: NaiveTime,
    /// Scorer display name, e.g. `"E. Zamula"`.
    pub player_name: String,
    /// Abbreviation of the scoring team.
    pub player_team: String,
    /// Abbreviation of the home team.
    pub home_team: String,
    /// Abbreviation of the away team.
    pub away_team: String,
    /// Home score after this goal.
    pub home_score: u32,
    /// Away score after this goal.
    pub away_score: u32,
    /// Strength code, e.g. `"EV"`, `"PP"`, `"SH"`.
    pub strength: String,
}

impl Goal {
    /// Combined score of both teams after this goal.
    #[must_use]
    pub const fn total_score(&self) -> u32 {
        self.home_score.saturating_add(self.away_score)
    }

    /// Returns `true` if this goal is a valid successor of `prev` in the
    /// same game: neither score decreases and exactly one goes up by one.
    #[must_use]
    pub fn scores_follow(&self, prev: &Self) -> bool {
        self.game_id == prev.game_id
            && self.home_score >= prev.home_score
            && self.away_score >= prev.away_score
            && self.total_score() == prev.total_score().saturating_add(1)
    }
}

/// Minimal reference to a scheduled game.
///
/// Produced by schedule resolution and consumed by the goal pipeline
/// within a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameSummary {
    /// Game identifier.
    pub game_id: GameId,
    /// Day the game is scheduled on.
    pub date: NaiveDate,
}
