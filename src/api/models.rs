//! Wire shapes of the API documents the pipeline reads.
//!
//! Only the fields the pipeline needs are modelled; everything else in
//! the documents is ignored. Fields that may legitimately be missing are
//! `Option`s, every other field is required so that an API contract
//! change fails deserialization instead of producing partial rows.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::domain::GameId;

/// Weekly schedule document (`/schedule/{date}` and `/schedule/now`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySchedule {
    /// Days covered by the window, in calendar order.
    #[serde(default)]
    pub game_week: Vec<ScheduleDay>,
}

/// One day inside a weekly schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct ScheduleDay {
    /// Calendar day.
    pub date: NaiveDate,
    /// Games on that day; off days carry an empty list.
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
}

/// Game entry inside a schedule day.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScheduledGame {
    /// Game identifier.
    pub id: GameId,
}

/// Game landing document (`/gamecenter/{id}/landing`).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameLanding {
    /// Game identifier.
    pub id: GameId,
    /// Season identifier, e.g. `20232024`.
    pub season: u32,
    /// Calendar date of the game.
    pub game_date: NaiveDate,
    /// Home team.
    pub home_team: TeamRef,
    /// Away team.
    pub away_team: TeamRef,
    /// Game summary; absent before the game starts.
    #[serde(default)]
    pub summary: Option<LandingSummary>,
}

impl GameLanding {
    /// Scoring periods, or `None` when the game has no scoring data yet.
    #[must_use]
    pub fn scoring(&self) -> Option<&[ScoringPeriod]> {
        self.summary.as_ref()?.scoring.as_deref()
    }
}

/// Team reference carrying its abbreviation.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamRef {
    /// Short team code, e.g. `"PHI"`.
    pub abbrev: String,
}

/// `summary` block of a landing document.
#[derive(Debug, Clone, Deserialize)]
pub struct LandingSummary {
    /// Per-period goal listings; absent for games that have not started.
    #[serde(default)]
    pub scoring: Option<Vec<ScoringPeriod>>,
}

/// Goals scored in one period.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringPeriod {
    /// Period number, starting at 1.
    pub period: u8,
    /// Goals in the order they were scored.
    #[serde(default)]
    pub goals: Vec<GoalEntry>,
}

/// One goal inside a scoring period.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalEntry {
    /// Elapsed clock as `MM:SS`.
    pub time_in_period: String,
    /// Scorer display name.
    pub name: LocalizedText,
    /// Scoring team abbreviation.
    pub team_abbrev: LocalizedText,
    /// Home score after the goal.
    pub home_score: u32,
    /// Away score after the goal.
    pub away_score: u32,
    /// Strength code, e.g. `"PP"`.
    pub strength: String,
}

/// Text field published with per-locale variants.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedText {
    /// Default-locale value.
    pub default: String,
}
