//! Goal extraction from game landing documents.
//!
//! Two kinds of missing data are treated differently:
//!
//! - no `summary.scoring` section: the game has not started or is still
//!   in progress. Yields no goals and is logged, never an error.
//! - a scoring section with a goal missing a field: the API contract has
//!   changed. Fails the whole document with [`GoalsError::Schema`].

use chrono::NaiveTime;
use serde_json::Value;

use crate::api::models::{GameLanding, GoalEntry};
use crate::domain::Goal;
use crate::error::GoalsError;

/// Extracts every goal of one game landing document in document order.
///
/// # Errors
///
/// Returns [`GoalsError::Schema`] if the document or one of its goals
/// lacks a required field, and [`GoalsError::InvalidClock`] if a goal's
/// `timeInPeriod` is not `MM:SS`.
pub fn extract_goals(document: Value) -> Result<Vec<Goal>, GoalsError> {
    let landing: GameLanding =
        serde_json::from_value(document).map_err(|e| GoalsError::schema("landing", e))?;
    goals_from_landing(&landing)
}

/// Extracts goals from an already deserialized landing document.
///
/// # Errors
///
/// Returns [`GoalsError::InvalidClock`] if a goal's `timeInPeriod` is not
/// `MM:SS`.
pub fn goals_from_landing(landing: &GameLanding) -> Result<Vec<Goal>, GoalsError> {
    let Some(scoring) = landing.scoring() else {
        tracing::info!(game_id = %landing.id, "no scoring data yet, skipping game");
        return Ok(Vec::new());
    };

    let mut goals = Vec::new();
    for period in scoring {
        for entry in &period.goals {
            goals.push(build_goal(landing, period.period, entry)?);
        }
    }
    tracing::debug!(game_id = %landing.id, goals = goals.len(), "extracted goals");
    Ok(goals)
}

fn build_goal(landing: &GameLanding, period: u8, entry: &GoalEntry) -> Result<Goal, GoalsError> {
    Ok(Goal {
        season: landing.season,
        game_id: landing.id,
        game_date: landing.game_date,
        period,
        time_in_period: parse_clock(&entry.time_in_period)?,
        player_name: entry.name.default.clone(),
        player_team: entry.team_abbrev.default.clone(),
        home_team: landing.home_team.abbrev.clone(),
        away_team: landing.away_team.abbrev.clone(),
        home_score: entry.home_score,
        away_score: entry.away_score,
        strength: entry.strength.clone(),
    })
}

/// Parses an `MM:SS` period clock into a time with zero hours.
///
/// # Errors
///
/// Returns [`GoalsError::InvalidClock`] if `clock` is not one or two ASCII
/// digits, `:`, and one or two ASCII digits, with minutes and seconds
/// below 60.
pub fn parse_clock(clock: &str) -> Result<NaiveTime, GoalsError> {
    let invalid = || GoalsError::InvalidClock(clock.to_string());
    let (minutes, seconds) = clock.split_once(':').ok_or_else(invalid)?;
    let minutes = clock_field(minutes).ok_or_else(invalid)?;
    let seconds = clock_field(seconds).ok_or_else(invalid)?;
    NaiveTime::from_hms_opt(0, minutes, seconds).ok_or_else(invalid)
}

fn clock_field(field: &str) -> Option<u32> {
    if !(1..=2).contains(&field.len()) || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
