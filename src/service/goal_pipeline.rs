//! Goal pipeline: date range in, flat list of goals out.

use crate::api::{Endpoints, JsonSource, fetch_all};
use crate::domain::{GameSummary, Goal};
use crate::error::GoalsError;

use super::goal_extractor::extract_goals;
use super::schedule_aggregator::ScheduleAggregator;

/// Orchestrates schedule resolution, landing fetches and goal extraction.
///
/// Runs two fan-out/fan-in stages in sequence: all weekly schedules, then
/// all game landings. The second stage starts only after the first one
/// has fully settled because it needs the game ids.
#[derive(Debug, Clone)]
pub struct GoalPipeline<S> {
    source: S,
    endpoints: Endpoints,
}

impl<S: JsonSource> GoalPipeline<S> {
    /// Creates a pipeline over the given source and endpoints.
    #[must_use]
    pub const fn new(source: S, endpoints: Endpoints) -> Self {
        Self { source, endpoints }
    }

    /// Returns the underlying JSON source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Returns the endpoint factory.
    #[must_use]
    pub const fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Resolves the games scheduled between `start` and `end`.
    ///
    /// See [`ScheduleAggregator::resolve`] for the date semantics.
    ///
    /// # Errors
    ///
    /// Returns [`GoalsError::InvalidDate`] for malformed dates and
    /// [`GoalsError::Schema`] for unexpected schedule documents.
    pub async fn resolve_games(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Vec<GameSummary>, GoalsError> {
        ScheduleAggregator::new(&self.source, &self.endpoints)
            .resolve(start, end)
            .await
    }

    /// Collects every goal scored in games between `start` and `end`.
    ///
    /// One landing request is made per resolved game, duplicates
    /// included. Games whose landing cannot be fetched or that have no
    /// scoring data yet contribute nothing. Goals are returned grouped by
    /// game in the order the landing documents came back.
    ///
    /// # Errors
    ///
    /// Returns [`GoalsError::InvalidDate`] for malformed dates, and
    /// [`GoalsError::Schema`] or [`GoalsError::InvalidClock`] as soon as
    /// one fetched document does not match the expected shape.
    pub async fn collect_goals(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Vec<Goal>, GoalsError> {
        let games = self.resolve_games(start, end).await?;
        let urls: Vec<String> = games
            .iter()
            .map(|game| self.endpoints.game_landing(game.game_id))
            .collect();
        tracing::debug!(games = urls.len(), "fetching game landings");

        let landings = fetch_all(&self.source, urls).await;
        let landing_count = landings.len();

        let mut goals = Vec::new();
        for landing in landings {
            goals.extend(extract_goals(landing)?);
        }
        tracing::info!(
            games = games.len(),
            landings = landing_count,
            goals = goals.len(),
            "collected goals"
        );
        Ok(goals)
    }
}
