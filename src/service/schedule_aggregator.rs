//! Schedule aggregator: resolves a date range into game summaries.

use chrono::NaiveDate;
use serde_json::Value;

use crate::api::models::WeeklySchedule;
use crate::api::{Endpoints, JsonSource, fetch_all};
use crate::domain::{GameSummary, ScheduleWindow};
use crate::error::GoalsError;

/// Turns a [`ScheduleWindow`] into the games scheduled inside it.
///
/// Borrows its collaborators; one aggregator per pipeline is enough.
#[derive(Debug)]
pub struct ScheduleAggregator<'a, S> {
    source: &'a S,
    endpoints: &'a Endpoints,
}

impl<'a, S: JsonSource> ScheduleAggregator<'a, S> {
    /// Creates an aggregator over the given source and endpoints.
    #[must_use]
    pub const fn new(source: &'a S, endpoints: &'a Endpoints) -> Self {
        Self { source, endpoints }
    }

    /// Schedule URLs to request for `window`.
    #[must_use]
    pub fn schedule_urls(&self, window: &ScheduleWindow) -> Vec<String> {
        match window {
            ScheduleWindow::Current => vec![self.endpoints.schedule_now()],
            ScheduleWindow::Range(range) => range
                .week_starts()
                .into_iter()
                .map(|start| self.endpoints.schedule_week(start))
                .collect(),
        }
    }

    /// Resolves optional date strings into game summaries.
    ///
    /// With no `start` the current schedule week is used unfiltered.
    /// Otherwise every week overlapping `start..=end` is fetched and games
    /// after the end date are discarded. `end` defaults to `start`.
    ///
    /// # Errors
    ///
    /// Returns [`GoalsError::InvalidDate`] for malformed dates and
    /// [`GoalsError::Schema`] if a schedule document has an unexpected
    /// shape. Schedule weeks that fail to download are skipped.
    pub async fn resolve(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Vec<GameSummary>, GoalsError> {
        let window = ScheduleWindow::from_args(start, end)?;
        self.resolve_window(&window).await
    }

    /// Resolves an already-parsed window into game summaries.
    ///
    /// # Errors
    ///
    /// Returns [`GoalsError::Schema`] if a schedule document has an
    /// unexpected shape.
    pub async fn resolve_window(
        &self,
        window: &ScheduleWindow,
    ) -> Result<Vec<GameSummary>, GoalsError> {
        let urls = self.schedule_urls(window);
        tracing::debug!(?urls, "fetching weekly schedules");
        let documents = fetch_all(self.source, urls).await;
        let games = games_in_schedules(documents, window.upper_bound())?;
        tracing::info!(games = games.len(), "resolved schedule");
        Ok(games)
    }
}

/// Flattens weekly schedule documents into game summaries.
///
/// Keeps document order (week, day, game). Days after `upper_bound` are
/// skipped since weekly windows overshoot the requested end date.
///
/// # Errors
///
/// Returns [`GoalsError::Schema`] if a document is not a weekly schedule.
pub fn games_in_schedules<I>(
    documents: I,
    upper_bound: Option<NaiveDate>,
) -> Result<Vec<GameSummary>, GoalsError>
where
    I: IntoIterator<Item = Value>,
{
    let mut games = Vec::new();
    for document in documents {
        let schedule: WeeklySchedule = serde_json::from_value(document)
            .map_err(|e| GoalsError::schema("schedule", e))?;
        let days = schedule
            .game_week
            .into_iter()
            .filter(|day| upper_bound.is_none_or(|bound| day.date <= bound));
        for day in days {
            games.extend(day.games.into_iter().map(|game| GameSummary {
                game_id: game.id,
                date: day.date,
            }));
        }
    }
    Ok(games)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::api::fetcher::stub::StubSource;
    use crate::domain::GameId;
    use serde_json::json;

    const BASE: &str = "http://stub/v1";

    fn week(days: &[(&str, Vec<u64>)]) -> Value {
        let days: Vec<Value> = days
            .iter()
            .map(|(date, ids)| {
                let games: Vec<Value> = ids.iter().map(|id| json!({ "id": id })).collect();
                json!({ "date": date, "games": games })
            })
            .collect();
        json!({ "gameWeek": days })
    }

    fn ids(games: &[GameSummary]) -> Vec<u64> {
        games.iter().map(|g| g.game_id.get()).collect()
    }

    #[tokio::test]
    async fn range_filters_days_after_end() {
        let endpoints = Endpoints::new(BASE);
        let source = StubSource::new()
            .with_document(
                format!("{BASE}/schedule/2024-01-01"),
                week(&[("2024-01-01", vec![1, 2]), ("2024-01-02", vec![3]), ("2024-01-03", vec![4])]),
            )
            .with_document(
                format!("{BASE}/schedule/2024-01-08"),
                week(&[("2024-01-08", vec![5]), ("2024-01-09", vec![6]), ("2024-01-10", vec![7])]),
            );
        let aggregator = ScheduleAggregator::new(&source, &endpoints);

        let Ok(games) = aggregator.resolve(Some("2024-01-01"), Some("2024-01-09")).await else {
            panic!("resolve failed");
        };
        assert_eq!(ids(&games), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(
            source.requests(),
            vec![format!("{BASE}/schedule/2024-01-01"), format!("{BASE}/schedule/2024-01-08")]
        );
    }

    #[tokio::test]
    async fn current_window_is_unfiltered() {
        let endpoints = Endpoints::new(BASE);
        let source = StubSource::new().with_document(
            format!("{BASE}/schedule/now"),
            week(&[("2024-01-21", vec![10]), ("2024-01-27", vec![11, 12])]),
        );
        let aggregator = ScheduleAggregator::new(&source, &endpoints);

        let Ok(games) = aggregator.resolve(None, Some("2024-01-21")).await else {
            panic!("resolve failed");
        };
        assert_eq!(ids(&games), vec![10, 11, 12]);
        assert_eq!(source.requests(), vec![format!("{BASE}/schedule/now")]);
    }

    #[tokio::test]
    async fn inverted_range_keeps_start_day_only() {
        let endpoints = Endpoints::new(BASE);
        let source = StubSource::new().with_document(
            format!("{BASE}/schedule/2024-02-01"),
            week(&[("2024-02-01", vec![20]), ("2024-02-02", vec![21])]),
        );
        let aggregator = ScheduleAggregator::new(&source, &endpoints);

        let Ok(games) = aggregator.resolve(Some("2024-02-01"), Some("2024-01-01")).await else {
            panic!("inverted range should not error");
        };
        assert_eq!(ids(&games), vec![20]);
    }

    #[tokio::test]
    async fn failed_week_is_skipped() {
        let endpoints = Endpoints::new(BASE);
        let source = StubSource::new().with_document(
            format!("{BASE}/schedule/2024-01-08"),
            week(&[("2024-01-08", vec![5])]),
        );
        let aggregator = ScheduleAggregator::new(&source, &endpoints);

        let Ok(games) = aggregator.resolve(Some("2024-01-01"), Some("2024-01-10")).await else {
            panic!("resolve failed");
        };
        assert_eq!(ids(&games), vec![5]);
        let Some(first) = games.first() else {
            panic!("expected a game");
        };
        assert_eq!(first.game_id, GameId::new(5));
        assert_eq!(first.date.to_string(), "2024-01-08");
    }

    #[tokio::test]
    async fn malformed_start_date_fails_before_fetching() {
        let endpoints = Endpoints::new(BASE);
        let source = StubSource::new();
        let aggregator = ScheduleAggregator::new(&source, &endpoints);

        let result = aggregator.resolve(Some("not-a-date"), None).await;
        assert!(matches!(result, Err(GoalsError::InvalidDate { .. })));
        assert!(source.requests().is_empty());
    }

    #[test]
    fn non_schedule_document_is_schema_error() {
        let result = games_in_schedules([json!({ "gameWeek": "nope" })], None);
        assert!(matches!(result, Err(GoalsError::Schema { context: "schedule", .. })));
    }
}
