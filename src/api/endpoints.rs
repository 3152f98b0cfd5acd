//! URL builders for the stats API endpoints the pipeline consumes.

use chrono::NaiveDate;

use crate::config::ApiConfig;
use crate::domain::GameId;
use crate::domain::date_window::fmt_date;

/// Endpoint URL factory bound to a base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// Creates a factory for the given base URL (trailing slashes ignored).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Creates a factory from the configured base URL.
    #[must_use]
    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.as_str())
    }

    /// Base URL without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /schedule/now`: the current schedule week.
    #[must_use]
    pub fn schedule_now(&self) -> String {
        format!("{}/schedule/now", self.base_url)
    }

    /// `GET /schedule/{date}`: the schedule week starting at `date`.
    #[must_use]
    pub fn schedule_week(&self, date: NaiveDate) -> String {
        format!("{}/schedule/{}", self.base_url, fmt_date(date))
    }

    /// `GET /gamecenter/{id}/landing`: game detail including scoring.
    #[must_use]
    pub fn game_landing(&self, game_id: GameId) -> String {
        format!("{}/gamecenter/{game_id}/landing", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_schedule_urls() {
        let endpoints = Endpoints::new("https://api-web.nhle.com/v1/");
        assert_eq!(endpoints.schedule_now(), "https://api-web.nhle.com/v1/schedule/now");
        let date = NaiveDate::from_ymd_opt(2024, 1, 8);
        assert_eq!(
            date.map(|d| endpoints.schedule_week(d)).as_deref(),
            Some("https://api-web.nhle.com/v1/schedule/2024-01-08")
        );
    }

    #[test]
    fn builds_landing_url() {
        let endpoints = Endpoints::new("http://localhost:1234/v1");
        assert_eq!(
            endpoints.game_landing(GameId::new(2023020718)),
            "http://localhost:1234/v1/gamecenter/2023020718/landing"
        );
    }

    #[test]
    fn from_config_uses_base_url() {
        let endpoints = Endpoints::from_config(&ApiConfig::default());
        assert_eq!(endpoints.base_url(), crate::config::DEFAULT_API_URL);
    }
}
