//! # nhl-goals
//!
//! Fetches NHL schedule and game-landing documents concurrently and
//! flattens every goal into a uniform [`domain::Goal`] record.
//!
//! Missing data is expected: schedule weeks or games that fail to
//! download are dropped, and games without a scoring section yet
//! contribute no goals. Malformed dates and documents that break the API
//! contract are hard errors.
//!
//! ## Architecture
//!
//! ```text
//! CLI (main.rs) ──► CSV output (output/)
//!     │
//!     ├── GoalPipeline / BlockingGoalPipeline (service/)
//!     │       ├── ScheduleAggregator ──► DateWindow (domain/)
//!     │       └── GoalExtractor
//!     │
//!     ├── fetch_all + JsonSource (api/)
//!     │
//!     └── HttpFetcher (reqwest) ──► NHL web API
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use nhl_goals::api::{Endpoints, HttpFetcher};
//! use nhl_goals::config::ApiConfig;
//! use nhl_goals::service::GoalPipeline;
//!
//! # async fn run() -> Result<(), nhl_goals::error::GoalsError> {
//! let config = ApiConfig::from_env()?;
//! let pipeline = GoalPipeline::new(HttpFetcher::new(&config)?, Endpoints::from_config(&config));
//! let goals = pipeline.collect_goals(Some("2024-01-01"), Some("2024-01-31")).await?;
//! println!("{} goals", goals.len());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod domain;
pub mod error;
pub mod output;
pub mod service;
