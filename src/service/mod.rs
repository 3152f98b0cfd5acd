//! Service layer: schedule resolution, goal extraction, and the pipeline
//! that ties them together.
//!
//! [`GoalPipeline`] is the async entry point; [`BlockingGoalPipeline`]
//! wraps it for synchronous callers.

pub mod blocking;
pub mod goal_extractor;
pub mod goal_pipeline;
pub mod schedule_aggregator;

pub use blocking::BlockingGoalPipeline;
pub use goal_extractor::extract_goals;
pub use goal_pipeline::GoalPipeline;
pub use schedule_aggregator::ScheduleAggregator;
