//! Domain layer: value types and date arithmetic.
//!
//! Everything here is pure: no I/O, no async. Records are created fresh
//! per pipeline run and never mutated after construction.

pub mod date_window;
pub mod game_id;
pub mod goal;

pub use date_window::{DateRange, ScheduleWindow};
pub use game_id::GameId;
pub use goal::{GameSummary, Goal};
