//! Command-line definition.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use nhl_goals::domain::date_window::fmt_date;
use nhl_goals::error::GoalsError;
use nhl_goals::output::OutputTarget;

/// Log filter used when neither `-v` nor `RUST_LOG` say otherwise.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Exit status for bad dates or configuration.
const EXIT_USAGE: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "nhl-goals")]
#[command(version, about = "Fetch NHL goal data as CSV.")]
pub struct CommandLine {
    /// Enable debug logging (overrides `RUST_LOG`)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get goal data for games
    #[command(alias = "g")]
    Goals(RangeArgs),
    /// List the games scheduled in a date range
    Games(RangeArgs),
}

#[derive(Debug, Args)]
pub struct RangeArgs {
    /// Write CSV to this file (`-` for standard output)
    #[arg(short, long, default_value = "-")]
    pub output: OutputTarget,

    /// Append to the output file without writing a header
    #[arg(short, long)]
    pub append: bool,

    /// First date of the range (YYYY-MM-DD) [default: today]
    #[arg(short = 'f', long = "from", value_name = "DATE")]
    pub from: Option<String>,

    /// Last date of the range (YYYY-MM-DD) [default: today]
    #[arg(short = 't', long = "to", value_name = "DATE")]
    pub to: Option<String>,

    /// Use the current schedule week instead of a date range
    #[arg(long, conflicts_with_all = ["from", "to"])]
    pub current: bool,
}

impl RangeArgs {
    /// Start and end arguments for the pipeline, filling in `today` for
    /// omitted dates.
    pub fn bounds(&self, today: NaiveDate) -> (Option<String>, Option<String>) {
        if self.current {
            return (None, None);
        }
        let today = fmt_date(today);
        (
            Some(self.from.clone().unwrap_or_else(|| today.clone())),
            Some(self.to.clone().unwrap_or(today)),
        )
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Filter directives for the log subscriber. `-v` wins over `RUST_LOG`.
pub fn log_directives(verbose: bool, rust_log: Option<&str>) -> String {
    if verbose {
        return "debug".to_string();
    }
    match rust_log.map(str::trim) {
        Some(directives) if !directives.is_empty() => directives.to_string(),
        _ => DEFAULT_LOG_LEVEL.to_string(),
    }
}

/// Process exit status for a failed run: `2` when the user passed a bad
/// date or configuration, `1` otherwise.
pub fn exit_status(err: &anyhow::Error) -> u8 {
    let input_error = err
        .chain()
        .filter_map(|cause| cause.downcast_ref::<GoalsError>())
        .any(GoalsError::is_input_error);
    if input_error { EXIT_USAGE } else { 1 }
}
