//! nhl-goals command-line entry point.
//!
//! Collects goals (or scheduled games) for a date range and writes them
//! as CSV to a file or standard output. Logs go to standard error.

mod cli;

use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use tracing_subscriber::EnvFilter;

use nhl_goals::api::{Endpoints, HttpFetcher};
use nhl_goals::config::ApiConfig;
use nhl_goals::service::GoalPipeline;

use cli::{CommandLine, Commands};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    // Initialize tracing
    let directives = cli::log_directives(
        commands.verbose,
        std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
    );
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&directives)
                .unwrap_or_else(|_| EnvFilter::new(cli::DEFAULT_LOG_LEVEL)),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(commands.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(cli::exit_status(&e))
        }
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    // Load configuration
    let config = ApiConfig::from_env()?;
    tracing::debug!(base_url = %config.base_url, "loaded configuration");

    let fetcher = HttpFetcher::new(&config)?;
    let pipeline = GoalPipeline::new(fetcher, Endpoints::from_config(&config));
    let today = Local::now().date_naive();

    match command {
        Commands::Goals(args) => {
            let (from, to) = args.bounds(today);
            let goals = pipeline
                .collect_goals(from.as_deref(), to.as_deref())
                .await
                .context("failed to collect goals")?;
            args.output
                .write(&goals, args.append)
                .context("failed to write goals")?;
        }
        Commands::Games(args) => {
            let (from, to) = args.bounds(today);
            let games = pipeline
                .resolve_games(from.as_deref(), to.as_deref())
                .await
                .context("failed to resolve games")?;
            args.output
                .write(&games, args.append)
                .context("failed to write games")?;
        }
    }

    Ok(())
}
