//! day-schedule - interactive daily task planner
//!
//! Asks for tasks, orders them by priority and due date, packs them into
//! each day's working window, and saves the schedule to a text file.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use day_schedule::input::StdinProvider;
use day_schedule::{Config, Planner};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Plan tasks into daily work windows
#[derive(Parser, Debug)]
#[command(name = "day-schedule")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Schedule file to write (overrides config and DAY_SCHEDULE_OUTPUT)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = Config::load_with_overrides(cli.config.as_deref(), cli.output.clone())
        .context("failed to load configuration")?;

    tracing::debug!(
        output = %config.output.path.display(),
        day_start = config.workday.day_start,
        day_end = config.workday.day_end,
        due_date = ?config.ordering.due_date,
        "configuration loaded"
    );

    let planner = Planner::new(&config);
    planner.run(&mut StdinProvider::new()).with_context(|| {
        format!(
            "failed to produce schedule at {}",
            planner.output().display()
        )
    })?;

    Ok(())
}
