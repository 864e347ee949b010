mod commands;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::commands::{Overrides, ScheduleArgs};

#[derive(Parser)]
#[command(name = "calsched")]
#[command(about = "Preview recurring schedules and availability")]
struct Cli {
    /// Config file to read calendar defaults from
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Calendar name (overrides the config)
    #[arg(long, global = true)]
    name: Option<String>,

    /// Time zone to tag events with (overrides the config)
    #[arg(long, global = true)]
    timezone: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a recurring event and list its occurrences
    Recur {
        #[command(flatten)]
        schedule: ScheduleArgs,

        /// Only list events on this date (YYYY-MM-DD)
        #[arg(long)]
        on: Option<String>,

        /// Print events as JSON
        #[arg(long)]
        json: bool,
    },
    /// Expand a recurring event and report whether a moment is busy
    Status {
        #[command(flatten)]
        schedule: ScheduleArgs,

        /// Date and time to check (YYYY-MM-DDThh:mm)
        #[arg(long)]
        at: String,
    },
    /// Show where the config lives and what it contains
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let overrides = Overrides {
        name: cli.name.as_deref(),
        timezone: cli.timezone.as_deref(),
    };

    match cli.command {
        Commands::Recur { schedule, on, json } => {
            commands::recur::run(&schedule, config_path, &overrides, on.as_deref(), json)
        }
        Commands::Status { schedule, at } => {
            commands::status::run(&schedule, config_path, &overrides, &at)
        }
        Commands::Config => commands::config::run(config_path),
    }
}
