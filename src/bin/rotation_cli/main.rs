// ABOUTME: Workout rotation CLI - suggests, lists, and approves training sessions
// ABOUTME: Parses arguments, initializes logging and configuration, and dispatches subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Suggest a session of the next default type
//! workout-rotation suggest
//!
//! # 30 minutes of combat, medium to intense, reproducible draw
//! workout-rotation suggest --type combat --minutes 30 --min-level medium --seed 7
//!
//! # Suggest and commit in one step
//! workout-rotation suggest --type groove --approve
//!
//! # List the catalog, most overdue first
//! workout-rotation catalog --type combat --format json
//!
//! # Advance the default-type toggle
//! workout-rotation next-type
//! ```

mod commands;
mod helpers;

use clap::{ArgAction, Parser, Subcommand};
use rotation_core::errors::{AppError, AppResult};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use workout_rotation::config::AppConfig;
use workout_rotation::formatters::OutputFormat;
use workout_rotation::logging::LoggingConfig;

use commands::suggest::SuggestOptions;

#[derive(Parser)]
#[command(
    name = "workout-rotation",
    about = "Workout rotation planner",
    long_about = "Picks the most overdue workouts from a personal catalog to fill a training session, and records approved sessions."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Directory holding the catalog and state files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Suggest workouts for one session
    Suggest {
        /// Workout type (defaults to the alternating default type)
        #[arg(long = "type")]
        workout_type: Option<String>,

        /// Target duration in minutes
        #[arg(long)]
        minutes: Option<String>,

        /// Lowest difficulty (1-3 or light/medium/intense)
        #[arg(long)]
        min_level: Option<String>,

        /// Highest difficulty (1-3 or light/medium/intense)
        #[arg(long)]
        max_level: Option<String>,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Record the suggested session as performed today
        #[arg(long)]
        approve: bool,
    },

    /// List catalog workouts, most overdue first
    Catalog {
        /// Only list this workout type
        #[arg(long = "type")]
        workout_type: Option<String>,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Advance and print the default workout type
    NextType,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(code = ?err.code, "{err}");
            eprintln!("error: {err}");
            ExitCode::from(u8::try_from(err.code.exit_code()).unwrap_or(1))
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    LoggingConfig::from_env()
        .with_verbosity(cli.verbose)
        .init()
        .map_err(AppError::from)?;

    let mut config = AppConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    info!(data_dir = %config.data_dir.display(), "Workout rotation CLI");

    match cli.command {
        Command::Suggest {
            workout_type,
            minutes,
            min_level,
            max_level,
            seed,
            format,
            approve,
        } => commands::suggest::run(
            &config,
            SuggestOptions {
                workout_type,
                minutes,
                min_level,
                max_level,
                seed,
                format: OutputFormat::from_str_param(&format),
                approve,
            },
        ),
        Command::Catalog {
            workout_type,
            format,
        } => commands::catalog::run(
            &config,
            workout_type.as_deref(),
            OutputFormat::from_str_param(&format),
        ),
        Command::NextType => commands::next_type::run(&config),
    }
}
