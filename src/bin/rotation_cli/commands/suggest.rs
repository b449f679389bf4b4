// ABOUTME: Suggest command for workout-rotation
// ABOUTME: Generates a session for the requested constraints and optionally approves it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rotation_core::errors::AppResult;
use tracing::info;
use workout_rotation::config::AppConfig;
use workout_rotation::formatters::{render_receipt, render_selection, OutputFormat};
use workout_rotation::session::SessionRequest;
use workout_rotation::storage::TypeToggle;

use crate::helpers::context::{open_planner, rng, type_toggle};

/// Raw options from the command line
pub struct SuggestOptions {
    pub workout_type: Option<String>,
    pub minutes: Option<String>,
    pub min_level: Option<String>,
    pub max_level: Option<String>,
    pub seed: Option<u64>,
    pub format: OutputFormat,
    pub approve: bool,
}

/// Generate a session, print it, and commit it when `--approve` is set
pub fn run(config: &AppConfig, options: SuggestOptions) -> AppResult<()> {
    let mut planner = open_planner(config)?;

    let workout_type = match options.workout_type {
        Some(workout_type) => workout_type,
        None => type_toggle(config).next_type()?,
    };
    let request = SessionRequest::from_inputs_or(
        config.default_target_minutes,
        &workout_type,
        options.minutes.as_deref(),
        options.min_level.as_deref(),
        options.max_level.as_deref(),
    );
    info!(
        workout_type = %request.workout_type,
        target_minutes = request.target_minutes,
        band = %request.band,
        "Suggesting session"
    );

    let selection = planner.generate(&request, &mut rng(options.seed));
    print!("{}", render_selection(&selection, options.format)?);

    if options.approve {
        let receipt = planner.approve(&selection)?;
        print!("{}", render_receipt(&receipt, options.format)?);
    }
    Ok(())
}
