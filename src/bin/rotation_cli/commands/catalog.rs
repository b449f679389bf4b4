// ABOUTME: Catalog command for workout-rotation
// ABOUTME: Lists annotated catalog workouts most overdue first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rotation_core::errors::AppResult;
use workout_rotation::config::AppConfig;
use workout_rotation::formatters::{render_catalog, OutputFormat};

use crate::helpers::context::open_planner;

/// Print the catalog, optionally limited to one type
pub fn run(config: &AppConfig, workout_type: Option<&str>, format: OutputFormat) -> AppResult<()> {
    let planner = open_planner(config)?;
    let workouts = planner.annotated(workout_type);
    print!("{}", render_catalog(&workouts, format)?);
    Ok(())
}
