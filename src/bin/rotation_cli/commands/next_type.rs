// ABOUTME: Next-type command for workout-rotation
// ABOUTME: Advances the default workout type toggle and prints the new value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use rotation_core::errors::AppResult;
use workout_rotation::config::AppConfig;
use workout_rotation::storage::TypeToggle;

use crate::helpers::context::type_toggle;

/// Print the next default workout type
pub fn run(config: &AppConfig) -> AppResult<()> {
    let next = type_toggle(config).next_type()?;
    println!("{next}");
    Ok(())
}
