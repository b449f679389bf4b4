// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging setup, date helpers, catalog fixtures, and temporary data directories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `workout_rotation`

use chrono::{Days, NaiveDate};
use std::fs;
use std::path::Path;
use std::sync::Once;
use workout_rotation::models::{AnnotatedWorkout, Catalog, Difficulty, WorkoutDefinition};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Fixed "today" used across tests
pub fn today() -> NaiveDate {
    date(2025, 6, 1)
}

/// Calendar date shorthand
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// `days` before [`today`]
pub fn days_ago(days: u64) -> NaiveDate {
    today().checked_sub_days(Days::new(days)).unwrap()
}

/// Definition that has never been performed
pub fn definition(workout_type: &str, level: u8, name: &str, minutes: u32) -> WorkoutDefinition {
    WorkoutDefinition::new(workout_type, Difficulty::new(level).unwrap(), name, minutes).unwrap()
}

/// Annotated workout, `None` meaning never performed
pub fn annotated(
    workout_type: &str,
    level: u8,
    name: &str,
    minutes: u32,
    days_since: Option<u64>,
) -> AnnotatedWorkout {
    let workout = definition(workout_type, level, name, minutes)
        .with_last_performed(days_since.map(days_ago));
    AnnotatedWorkout::relative_to(workout, today())
}

/// Small mixed catalog: four combat and three groove workouts
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        definition("combat", 1, "Jab Cross", 10),
        definition("combat", 2, "Hooks and Uppercuts", 12),
        definition("combat", 3, "Sprawl Burpees", 8),
        definition("combat", 1, "Shadow Boxing", 6),
        definition("groove", 1, "Salsa Steps", 15),
        definition("groove", 2, "Hip Hop Basics", 10),
        definition("groove", 3, "Cardio Dance", 20),
    ])
    .unwrap()
}

/// CSV text for [`sample_catalog`], with a comment and blank line
pub const SAMPLE_CATALOG_CSV: &str = "\
# type, difficulty, name, duration, music
combat, 1, Jab Cross, 10, Eye of the Tiger
combat, 2, Hooks and Uppercuts, 12
combat, 3, Sprawl Burpees, 8

combat, 1, Shadow Boxing, 6
groove, 1, Salsa Steps, 15, Latin Mix
groove, 2, Hip Hop Basics, 10
groove, 3, Cardio Dance, 20
";

/// Write `contents` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}
