// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Store wiring helpers for workout-rotation
// ABOUTME: Opens the file-backed session planner and builds the random source for draws

use chrono::{Local, NaiveDate};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rotation_core::errors::AppResult;
use tracing::debug;
use workout_rotation::config::AppConfig;
use workout_rotation::session::SessionPlanner;
use workout_rotation::storage::{CsvCatalog, CsvSessionLog, FileTypeToggle, JsonRecencyStore};

/// Planner backed by the files in the configured data directory
pub type FilePlanner = SessionPlanner<JsonRecencyStore, CsvSessionLog>;

/// Local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Open the planner over the configured data files
pub fn open_planner(config: &AppConfig) -> AppResult<FilePlanner> {
    let paths = config.paths();
    let planner = SessionPlanner::open(
        &CsvCatalog::new(paths.catalog),
        JsonRecencyStore::new(paths.recency, paths.recency_backup),
        CsvSessionLog::new(paths.session_log),
        today(),
    )?;
    Ok(planner.with_buffer(config.buffer_minutes))
}

/// Default-type toggle in the configured data directory
pub fn type_toggle(config: &AppConfig) -> FileTypeToggle {
    FileTypeToggle::new(config.paths().type_toggle)
}

/// Seeded generator when `seed` is given, entropy-seeded otherwise
pub fn rng(seed: Option<u64>) -> ChaCha8Rng {
    seed.map_or_else(ChaCha8Rng::from_entropy, |seed| {
        debug!(seed, "Using seeded random source");
        ChaCha8Rng::seed_from_u64(seed)
    })
}
