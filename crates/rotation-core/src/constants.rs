// ABOUTME: Application-wide constants for session planning and on-disk storage
// ABOUTME: Groups selection defaults, level thresholds, and file names by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than one flat list.

/// Defaults used when planning a session
pub mod session_defaults {
    /// Target session length when none (or an invalid one) is supplied
    pub const TARGET_MINUTES: u32 = 42;

    /// Permitted overshoot of the target during greedy admission
    pub const BUFFER_MINUTES: u32 = 5;

    /// Number of most-overdue candidates shuffled when picking a level representative
    pub const COVERAGE_SHORTLIST: usize = 5;

    /// A session always tries to contain at least this many workouts
    pub const MIN_WORKOUTS: usize = 2;
}

/// Recency ranking
pub mod recency {
    /// `days_since` value for workouts that were never performed
    pub const NEVER_PERFORMED_DAYS: i64 = 9999;

    /// Date format used in the recency store and the session log
    pub const DATE_FORMAT: &str = "%Y-%m-%d";
}

/// Session level classification thresholds on the average difficulty
pub mod level_thresholds {
    /// Averages below this are `Light`
    pub const MEDIUM_FROM: f64 = 1.5;

    /// Averages below this (and at least `MEDIUM_FROM`) are `Medium`
    pub const INTENSE_FROM: f64 = 2.5;

    /// Average reported for an empty selection
    pub const EMPTY_AVERAGE: f64 = 1.0;
}

/// Workout type tags alternated by the default-type toggle
pub mod workout_types {
    /// Tag returned when the toggle file is missing or holds anything else
    pub const PRIMARY: &str = "combat";

    /// Tag returned after `PRIMARY`
    pub const SECONDARY: &str = "groove";
}

/// File names inside the data directory
pub mod files {
    /// Workout catalog (CSV)
    pub const CATALOG: &str = "workouts.csv";

    /// Last-performed dates (JSON)
    pub const RECENCY: &str = "workouts_dates.json";

    /// Copy of the previous recency file, written before every save
    pub const RECENCY_BACKUP: &str = "workouts_dates_backup.json";

    /// Append-only session log (CSV)
    pub const SESSION_LOG: &str = "workouts_log.csv";

    /// Default-type toggle token
    pub const TYPE_TOGGLE: &str = "workouts_lasttype.txt";

    /// Application directory name under the platform data directory
    pub const APP_DIR: &str = "workout-rotation";
}

/// Environment variable names read by the configuration layer
pub mod env_vars {
    /// Directory holding all data files
    pub const DATA_DIR: &str = "WORKOUT_DATA_DIR";

    /// Catalog file name override
    pub const CATALOG_FILE: &str = "WORKOUT_CATALOG_FILE";

    /// Fallback target duration override
    pub const DEFAULT_MINUTES: &str = "WORKOUT_DEFAULT_MINUTES";

    /// Overshoot buffer override
    pub const BUFFER_MINUTES: &str = "WORKOUT_BUFFER_MINUTES";
}
