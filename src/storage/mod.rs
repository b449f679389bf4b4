// ABOUTME: Persistence seams for the catalog, recency dates, session log, and default-type toggle
// ABOUTME: Defines store traits plus the session log record shared by file and in-memory backends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Storage abstraction layer
//!
//! Every piece of persisted state sits behind a small trait so the session
//! planner can be exercised against in-memory fakes. File-backed
//! implementations live in the submodules and read or write whole files in a
//! single shot.

/// CSV workout catalog
pub mod catalog_csv;
/// In-memory store fakes
pub mod memory;
/// JSON last-performed dates with backup
pub mod recency_json;
/// Append-only CSV session log
pub mod session_log;
/// Default workout type toggle file
pub mod type_toggle;

pub use catalog_csv::{parse_catalog, CsvCatalog};
pub use memory::{InMemoryCatalog, InMemoryRecencyStore, InMemorySessionLog, InMemoryTypeToggle};
pub use recency_json::JsonRecencyStore;
pub use session_log::CsvSessionLog;
pub use type_toggle::{toggle, FileTypeToggle};

use chrono::NaiveDate;
use rotation_core::constants::recency::DATE_FORMAT;
use rotation_core::errors::{AppError, AppResult, ErrorCode};
use rotation_core::models::{Catalog, Difficulty, SelectionResult, SessionLevel};
use rotation_selection::RecencyMap;
use serde::{Deserialize, Serialize};

/// Source of the workout catalog
pub trait CatalogSource: Send + Sync {
    /// Load and validate the whole catalog
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be read or any record is malformed
    fn load_catalog(&self) -> AppResult<Catalog>;
}

/// Last-performed date per workout name
pub trait RecencyStore: Send + Sync {
    /// Load the recency map; a missing store is an empty map
    ///
    /// # Errors
    ///
    /// Returns an error if stored data cannot be read or parsed
    fn load(&self) -> AppResult<RecencyMap>;

    /// Replace the stored recency map
    ///
    /// # Errors
    ///
    /// Returns an error if the map cannot be written
    fn save(&self, recency: &RecencyMap) -> AppResult<()>;
}

/// Append-only record of approved sessions
pub trait SessionLog: Send + Sync {
    /// Append one approved session
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be written
    fn append(&self, entry: &SessionLogEntry) -> AppResult<()>;
}

/// Alternating default workout type
pub trait TypeToggle: Send + Sync {
    /// Return the next default type and persist it
    ///
    /// # Errors
    ///
    /// Returns an error if the toggle cannot be persisted
    fn next_type(&self) -> AppResult<String>;
}

/// Column names written once at the top of a new session log
pub const SESSION_LOG_HEADER: [&str; 6] = [
    "Date",
    "Workout Type",
    "Total Duration",
    "Average Difficulty",
    "Session Level",
    "Workout Details",
];

/// One workout inside a logged session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedWorkout {
    /// Workout name
    pub name: String,
    /// Duration in minutes
    pub duration_minutes: u32,
    /// Difficulty level
    pub difficulty: Difficulty,
}

/// One approved session as written to the session log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLogEntry {
    /// Approval date
    pub date: NaiveDate,
    /// Session workout type
    pub workout_type: String,
    /// Sum of durations
    pub total_minutes: u32,
    /// Mean difficulty
    pub average_difficulty: f64,
    /// Session level classification
    pub session_level: SessionLevel,
    /// Selected workouts in presentation order
    pub workouts: Vec<LoggedWorkout>,
}

impl SessionLogEntry {
    /// Build the log entry for an approved selection
    #[must_use]
    pub fn from_selection(selection: &SelectionResult, date: NaiveDate) -> Self {
        Self {
            date,
            workout_type: selection.workout_type.clone(),
            total_minutes: selection.total_minutes,
            average_difficulty: selection.average_difficulty,
            session_level: selection.session_level,
            workouts: selection
                .selected
                .iter()
                .map(|w| LoggedWorkout {
                    name: w.name().to_owned(),
                    duration_minutes: w.duration_minutes(),
                    difficulty: w.difficulty(),
                })
                .collect(),
        }
    }

    /// `name(Nmin,diffD)` for every workout, joined by `"; "`
    #[must_use]
    pub fn details_text(&self) -> String {
        self.workouts
            .iter()
            .map(|w| {
                format!(
                    "{}({}min,diff{})",
                    w.name,
                    w.duration_minutes,
                    w.difficulty.level()
                )
            })
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Row values in [`SESSION_LOG_HEADER`] order
    #[must_use]
    pub fn record(&self) -> [String; 6] {
        [
            self.date.format(DATE_FORMAT).to_string(),
            self.workout_type.clone(),
            self.total_minutes.to_string(),
            format!("{:.2}", self.average_difficulty),
            self.session_level.to_string(),
            self.details_text(),
        ]
    }
}

/// Map a `csv` failure onto the unified error type
pub(crate) fn csv_error(context: &str, error: csv::Error) -> AppError {
    let code = if error.is_io_error() {
        ErrorCode::StorageError
    } else {
        ErrorCode::InvalidFormat
    };
    AppError::new(code, format!("{context}: {error}")).with_source(error)
}
