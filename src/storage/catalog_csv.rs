// ABOUTME: CSV workout catalog loader with per-line validation and comment skipping
// ABOUTME: Parses type, difficulty, name, duration, and optional music fields without a header row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! CSV catalog source
//!
//! Each record is `type, difficulty, name, duration[, music]`. There is no
//! header row. Blank lines and lines whose first field starts with `#` are
//! skipped and every field is trimmed. Quoted fields may hold commas or
//! newlines. Loading is all-or-nothing: the first malformed record fails the
//! whole load and names the line it starts on.

use super::{csv_error, CatalogSource};
use crate::logging::AppLogger;
use csv::{ReaderBuilder, StringRecord, Trim};
use rotation_core::errors::{AppError, AppResult};
use rotation_core::models::{Catalog, Difficulty, WorkoutDefinition};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

const REQUIRED_FIELDS: usize = 4;

/// Catalog read from a CSV file
#[derive(Debug, Clone)]
pub struct CsvCatalog {
    path: PathBuf,
}

impl CsvCatalog {
    /// Catalog backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for CsvCatalog {
    fn load_catalog(&self) -> AppResult<Catalog> {
        let file = File::open(&self.path).map_err(|error| {
            if error.kind() == io::ErrorKind::NotFound {
                AppError::not_found(format!("catalog file {}", self.path.display()))
                    .with_source(error)
            } else {
                AppError::from(error)
            }
        })?;

        let catalog = parse_catalog(file).map_err(|error| {
            AppError::new(
                error.code,
                format!("{}: {}", self.path.display(), error.message),
            )
        })?;

        AppLogger::log_store_operation("catalog", "load", &self.path, catalog.len());
        Ok(catalog)
    }
}

/// Parse a whole catalog from CSV text
///
/// Quoted fields may span several lines; errors name the line a record
/// starts on.
///
/// # Errors
///
/// Returns `InvalidFormat` for short records or unparseable numbers,
/// `ValueOutOfRange` for difficulties outside 1-3, `InvalidInput` for empty
/// names or non-positive durations and `ResourceAlreadyExists` for a repeated
/// name. Each message starts with the 1-based line number.
pub fn parse_catalog<R: Read>(mut reader: R) -> AppResult<Catalog> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut workouts = Vec::new();
    let mut first_seen: HashMap<String, usize> = HashMap::new();

    for result in csv_reader.records() {
        let record = result.map_err(|error| csv_error("catalog", error))?;
        let line = record
            .position()
            .map_or(1, |position| record_start_line(&text, position.byte() as usize));
        if is_skippable(&record) {
            debug!(line, "Skipping blank or comment catalog line");
            continue;
        }

        let workout = parse_record(&record).map_err(|error| at_line(line, &error))?;
        if let Some(first_line) = first_seen.get(&workout.name) {
            return Err(AppError::already_exists(format!(
                "line {line}: workout '{}' (first defined on line {first_line})",
                workout.name
            )));
        }
        first_seen.insert(workout.name.clone(), line);
        workouts.push(workout);
    }

    Catalog::new(workouts)
}

/// 1-based line of the first record byte at or after `offset`
///
/// The reader reports the offset where it started looking, which may sit on
/// empty or comment lines it skipped before the record itself.
fn record_start_line(text: &str, offset: usize) -> usize {
    let offset = offset.min(text.len());
    let (before, after) = match (text.get(..offset), text.get(offset..)) {
        (Some(before), Some(after)) => (before, after),
        _ => (text, ""),
    };
    let mut line = 1 + before.matches('\n').count();
    for raw_line in after.split('\n') {
        let raw_line = raw_line.strip_suffix('\r').unwrap_or(raw_line);
        if raw_line.is_empty() || raw_line.starts_with('#') {
            line += 1;
        } else {
            break;
        }
    }
    line
}

/// Whitespace-only lines and indented comments reach us as records
fn is_skippable(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty) || record.get(0).is_some_and(|first| first.starts_with('#'))
}

fn parse_record(record: &StringRecord) -> AppResult<WorkoutDefinition> {
    if record.len() < REQUIRED_FIELDS {
        return Err(AppError::invalid_format(format!(
            "expected at least {REQUIRED_FIELDS} fields (type, difficulty, name, duration), found {}",
            record.len()
        )));
    }
    let field = |position: usize| record.get(position).unwrap_or_default();

    let level: u8 = field(1).parse().map_err(|_| {
        AppError::invalid_format(format!("difficulty '{}' is not an integer", field(1)))
    })?;
    let difficulty = Difficulty::new(level)?;

    let minutes: i64 = field(3).parse().map_err(|_| {
        AppError::invalid_format(format!("duration '{}' is not an integer", field(3)))
    })?;
    if minutes <= 0 {
        return Err(AppError::invalid_input(format!(
            "duration must be positive, got {minutes}"
        )));
    }
    let minutes = u32::try_from(minutes)
        .map_err(|_| AppError::out_of_range(format!("duration {minutes} is too large")))?;

    let workout = WorkoutDefinition::new(field(0), difficulty, field(2), minutes)?;
    Ok(match record.get(4) {
        Some(music) => workout.with_music(music),
        None => workout,
    })
}

fn at_line(line: usize, error: &AppError) -> AppError {
    AppError::new(error.code, format!("line {line}: {}", error.message))
}
