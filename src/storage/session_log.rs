// ABOUTME: Append-only CSV session log recording every approved training session
// ABOUTME: Writes the column header once when the log file is first created
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{csv_error, SessionLog, SessionLogEntry, SESSION_LOG_HEADER};
use crate::logging::AppLogger;
use csv::WriterBuilder;
use rotation_core::errors::AppResult;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Session log stored as CSV
#[derive(Debug, Clone)]
pub struct CsvSessionLog {
    path: PathBuf,
}

impl CsvSessionLog {
    /// Log at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SessionLog for CsvSessionLog {
    fn append(&self, entry: &SessionLogEntry) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let is_new = !self.path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(file);
        if is_new {
            writer
                .write_record(SESSION_LOG_HEADER)
                .map_err(|error| csv_error("session log", error))?;
        }
        writer
            .write_record(entry.record())
            .map_err(|error| csv_error("session log", error))?;
        writer.flush()?;

        AppLogger::log_store_operation("session_log", "append", &self.path, entry.workouts.len());
        Ok(())
    }
}
