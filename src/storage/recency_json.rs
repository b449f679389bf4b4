// ABOUTME: JSON recency store mapping workout names to their last-performed dates
// ABOUTME: Copies the previous file to a backup path before every save
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::RecencyStore;
use crate::logging::AppLogger;
use chrono::NaiveDate;
use rotation_core::constants::recency::DATE_FORMAT;
use rotation_core::errors::{AppError, AppResult};
use rotation_selection::RecencyMap;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Recency map persisted as a pretty-printed JSON object
#[derive(Debug, Clone)]
pub struct JsonRecencyStore {
    path: PathBuf,
    backup_path: PathBuf,
}

impl JsonRecencyStore {
    /// Store at `path`, backing up to `backup_path` before each save
    pub fn new(path: impl Into<PathBuf>, backup_path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            backup_path: backup_path.into(),
        }
    }

    /// Primary file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Backup file
    #[must_use]
    pub fn backup_path(&self) -> &Path {
        &self.backup_path
    }
}

impl RecencyStore for JsonRecencyStore {
    fn load(&self) -> AppResult<RecencyMap> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No recency file, starting empty");
            return Ok(RecencyMap::new());
        }

        let text = fs::read_to_string(&self.path)?;
        if text.trim().is_empty() {
            return Ok(RecencyMap::new());
        }

        let raw: BTreeMap<String, Option<String>> = serde_json::from_str(&text)?;
        let mut recency = RecencyMap::new();
        for (name, value) in raw {
            let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
                AppLogger::log_skipped_record("recency", &self.path, "empty date");
                continue;
            };
            let date = NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|error| {
                AppError::invalid_format(format!(
                    "{}: invalid date '{value}' for workout '{name}'",
                    self.path.display()
                ))
                .with_source(error)
            })?;
            recency.insert(name, date);
        }

        AppLogger::log_store_operation("recency", "load", &self.path, recency.len());
        Ok(recency)
    }

    fn save(&self, recency: &RecencyMap) -> AppResult<()> {
        if self.path.exists() {
            fs::copy(&self.path, &self.backup_path)?;
            debug!(backup = %self.backup_path.display(), "Backed up recency file");
        }
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(recency)?;
        fs::write(&self.path, json)?;

        AppLogger::log_store_operation("recency", "save", &self.path, recency.len());
        Ok(())
    }
}
