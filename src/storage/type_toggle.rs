// ABOUTME: Default workout type toggle alternating between the primary and secondary types
// ABOUTME: Persists the last handed-out type in a single-token text file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::TypeToggle;
use crate::logging::AppLogger;
use rotation_core::constants::workout_types::{PRIMARY, SECONDARY};
use rotation_core::errors::AppResult;
use std::fs;
use std::path::{Path, PathBuf};

/// Type that follows `last`: the secondary type after the primary one,
/// otherwise the primary type
#[must_use]
pub fn toggle(last: Option<&str>) -> &'static str {
    match last.map(|token| token.trim().to_lowercase()) {
        Some(token) if token == PRIMARY => SECONDARY,
        _ => PRIMARY,
    }
}

/// Toggle stored in a text file
#[derive(Debug, Clone)]
pub struct FileTypeToggle {
    path: PathBuf,
}

impl FileTypeToggle {
    /// Toggle at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TypeToggle for FileTypeToggle {
    fn next_type(&self) -> AppResult<String> {
        let last = if self.path.exists() {
            Some(fs::read_to_string(&self.path)?)
        } else {
            None
        };
        let next = toggle(last.as_deref());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, next)?;

        AppLogger::log_store_operation("type_toggle", "advance", &self.path, 1);
        Ok(next.to_owned())
    }
}
