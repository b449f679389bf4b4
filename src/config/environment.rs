// ABOUTME: Environment configuration for data file locations and session planning defaults
// ABOUTME: Resolves the data directory and numeric defaults from environment variables with fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration

use rotation_core::constants::{env_vars, files, session_defaults};
use rotation_core::errors::{AppError, AppResult};
use std::env;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Resolved application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding every data file
    pub data_dir: PathBuf,
    /// Catalog file name inside `data_dir`
    pub catalog_file: String,
    /// Target used when the requested duration is missing or invalid
    pub default_target_minutes: u32,
    /// Permitted overshoot during greedy admission
    pub buffer_minutes: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            catalog_file: files::CATALOG.to_owned(),
            default_target_minutes: session_defaults::TARGET_MINUTES,
            buffer_minutes: session_defaults::BUFFER_MINUTES,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Numeric variables that fail to parse fall back to their defaults with a
    /// warning; they never abort startup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigInvalid` when the catalog file name is blank or is a path
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");

        let data_dir = env::var(env_vars::DATA_DIR)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map_or_else(default_data_dir, PathBuf::from);

        let catalog_file =
            env::var(env_vars::CATALOG_FILE).unwrap_or_else(|_| files::CATALOG.to_owned());
        validate_file_name(&catalog_file)?;

        let config = Self {
            data_dir,
            catalog_file,
            default_target_minutes: positive_minutes_or(
                env_vars::DEFAULT_MINUTES,
                session_defaults::TARGET_MINUTES,
            ),
            buffer_minutes: minutes_or(env_vars::BUFFER_MINUTES, session_defaults::BUFFER_MINUTES),
        };

        info!(
            data_dir = %config.data_dir.display(),
            default_target_minutes = config.default_target_minutes,
            buffer_minutes = config.buffer_minutes,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Replace the data directory (command-line override)
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Paths of every data file
    #[must_use]
    pub fn paths(&self) -> StoragePaths {
        StoragePaths::in_dir(&self.data_dir, &self.catalog_file)
    }
}

/// Locations of the files backing each store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    /// Workout catalog (CSV)
    pub catalog: PathBuf,
    /// Last-performed dates (JSON)
    pub recency: PathBuf,
    /// Backup of the previous recency file
    pub recency_backup: PathBuf,
    /// Session log (CSV)
    pub session_log: PathBuf,
    /// Default-type toggle token
    pub type_toggle: PathBuf,
}

impl StoragePaths {
    /// Standard file names inside `dir`
    #[must_use]
    pub fn in_dir(dir: &Path, catalog_file: &str) -> Self {
        Self {
            catalog: dir.join(catalog_file),
            recency: dir.join(files::RECENCY),
            recency_backup: dir.join(files::RECENCY_BACKUP),
            session_log: dir.join(files::SESSION_LOG),
            type_toggle: dir.join(files::TYPE_TOGGLE),
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir().map_or_else(|| PathBuf::from("."), |dir| dir.join(files::APP_DIR))
}

fn validate_file_name(name: &str) -> AppResult<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::config(format!(
            "{} must not be empty",
            env_vars::CATALOG_FILE
        )));
    }
    if Path::new(trimmed).components().count() != 1 {
        return Err(AppError::config(format!(
            "{} must be a file name, got '{trimmed}'",
            env_vars::CATALOG_FILE
        )));
    }
    Ok(())
}

fn minutes_or(variable: &str, default: u32) -> u32 {
    match env::var(variable) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid {variable} value '{raw}', using default {default}");
            default
        }),
        Err(_) => default,
    }
}

fn positive_minutes_or(variable: &str, default: u32) -> u32 {
    match minutes_or(variable, default) {
        0 => {
            warn!("{variable} must be positive, using default {default}");
            default
        }
        minutes => minutes,
    }
}
