// ABOUTME: In-memory store implementations for tests and embedding without a filesystem
// ABOUTME: Holds catalog, recency, session log, and toggle state behind mutexes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{toggle, CatalogSource, RecencyStore, SessionLog, SessionLogEntry, TypeToggle};
use rotation_core::errors::{AppError, AppResult};
use rotation_core::models::Catalog;
use rotation_selection::RecencyMap;
use std::sync::{Mutex, MutexGuard};

fn lock<'a, T>(mutex: &'a Mutex<T>, store: &str) -> AppResult<MutexGuard<'a, T>> {
    mutex
        .lock()
        .map_err(|_| AppError::internal(format!("{store} lock poisoned")))
}

/// Catalog held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    catalog: Catalog,
}

impl InMemoryCatalog {
    /// Serve `catalog` as-is
    #[must_use]
    pub const fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

impl CatalogSource for InMemoryCatalog {
    fn load_catalog(&self) -> AppResult<Catalog> {
        Ok(self.catalog.clone())
    }
}

/// Recency map held in memory, counting saves
#[derive(Debug, Default)]
pub struct InMemoryRecencyStore {
    recency: Mutex<RecencyMap>,
    saves: Mutex<usize>,
}

impl InMemoryRecencyStore {
    /// Store seeded with `recency`
    #[must_use]
    pub fn new(recency: RecencyMap) -> Self {
        Self {
            recency: Mutex::new(recency),
            saves: Mutex::new(0),
        }
    }

    /// Number of completed saves
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock is poisoned
    pub fn save_count(&self) -> AppResult<usize> {
        Ok(*lock(&self.saves, "recency")?)
    }
}

impl RecencyStore for InMemoryRecencyStore {
    fn load(&self) -> AppResult<RecencyMap> {
        Ok(lock(&self.recency, "recency")?.clone())
    }

    fn save(&self, recency: &RecencyMap) -> AppResult<()> {
        recency.clone_into(&mut *lock(&self.recency, "recency")?);
        *lock(&self.saves, "recency")? += 1;
        Ok(())
    }
}

/// Session log collected in memory
#[derive(Debug, Default)]
pub struct InMemorySessionLog {
    entries: Mutex<Vec<SessionLogEntry>>,
}

impl InMemorySessionLog {
    /// Empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every appended entry in order
    ///
    /// # Errors
    ///
    /// Returns an error if the log lock is poisoned
    pub fn entries(&self) -> AppResult<Vec<SessionLogEntry>> {
        Ok(lock(&self.entries, "session log")?.clone())
    }
}

impl SessionLog for InMemorySessionLog {
    fn append(&self, entry: &SessionLogEntry) -> AppResult<()> {
        lock(&self.entries, "session log")?.push(entry.clone());
        Ok(())
    }
}

/// Default-type toggle held in memory
#[derive(Debug, Default)]
pub struct InMemoryTypeToggle {
    last: Mutex<Option<String>>,
}

impl InMemoryTypeToggle {
    /// Toggle whose last handed-out type is `last`
    #[must_use]
    pub fn new(last: Option<String>) -> Self {
        Self {
            last: Mutex::new(last),
        }
    }
}

impl TypeToggle for InMemoryTypeToggle {
    fn next_type(&self) -> AppResult<String> {
        let mut last = lock(&self.last, "type toggle")?;
        let next = toggle(last.as_deref()).to_owned();
        *last = Some(next.clone());
        Ok(next)
    }
}
