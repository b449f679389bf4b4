// ABOUTME: Session planner tying the catalog, recency store, and session log to the selector
// ABOUTME: Parses raw session inputs with fallbacks and commits approved selections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session planning
//!
//! [`SessionPlanner`] is the boundary the command-line front end talks to. It
//! owns the loaded catalog and the current recency map, generates selections
//! on demand, and on approval writes the new last-performed dates before
//! appending the session to the log.

use crate::storage::{CatalogSource, RecencyStore, SessionLog, SessionLogEntry};
use chrono::NaiveDate;
use rand::Rng;
use rotation_core::constants::session_defaults::{BUFFER_MINUTES, TARGET_MINUTES};
use rotation_core::constants::workout_types::PRIMARY;
use rotation_core::errors::{AppError, AppResult};
use rotation_core::models::{
    AnnotatedWorkout, Catalog, Difficulty, DifficultyBand, SelectionResult, SessionLevel,
};
use rotation_selection::{annotate, mark_performed, select, sort_most_overdue};
use rotation_selection::{RecencyMap, SelectionRequest};
use serde::Serialize;
use tracing::{info, warn};

/// Session constraints after fallback handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionRequest {
    /// Workout type to draw from
    pub workout_type: String,
    /// Desired session length in minutes
    pub target_minutes: u32,
    /// Ordered difficulty band
    pub band: DifficultyBand,
}

impl SessionRequest {
    /// Build a request from raw user inputs using the built-in default target
    ///
    /// See [`SessionRequest::from_inputs_or`].
    #[must_use]
    pub fn from_inputs(
        workout_type: &str,
        target: Option<&str>,
        min_level: Option<&str>,
        max_level: Option<&str>,
    ) -> Self {
        Self::from_inputs_or(TARGET_MINUTES, workout_type, target, min_level, max_level)
    }

    /// Build a request from raw user inputs
    ///
    /// Never fails: a missing, unparseable or non-positive target becomes
    /// `default_target`, unparseable bounds become Light and Intense, reversed
    /// bounds are swapped, and a blank type becomes the primary type.
    #[must_use]
    pub fn from_inputs_or(
        default_target: u32,
        workout_type: &str,
        target: Option<&str>,
        min_level: Option<&str>,
        max_level: Option<&str>,
    ) -> Self {
        let workout_type = match workout_type.trim() {
            "" => PRIMARY.to_owned(),
            trimmed => trimmed.to_owned(),
        };
        let min = parse_level(min_level, Difficulty::LIGHT);
        let max = parse_level(max_level, Difficulty::INTENSE);
        Self {
            workout_type,
            target_minutes: parse_target(target, default_target),
            band: DifficultyBand::ordered(min, max),
        }
    }

    /// Selector request with the given overshoot buffer
    #[must_use]
    pub fn to_selection_request(&self, buffer_minutes: u32) -> SelectionRequest {
        SelectionRequest::new(self.workout_type.clone(), self.target_minutes, self.band)
            .with_buffer(buffer_minutes)
    }
}

fn parse_target(raw: Option<&str>, default_target: u32) -> u32 {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return default_target;
    };
    match raw.parse::<i64>() {
        Ok(minutes) if minutes > 0 => u32::try_from(minutes).unwrap_or(u32::MAX),
        _ => {
            warn!(input = %raw, default_target, "Invalid target minutes, using default");
            default_target
        }
    }
}

fn parse_level(raw: Option<&str>, fallback: Difficulty) -> Difficulty {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return fallback;
    };
    Difficulty::parse(raw).unwrap_or_else(|error| {
        warn!(input = %raw, fallback = %fallback, %error, "Invalid difficulty level, using fallback");
        fallback
    })
}

/// Outcome of approving a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApprovalReceipt {
    /// Date recorded for every workout
    pub date: NaiveDate,
    /// Session workout type
    pub workout_type: String,
    /// Sum of durations
    pub total_minutes: u32,
    /// Mean difficulty
    pub average_difficulty: f64,
    /// Session level classification
    pub session_level: SessionLevel,
    /// Distinct workout names whose last-performed date was updated
    pub updated: Vec<String>,
}

/// Generates and commits sessions against a loaded catalog
pub struct SessionPlanner<S: RecencyStore, L: SessionLog> {
    catalog: Catalog,
    recency: RecencyMap,
    recency_store: S,
    session_log: L,
    today: NaiveDate,
    buffer_minutes: u32,
}

impl<S: RecencyStore, L: SessionLog> SessionPlanner<S, L> {
    /// Load the catalog and recency map
    ///
    /// # Errors
    ///
    /// Returns an error if either store fails to load
    pub fn open(
        catalog_source: &impl CatalogSource,
        recency_store: S,
        session_log: L,
        today: NaiveDate,
    ) -> AppResult<Self> {
        let catalog = catalog_source.load_catalog()?;
        let recency = recency_store.load()?;
        info!(
            workouts = catalog.len(),
            tracked = recency.len(),
            %today,
            "Session planner ready"
        );
        Ok(Self {
            catalog,
            recency,
            recency_store,
            session_log,
            today,
            buffer_minutes: BUFFER_MINUTES,
        })
    }

    /// Override the overshoot buffer
    #[must_use]
    pub const fn with_buffer(mut self, buffer_minutes: u32) -> Self {
        self.buffer_minutes = buffer_minutes;
        self
    }

    /// Loaded catalog
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Current recency map, including approvals made through this planner
    #[must_use]
    pub const fn recency(&self) -> &RecencyMap {
        &self.recency
    }

    /// Day used for annotation and approval
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Recency store in use
    #[must_use]
    pub const fn recency_store(&self) -> &S {
        &self.recency_store
    }

    /// Session log in use
    #[must_use]
    pub const fn session_log(&self) -> &L {
        &self.session_log
    }

    /// Annotated catalog, most overdue first, optionally limited to one type
    #[must_use]
    pub fn annotated(&self, workout_type: Option<&str>) -> Vec<AnnotatedWorkout> {
        let mut annotated = annotate(&self.catalog, &self.recency, self.today);
        if let Some(workout_type) = workout_type {
            annotated.retain(|w| w.workout_type() == workout_type);
        }
        sort_most_overdue(&mut annotated);
        annotated
    }

    /// Select workouts for `request`
    pub fn generate<R: Rng + ?Sized>(
        &self,
        request: &SessionRequest,
        rng: &mut R,
    ) -> SelectionResult {
        let annotated = annotate(&self.catalog, &self.recency, self.today);
        let selection = select(
            &annotated,
            &request.to_selection_request(self.buffer_minutes),
            rng,
        );
        info!(
            workout_type = %selection.workout_type,
            workouts = selection.selected.len(),
            total_minutes = selection.total_minutes,
            target_minutes = request.target_minutes,
            level = %selection.session_level,
            "Generated session"
        );
        selection
    }

    /// Commit `selection`: record today for every workout, then log the session
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty selection, `ResourceNotFound` when a
    /// workout is not in the catalog, or the store error if persisting fails.
    /// The in-memory recency map only changes once the save succeeds.
    pub fn approve(&mut self, selection: &SelectionResult) -> AppResult<ApprovalReceipt> {
        if selection.is_empty() {
            return Err(AppError::invalid_input(
                "no workouts selected; generate workouts first",
            ));
        }
        if let Some(unknown) = selection.names().find(|name| self.catalog.get(name).is_none()) {
            return Err(AppError::not_found(format!("workout '{unknown}'")));
        }

        let mut updated_recency = self.recency.clone();
        mark_performed(&mut updated_recency, selection.names(), self.today);
        self.recency_store.save(&updated_recency)?;
        self.recency = updated_recency;

        self.session_log
            .append(&SessionLogEntry::from_selection(selection, self.today))?;

        let mut updated: Vec<String> = Vec::new();
        for name in selection.names() {
            if !updated.iter().any(|seen| seen == name) {
                updated.push(name.to_owned());
            }
        }

        info!(
            workout_type = %selection.workout_type,
            workouts = updated.len(),
            total_minutes = selection.total_minutes,
            "Session approved"
        );
        Ok(ApprovalReceipt {
            date: self.today,
            workout_type: selection.workout_type.clone(),
            total_minutes: selection.total_minutes,
            average_difficulty: selection.average_difficulty,
            session_level: selection.session_level,
            updated,
        })
    }
}
