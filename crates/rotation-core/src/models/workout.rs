// ABOUTME: Workout definitions, recency-annotated workouts, and the validated catalog
// ABOUTME: Enforces unique workout names since the name joins catalog entries to recency records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Difficulty;
use crate::constants::recency::NEVER_PERFORMED_DAYS;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One routine in the personal catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutDefinition {
    /// Type tag, e.g. `combat` or `groove`
    pub workout_type: String,
    /// Difficulty level
    pub difficulty: Difficulty,
    /// Unique name
    pub name: String,
    /// Length in minutes (always positive)
    pub duration_minutes: u32,
    /// Optional music/playlist tag shown next to the workout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music: Option<String>,
    /// Date the workout was last performed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_performed: Option<NaiveDate>,
}

impl WorkoutDefinition {
    /// Create a definition that has never been performed
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty name or type, `ValueOutOfRange` for a zero duration
    pub fn new(
        workout_type: impl Into<String>,
        difficulty: Difficulty,
        name: impl Into<String>,
        duration_minutes: u32,
    ) -> AppResult<Self> {
        let workout_type = workout_type.into();
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::invalid_input("workout name must not be empty"));
        }
        if workout_type.trim().is_empty() {
            return Err(AppError::invalid_input(format!(
                "workout '{name}' has an empty type"
            )));
        }
        if duration_minutes == 0 {
            return Err(AppError::out_of_range(format!(
                "workout '{name}' must last at least one minute"
            )));
        }
        Ok(Self {
            workout_type,
            difficulty,
            name,
            duration_minutes,
            music: None,
            last_performed: None,
        })
    }

    /// Attach a music tag; blank tags are dropped
    #[must_use]
    pub fn with_music(mut self, music: impl Into<String>) -> Self {
        let music = music.into();
        self.music = if music.trim().is_empty() {
            None
        } else {
            Some(music)
        };
        self
    }

    /// Set the last-performed date
    #[must_use]
    pub const fn with_last_performed(mut self, date: Option<NaiveDate>) -> Self {
        self.last_performed = date;
        self
    }
}

/// A workout paired with the number of days since it was last performed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedWorkout {
    /// The underlying definition, with `last_performed` resolved
    #[serde(flatten)]
    pub workout: WorkoutDefinition,
    /// Days since last performed, `NEVER_PERFORMED_DAYS` if never
    pub days_since: i64,
}

impl AnnotatedWorkout {
    /// Annotate a definition relative to `today`
    #[must_use]
    pub fn relative_to(workout: WorkoutDefinition, today: NaiveDate) -> Self {
        let days_since = workout
            .last_performed
            .map_or(NEVER_PERFORMED_DAYS, |last| (today - last).num_days());
        Self {
            workout,
            days_since,
        }
    }

    /// Workout name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.workout.name
    }

    /// Workout type tag
    #[must_use]
    pub fn workout_type(&self) -> &str {
        &self.workout.workout_type
    }

    /// Difficulty level
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.workout.difficulty
    }

    /// Duration in minutes
    #[must_use]
    pub const fn duration_minutes(&self) -> u32 {
        self.workout.duration_minutes
    }

    /// Whether the workout has never been performed
    #[must_use]
    pub const fn never_performed(&self) -> bool {
        self.workout.last_performed.is_none()
    }
}

/// Ordered list of workout definitions with unique names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    workouts: Vec<WorkoutDefinition>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate names
    ///
    /// # Errors
    ///
    /// Returns `ResourceAlreadyExists` naming the first duplicated workout
    pub fn new(workouts: Vec<WorkoutDefinition>) -> AppResult<Self> {
        let mut seen = HashSet::with_capacity(workouts.len());
        for workout in &workouts {
            if !seen.insert(workout.name.as_str()) {
                return Err(AppError::already_exists(format!(
                    "workout '{}'",
                    workout.name
                )));
            }
        }
        Ok(Self { workouts })
    }

    /// All workouts in catalog order
    #[must_use]
    pub fn workouts(&self) -> &[WorkoutDefinition] {
        &self.workouts
    }

    /// Number of workouts
    #[must_use]
    pub fn len(&self) -> usize {
        self.workouts.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.workouts.is_empty()
    }

    /// Look up a workout by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&WorkoutDefinition> {
        self.workouts.iter().find(|w| w.name == name)
    }

    /// Distinct type tags in first-seen order
    #[must_use]
    pub fn workout_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = Vec::new();
        for workout in &self.workouts {
            if !types.contains(&workout.workout_type.as_str()) {
                types.push(&workout.workout_type);
            }
        }
        types
    }
}
