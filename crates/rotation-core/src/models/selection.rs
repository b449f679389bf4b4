// ABOUTME: Selection result produced for one training session and its derived statistics
// ABOUTME: Carries selected workouts, total minutes, average difficulty, level, and per-level minutes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AnnotatedWorkout, Difficulty, SessionLevel};
use crate::constants::level_thresholds::EMPTY_AVERAGE;
use serde::{Deserialize, Serialize};

/// Whether the selector found anything to work with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStatus {
    /// At least one workout of the requested type exists
    Selected,
    /// The catalog holds no workouts of the requested type
    NoWorkoutsAvailable,
}

/// Minutes per difficulty level, always covering all three levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyBreakdown {
    /// Minutes at level 1
    pub light: u32,
    /// Minutes at level 2
    pub medium: u32,
    /// Minutes at level 3
    pub intense: u32,
}

impl DifficultyBreakdown {
    /// Sum durations per level
    pub fn from_workouts<'a>(workouts: impl IntoIterator<Item = &'a AnnotatedWorkout>) -> Self {
        let mut breakdown = Self::default();
        for workout in workouts {
            let slot = breakdown.slot_mut(workout.difficulty());
            *slot = slot.saturating_add(workout.duration_minutes());
        }
        breakdown
    }

    /// Minutes at `difficulty`
    #[must_use]
    pub const fn minutes(&self, difficulty: Difficulty) -> u32 {
        match difficulty.level() {
            1 => self.light,
            2 => self.medium,
            _ => self.intense,
        }
    }

    fn slot_mut(&mut self, difficulty: Difficulty) -> &mut u32 {
        match difficulty.level() {
            1 => &mut self.light,
            2 => &mut self.medium,
            _ => &mut self.intense,
        }
    }

    /// `(level, minutes)` pairs in ascending level order
    pub fn iter(&self) -> impl Iterator<Item = (Difficulty, u32)> + '_ {
        Difficulty::ALL.into_iter().map(|d| (d, self.minutes(d)))
    }
}

/// Workouts chosen for one session plus derived statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionResult {
    /// Requested workout type
    pub workout_type: String,
    /// Selected workouts sorted by difficulty, then most overdue first
    pub selected: Vec<AnnotatedWorkout>,
    /// Sum of selected durations
    pub total_minutes: u32,
    /// Mean difficulty of the selection
    pub average_difficulty: f64,
    /// Classification of `average_difficulty`
    pub session_level: SessionLevel,
    /// Minutes per difficulty level
    pub minutes_by_difficulty: DifficultyBreakdown,
    /// Whether any workouts of the type existed
    pub status: SelectionStatus,
}

impl SelectionResult {
    /// Result reported when no workouts of `workout_type` exist
    #[must_use]
    pub fn no_workouts(workout_type: impl Into<String>) -> Self {
        Self {
            workout_type: workout_type.into(),
            selected: Vec::new(),
            total_minutes: 0,
            average_difficulty: EMPTY_AVERAGE,
            session_level: SessionLevel::Light,
            minutes_by_difficulty: DifficultyBreakdown::default(),
            status: SelectionStatus::NoWorkoutsAvailable,
        }
    }

    /// Compute statistics for an already ordered selection
    #[must_use]
    pub fn from_selected(workout_type: impl Into<String>, selected: Vec<AnnotatedWorkout>) -> Self {
        if selected.is_empty() {
            return Self {
                status: SelectionStatus::Selected,
                ..Self::no_workouts(workout_type)
            };
        }
        let total_minutes = selected
            .iter()
            .map(AnnotatedWorkout::duration_minutes)
            .fold(0, u32::saturating_add);
        let difficulty_sum: u32 = selected
            .iter()
            .map(|w| u32::from(w.difficulty().level()))
            .sum();
        let average_difficulty = f64::from(difficulty_sum) / selected.len() as f64;
        let minutes_by_difficulty = DifficultyBreakdown::from_workouts(&selected);
        Self {
            workout_type: workout_type.into(),
            selected,
            total_minutes,
            average_difficulty,
            session_level: SessionLevel::from_average(average_difficulty),
            minutes_by_difficulty,
            status: SelectionStatus::Selected,
        }
    }

    /// Whether nothing was selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Names of the selected workouts in presentation order (duplicates included)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.selected.iter().map(AnnotatedWorkout::name)
    }
}
