// ABOUTME: Core data models for workouts, difficulty levels, and session selections
// ABOUTME: Re-exports the model types used by the selection engine and storage layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Difficulty levels, bands, and session level classification
pub mod difficulty;
/// Selection results and derived statistics
pub mod selection;
/// Workout definitions and the validated catalog
pub mod workout;

pub use difficulty::{Difficulty, DifficultyBand, SessionLevel};
pub use selection::{DifficultyBreakdown, SelectionResult, SelectionStatus};
pub use workout::{AnnotatedWorkout, Catalog, WorkoutDefinition};
