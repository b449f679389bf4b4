// ABOUTME: Synthetic catalog generator for randomized selection testing
// ABOUTME: Creates reproducible annotated catalogs with mixed types, levels, durations, and recency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use chrono::{Days, NaiveDate};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use workout_rotation::models::{AnnotatedWorkout, Difficulty, WorkoutDefinition};

/// Workout types drawn by the generator
pub const TYPES: [&str; 3] = ["combat", "groove", "flow"];

/// Builder for reproducible synthetic catalogs
///
/// The same seed always yields the same catalog, so failures in the
/// randomized tests can be replayed from the printed seed.
#[derive(Debug, Clone)]
pub struct SyntheticCatalogBuilder {
    rng: ChaCha8Rng,
    today: NaiveDate,
}

impl SyntheticCatalogBuilder {
    /// Create new builder with deterministic seed for reproducibility
    #[must_use]
    pub fn new(seed: u64, today: NaiveDate) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            today,
        }
    }

    /// Catalog of `size` annotated workouts with unique names
    ///
    /// Durations are 3-30 minutes; about a quarter of the workouts were never
    /// performed, the rest within the last 60 days.
    pub fn catalog(&mut self, size: usize) -> Vec<AnnotatedWorkout> {
        (0..size).map(|index| self.workout(index)).collect()
    }

    fn workout(&mut self, index: usize) -> AnnotatedWorkout {
        let workout_type = TYPES[self.rng.gen_range(0..TYPES.len())];
        let level = Difficulty::new(self.rng.gen_range(1..=3)).unwrap();
        let minutes = self.rng.gen_range(3..=30);
        let last_performed = if self.rng.gen_bool(0.25) {
            None
        } else {
            self.today.checked_sub_days(Days::new(self.rng.gen_range(0..=60)))
        };
        let definition =
            WorkoutDefinition::new(workout_type, level, format!("{workout_type}-{index}"), minutes)
                .unwrap()
                .with_last_performed(last_performed);
        AnnotatedWorkout::relative_to(definition, self.today)
    }

    /// Random target between 5 and 90 minutes
    pub fn target_minutes(&mut self) -> u32 {
        self.rng.gen_range(5..=90)
    }

    /// Random ordered pair of levels
    pub fn band_bounds(&mut self) -> (Difficulty, Difficulty) {
        let first = Difficulty::new(self.rng.gen_range(1..=3)).unwrap();
        let second = Difficulty::new(self.rng.gen_range(1..=3)).unwrap();
        (first, second)
    }

    /// Random workout type
    pub fn workout_type(&mut self) -> &'static str {
        TYPES[self.rng.gen_range(0..TYPES.len())]
    }
}
