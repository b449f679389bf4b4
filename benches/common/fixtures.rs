// ABOUTME: Benchmark fixtures generating workout catalogs and recency maps
// ABOUTME: Deterministic data so measurements are reproducible between runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for catalogs of varying size.

use chrono::{Days, NaiveDate};
use workout_rotation::models::{Catalog, Difficulty, WorkoutDefinition};
use workout_rotation::selection::RecencyMap;

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// A personal catalog (20 workouts)
    Small,
    /// A studio timetable (200 workouts)
    Medium,
    /// Stress size (2000 workouts)
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 20,
            Self::Medium => 200,
            Self::Large => 2000,
        }
    }
}

/// Fixed reference day for recency
#[must_use]
pub fn bench_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default()
}

/// Catalog alternating between two types with spread levels and durations
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Catalog {
    let workouts = (0..size.count())
        .filter_map(|index| {
            let workout_type = if index % 2 == 0 { "combat" } else { "groove" };
            let difficulty = Difficulty::ALL[index % 3];
            let minutes = 4 + ((index * 7) % 27) as u32;
            WorkoutDefinition::new(workout_type, difficulty, format!("workout-{index}"), minutes)
                .ok()
        })
        .collect();
    Catalog::new(workouts).unwrap_or_default()
}

/// Recency for roughly two thirds of `catalog`, the rest never performed
#[must_use]
pub fn generate_recency(catalog: &Catalog) -> RecencyMap {
    let today = bench_today();
    catalog
        .workouts()
        .iter()
        .enumerate()
        .filter(|(index, _)| index % 3 != 0)
        .filter_map(|(index, workout)| {
            let days = Days::new(((index * 13) % 90) as u64);
            today
                .checked_sub_days(days)
                .map(|date| (workout.name.clone(), date))
        })
        .collect()
}
