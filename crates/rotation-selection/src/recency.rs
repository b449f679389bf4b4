// ABOUTME: Recency annotation joining catalog workouts with their last-performed dates
// ABOUTME: Computes days since each workout was performed relative to a given day
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use rotation_core::models::{AnnotatedWorkout, Catalog, WorkoutDefinition};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Last-performed date per workout name
pub type RecencyMap = BTreeMap<String, NaiveDate>;

/// Annotate every catalog workout with `days_since` relative to `today`
///
/// The date comes from `recency` keyed by workout name; workouts without an
/// entry are ranked as never performed.
#[must_use]
pub fn annotate(catalog: &Catalog, recency: &RecencyMap, today: NaiveDate) -> Vec<AnnotatedWorkout> {
    catalog
        .workouts()
        .iter()
        .map(|workout| annotate_one(workout, recency, today))
        .collect()
}

fn annotate_one(
    workout: &WorkoutDefinition,
    recency: &RecencyMap,
    today: NaiveDate,
) -> AnnotatedWorkout {
    let last_performed = recency.get(&workout.name).copied();
    AnnotatedWorkout::relative_to(workout.clone().with_last_performed(last_performed), today)
}

/// Record `today` as the last-performed date for every name in `names`
pub fn mark_performed<'a>(
    recency: &mut RecencyMap,
    names: impl IntoIterator<Item = &'a str>,
    today: NaiveDate,
) {
    for name in names {
        recency.insert(name.to_owned(), today);
    }
}

/// Ordering that puts the most overdue workout (largest `days_since`) first
#[must_use]
pub fn most_overdue_first(a: &AnnotatedWorkout, b: &AnnotatedWorkout) -> Ordering {
    b.days_since.cmp(&a.days_since)
}

/// Sort annotated workouts most overdue first, keeping catalog order for ties
pub fn sort_most_overdue(workouts: &mut [AnnotatedWorkout]) {
    workouts.sort_by(most_overdue_first);
}
