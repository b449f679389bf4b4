// ABOUTME: Session selection algorithm choosing overdue workouts for a target duration
// ABOUTME: Runs coverage, round-robin fill, duplicate fallback, and minimum-count phases
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Session selector
//!
//! Turns an annotated catalog plus constraints into a concrete list of workouts.
//! Selection runs in five ordered phases over the workouts of the requested
//! type, ranked most overdue first:
//!
//! 1. **Coverage**: one representative per difficulty level in the band, drawn
//!    at random from the five most overdue candidates of that level.
//! 2. **Fill**: round-robin over the band's levels, admitting the most overdue
//!    remaining workout of each level while it fits the overshoot buffer.
//! 3. **Duplicate fallback**: one pass over every workout of the type, repeats
//!    allowed, under the same overshoot rule.
//! 4. **Minimum count**: top up to two workouts regardless of duration.
//! 5. **Finalize**: order by difficulty, then most overdue, and compute stats.
//!
//! The random source is only consumed by the coverage shuffle.

use crate::recency::most_overdue_first;
use rand::seq::SliceRandom;
use rand::Rng;
use rotation_core::constants::session_defaults::{
    BUFFER_MINUTES, COVERAGE_SHORTLIST, MIN_WORKOUTS,
};
use rotation_core::models::{AnnotatedWorkout, DifficultyBand, SelectionResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use std::fmt;
use tracing::{debug, warn};

/// Constraints for one selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionRequest {
    /// Only workouts with this type tag are considered
    pub workout_type: String,
    /// Desired session length
    pub target_minutes: u32,
    /// Difficulty levels to cover and fill from
    pub band: DifficultyBand,
    /// Permitted overshoot of `target_minutes` during greedy admission
    pub buffer_minutes: u32,
}

impl SelectionRequest {
    /// Request with the default overshoot buffer
    pub fn new(workout_type: impl Into<String>, target_minutes: u32, band: DifficultyBand) -> Self {
        Self {
            workout_type: workout_type.into(),
            target_minutes,
            band,
            buffer_minutes: BUFFER_MINUTES,
        }
    }

    /// Override the overshoot buffer
    #[must_use]
    pub const fn with_buffer(mut self, buffer_minutes: u32) -> Self {
        self.buffer_minutes = buffer_minutes;
        self
    }
}

/// Phase in which a workout entered the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionPhase {
    /// Level representative
    Coverage,
    /// Round-robin fill within the buffer
    Fill,
    /// Repeat-allowed fallback within the buffer
    Duplicate,
    /// Top-up to the minimum workout count, duration ignored
    Minimum,
}

impl AdmissionPhase {
    /// Whether admissions in this phase are bound by the overshoot rule
    #[must_use]
    pub const fn checks_buffer(self) -> bool {
        matches!(self, Self::Fill | Self::Duplicate)
    }
}

impl fmt::Display for AdmissionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Coverage => "coverage",
            Self::Fill => "fill",
            Self::Duplicate => "duplicate",
            Self::Minimum => "minimum",
        };
        f.write_str(name)
    }
}

/// One admission step, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Admission {
    /// Admitted workout name
    pub workout: String,
    /// Phase that admitted it
    pub phase: AdmissionPhase,
    /// Session total right after this admission
    pub total_after: u32,
}

/// Select workouts for one session
///
/// `catalog` may hold workouts of every type; only those matching
/// `request.workout_type` are considered. The band in `request` must already
/// be ordered (see [`DifficultyBand::ordered`]).
pub fn select<R: Rng + ?Sized>(
    catalog: &[AnnotatedWorkout],
    request: &SelectionRequest,
    rng: &mut R,
) -> SelectionResult {
    select_with_admissions(catalog, request, rng).0
}

/// Same as [`select`], also returning every admission step in order
pub fn select_with_admissions<R: Rng + ?Sized>(
    catalog: &[AnnotatedWorkout],
    request: &SelectionRequest,
    rng: &mut R,
) -> (SelectionResult, Vec<Admission>) {
    let mut available: Vec<&AnnotatedWorkout> = catalog
        .iter()
        .filter(|w| w.workout_type() == request.workout_type)
        .collect();

    if available.is_empty() {
        warn!(
            workout_type = %request.workout_type,
            "No workouts available for requested type"
        );
        return (SelectionResult::no_workouts(&request.workout_type), Vec::new());
    }

    available.sort_by(|a, b| most_overdue_first(a, b));

    let mut session = SessionBuilder::new(request);
    session.cover_levels(&available, rng);
    session.fill_round_robin(&available);
    session.fill_with_duplicates(&available);
    session.ensure_minimum_count(&available);

    let SessionBuilder {
        selected,
        admissions,
        total_minutes,
        ..
    } = session;

    let mut selected: Vec<AnnotatedWorkout> = selected.into_iter().cloned().collect();
    selected.sort_by(|a, b| {
        a.difficulty()
            .cmp(&b.difficulty())
            .then_with(|| most_overdue_first(a, b))
    });

    let result = SelectionResult::from_selected(&request.workout_type, selected);
    debug!(
        workout_type = %result.workout_type,
        workouts = result.selected.len(),
        total_minutes,
        target_minutes = request.target_minutes,
        level = %result.session_level,
        "Selection complete"
    );
    (result, admissions)
}

/// Mutable state accumulated across selection phases
struct SessionBuilder<'a> {
    request: &'a SelectionRequest,
    selected: Vec<&'a AnnotatedWorkout>,
    chosen: HashSet<&'a str>,
    admissions: Vec<Admission>,
    total_minutes: u32,
}

impl<'a> SessionBuilder<'a> {
    fn new(request: &'a SelectionRequest) -> Self {
        Self {
            request,
            selected: Vec::new(),
            chosen: HashSet::new(),
            admissions: Vec::new(),
            total_minutes: 0,
        }
    }

    fn is_short(&self) -> bool {
        self.total_minutes < self.request.target_minutes
    }

    /// `total + duration - target <= buffer`, evaluated without underflow
    fn fits(&self, workout: &AnnotatedWorkout) -> bool {
        u64::from(self.total_minutes) + u64::from(workout.duration_minutes())
            <= u64::from(self.request.target_minutes) + u64::from(self.request.buffer_minutes)
    }

    fn is_chosen(&self, workout: &AnnotatedWorkout) -> bool {
        self.chosen.contains(workout.name())
    }

    fn admit(&mut self, workout: &'a AnnotatedWorkout, phase: AdmissionPhase) {
        self.total_minutes = self.total_minutes.saturating_add(workout.duration_minutes());
        self.chosen.insert(workout.name());
        self.selected.push(workout);
        debug!(
            %phase,
            workout = workout.name(),
            minutes = workout.duration_minutes(),
            difficulty = workout.difficulty().level(),
            total = self.total_minutes,
            "Admitted workout"
        );
        self.admissions.push(Admission {
            workout: workout.name().to_owned(),
            phase,
            total_after: self.total_minutes,
        });
    }

    fn cover_levels<R: Rng + ?Sized>(&mut self, available: &[&'a AnnotatedWorkout], rng: &mut R) {
        for level in self.request.band.levels() {
            let mut shortlist: Vec<&'a AnnotatedWorkout> = available
                .iter()
                .copied()
                .filter(|w| w.difficulty() == level && !self.is_chosen(w))
                .take(COVERAGE_SHORTLIST)
                .collect();
            shortlist.shuffle(rng);
            if let Some(representative) = shortlist.first().copied() {
                self.admit(representative, AdmissionPhase::Coverage);
            }
        }
    }

    fn fill_round_robin(&mut self, available: &[&'a AnnotatedWorkout]) {
        let mut pools: Vec<VecDeque<&'a AnnotatedWorkout>> = self
            .request
            .band
            .levels()
            .map(|level| {
                available
                    .iter()
                    .copied()
                    .filter(|w| w.difficulty() == level && !self.is_chosen(w))
                    .collect()
            })
            .collect();
        if pools.is_empty() {
            return;
        }

        let mut cursor = 0;
        while self.is_short() {
            let pool_index = cursor % pools.len();
            if let Some(next) = pools[pool_index].pop_front() {
                if self.fits(next) {
                    self.admit(next, AdmissionPhase::Fill);
                }
            }
            cursor += 1;

            if pools.iter().all(VecDeque::is_empty) {
                break;
            }
        }
    }

    fn fill_with_duplicates(&mut self, available: &[&'a AnnotatedWorkout]) {
        for &candidate in available {
            if !self.is_short() {
                break;
            }
            if self.fits(candidate) {
                self.admit(candidate, AdmissionPhase::Duplicate);
            }
        }
    }

    fn ensure_minimum_count(&mut self, available: &[&'a AnnotatedWorkout]) {
        if self.selected.len() >= MIN_WORKOUTS {
            return;
        }
        let remaining: Vec<&'a AnnotatedWorkout> = available
            .iter()
            .copied()
            .filter(|w| !self.is_chosen(w))
            .collect();
        for candidate in remaining {
            if self.selected.len() >= MIN_WORKOUTS {
                break;
            }
            self.admit(candidate, AdmissionPhase::Minimum);
        }
    }
}
