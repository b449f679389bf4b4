// ABOUTME: Selection engine for the workout rotation planner
// ABOUTME: Pure recency annotation and session selection with an injected random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Rotation Selection
//!
//! Pure, synchronous functions over in-memory data. Nothing here performs I/O;
//! the only side effect of [`selector::select`] is drawing from the supplied
//! random source, so a seeded generator makes every result reproducible.

/// Days-since annotation and recency bookkeeping
pub mod recency;

/// Session selection algorithm
pub mod selector;

pub use recency::{annotate, mark_performed, sort_most_overdue, RecencyMap};
pub use selector::{select, select_with_admissions, Admission, AdmissionPhase, SelectionRequest};
