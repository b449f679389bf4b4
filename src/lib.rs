// ABOUTME: Main library entry point for the workout rotation planner
// ABOUTME: Wires configuration, logging, file-backed stores, and the session planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Rotation
//!
//! Picks workouts from a personal catalog to fill a training session,
//! preferring the routines that have gone longest without being performed.
//!
//! ## Architecture
//!
//! - **`rotation-core`**: error types, constants, and the workout and selection models
//! - **`rotation-selection`**: pure recency annotation and the selection algorithm
//! - **Storage**: catalog, recency, session log, and type toggle behind traits
//! - **Session**: the planner that generates selections and commits approvals
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use workout_rotation::config::AppConfig;
//! use workout_rotation::errors::AppResult;
//! use workout_rotation::session::{SessionPlanner, SessionRequest};
//! use workout_rotation::storage::{CsvCatalog, CsvSessionLog, JsonRecencyStore};
//!
//! fn main() -> AppResult<()> {
//!     let paths = AppConfig::from_env()?.paths();
//!     let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap_or_default();
//!     let planner = SessionPlanner::open(
//!         &CsvCatalog::new(paths.catalog),
//!         JsonRecencyStore::new(paths.recency, paths.recency_backup),
//!         CsvSessionLog::new(paths.session_log),
//!         today,
//!     )?;
//!
//!     let request = SessionRequest::from_inputs("combat", Some("30"), None, None);
//!     let selection = planner.generate(&request, &mut ChaCha8Rng::seed_from_u64(7));
//!     println!("{} min, {}", selection.total_minutes, selection.session_level);
//!     Ok(())
//! }
//! ```

/// Environment configuration
pub mod config;

/// Text and JSON rendering
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Session planning and approval
pub mod session;

/// Persistence seams and file-backed stores
pub mod storage;

pub use rotation_core::{constants, errors, models};
pub use rotation_selection as selection;
