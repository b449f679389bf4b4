// ABOUTME: Core types and constants for the workout rotation planner
// ABOUTME: Foundation crate with error handling, defaults, and domain models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Rotation Core
//!
//! Foundation crate providing shared types and constants for the workout
//! rotation planner. This crate is designed to change infrequently, so the
//! selection engine and the application crate can build on it independently.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Defaults for session planning and file names
//! - **models**: Workout definitions, difficulty levels, and selection results

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants and default values organized by domain
pub mod constants;

/// Core data models (workouts, difficulty, selection results)
pub mod models;
