// ABOUTME: Configuration management module for data locations and planning defaults
// ABOUTME: Re-exports the environment-driven application configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Configuration is environment-only: there is no config file. See
//! [`environment::AppConfig::from_env`] for the variables that are read.

/// Environment configuration
pub mod environment;

pub use environment::{AppConfig, StoragePaths};
