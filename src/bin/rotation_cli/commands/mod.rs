// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for workout-rotation
// ABOUTME: Provides the suggest, catalog, and next-type subcommands

pub mod catalog;
pub mod next_type;
pub mod suggest;
