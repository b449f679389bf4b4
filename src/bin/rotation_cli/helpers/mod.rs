// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Helper modules for workout-rotation
// ABOUTME: Provides store wiring and random source construction shared by commands

pub mod context;
