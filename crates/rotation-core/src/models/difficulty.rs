// ABOUTME: Difficulty levels, inclusive difficulty bands, and session level classification
// ABOUTME: Validates the 1-3 difficulty range and parses level names or digits from user input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::level_thresholds::{INTENSE_FROM, MEDIUM_FROM};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Workout difficulty, always in `1..=3`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Difficulty(u8);

impl Difficulty {
    /// Lowest level (1)
    pub const LIGHT: Self = Self(1);
    /// Middle level (2)
    pub const MEDIUM: Self = Self(2);
    /// Highest level (3)
    pub const INTENSE: Self = Self(3);

    /// Every level in ascending order
    pub const ALL: [Self; 3] = [Self::LIGHT, Self::MEDIUM, Self::INTENSE];

    /// Build a difficulty from its numeric level
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` when `level` is not 1, 2 or 3
    pub fn new(level: u8) -> AppResult<Self> {
        if (1..=3).contains(&level) {
            Ok(Self(level))
        } else {
            Err(AppError::out_of_range(format!(
                "difficulty must be between 1 and 3, got {level}"
            )))
        }
    }

    /// Numeric level
    #[must_use]
    pub const fn level(self) -> u8 {
        self.0
    }

    /// Display label for this level
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self.0 {
            1 => "Light",
            2 => "Medium",
            _ => "Intense",
        }
    }

    /// Parse a level from user input: a digit (`"2"`) or a label (`"medium"`)
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for anything else
    pub fn parse(input: &str) -> AppResult<Self> {
        let trimmed = input.trim();
        if let Ok(level) = trimmed.parse::<u8>() {
            return Self::new(level);
        }
        match trimmed.to_lowercase().as_str() {
            "light" => Ok(Self::LIGHT),
            "medium" => Ok(Self::MEDIUM),
            "intense" => Ok(Self::INTENSE),
            _ => Err(AppError::invalid_input(format!(
                "unknown difficulty level '{trimmed}'"
            ))),
        }
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = AppError;

    fn try_from(level: u8) -> AppResult<Self> {
        Self::new(level)
    }
}

impl From<Difficulty> for u8 {
    fn from(difficulty: Difficulty) -> Self {
        difficulty.0
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Inclusive range of difficulty levels `[min, max]` with `min <= max`
///
/// Deserialized bounds go through [`DifficultyBand::ordered`], so a reversed
/// pair is swapped rather than stored as an empty band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BandBounds")]
pub struct DifficultyBand {
    min: Difficulty,
    max: Difficulty,
}

/// Wire shape of a band before ordering
#[derive(Deserialize)]
struct BandBounds {
    min: Difficulty,
    max: Difficulty,
}

impl From<BandBounds> for DifficultyBand {
    fn from(bounds: BandBounds) -> Self {
        Self::ordered(bounds.min, bounds.max)
    }
}

impl DifficultyBand {
    /// Build a band from two bounds, swapping them if they are out of order
    #[must_use]
    pub fn ordered(first: Difficulty, second: Difficulty) -> Self {
        if first <= second {
            Self {
                min: first,
                max: second,
            }
        } else {
            Self {
                min: second,
                max: first,
            }
        }
    }

    /// The full `[Light, Intense]` band
    #[must_use]
    pub const fn full() -> Self {
        Self {
            min: Difficulty::LIGHT,
            max: Difficulty::INTENSE,
        }
    }

    /// Lower bound
    #[must_use]
    pub const fn min(&self) -> Difficulty {
        self.min
    }

    /// Upper bound
    #[must_use]
    pub const fn max(&self) -> Difficulty {
        self.max
    }

    /// Whether `difficulty` lies inside the band
    #[must_use]
    pub fn contains(&self, difficulty: Difficulty) -> bool {
        self.min <= difficulty && difficulty <= self.max
    }

    /// Levels in the band, ascending
    pub fn levels(&self) -> impl Iterator<Item = Difficulty> {
        let range: RangeInclusive<u8> = self.min.level()..=self.max.level();
        range.map(Difficulty)
    }
}

impl Default for DifficultyBand {
    fn default() -> Self {
        Self::full()
    }
}

impl fmt::Display for DifficultyBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Coarse classification of a session by its average difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionLevel {
    /// Average below 1.5
    #[default]
    Light,
    /// Average in `[1.5, 2.5)`
    Medium,
    /// Average of 2.5 or more
    Intense,
}

impl SessionLevel {
    /// Classify an average difficulty
    #[must_use]
    pub fn from_average(average: f64) -> Self {
        if average < MEDIUM_FROM {
            Self::Light
        } else if average < INTENSE_FROM {
            Self::Medium
        } else {
            Self::Intense
        }
    }

    /// Display label
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Medium => "Medium",
            Self::Intense => "Intense",
        }
    }
}

impl fmt::Display for SessionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
