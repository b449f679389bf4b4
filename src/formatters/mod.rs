// ABOUTME: Output rendering for selections, catalogs, and approval receipts
// ABOUTME: Supports a human-readable text layout and JSON for scripting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Output Format Abstraction Layer
//!
//! ## Supported Formats
//!
//! - **Text**: Default format, aligned for reading in a terminal
//! - **JSON**: Pretty-printed serde output of the same data

use crate::session::ApprovalReceipt;
use rotation_core::constants::recency::DATE_FORMAT;
use rotation_core::errors::{AppError, AppResult};
use rotation_core::models::{AnnotatedWorkout, SelectionResult, SelectionStatus};
use serde::Serialize;
use std::fmt::{self, Write};

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text (default)
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Render a selection
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn render_selection(selection: &SelectionResult, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(selection),
        OutputFormat::Text => text(|out| write_selection(out, selection)),
    }
}

/// Render annotated catalog entries in the given order
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn render_catalog(workouts: &[AnnotatedWorkout], format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(workouts),
        OutputFormat::Text => text(|out| write_catalog(out, workouts)),
    }
}

/// Render an approval receipt
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn render_receipt(receipt: &ApprovalReceipt, format: OutputFormat) -> AppResult<String> {
    match format {
        OutputFormat::Json => to_json(receipt),
        OutputFormat::Text => text(|out| write_receipt(out, receipt)),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

fn text(render: impl FnOnce(&mut String) -> fmt::Result) -> AppResult<String> {
    let mut out = String::new();
    render(&mut out).map_err(|_| AppError::internal("failed to render text output"))?;
    Ok(out)
}

fn workout_line(out: &mut String, workout: &AnnotatedWorkout) -> fmt::Result {
    write!(
        out,
        "  - {} ({} min, {}",
        workout.name(),
        workout.duration_minutes(),
        workout.difficulty()
    )?;
    if let Some(music) = &workout.workout.music {
        write!(out, ", {music}")?;
    }
    out.push(')');
    if let Some(last) = workout.workout.last_performed {
        write!(out, "  -  last: {}", last.format(DATE_FORMAT))?;
    }
    out.push('\n');
    Ok(())
}

fn write_selection(out: &mut String, selection: &SelectionResult) -> fmt::Result {
    if selection.status == SelectionStatus::NoWorkoutsAvailable {
        writeln!(out, "No workouts found for type '{}'", selection.workout_type)?;
        return Ok(());
    }

    writeln!(out, "Selected Workouts: ({})", selection.workout_type)?;
    for workout in &selection.selected {
        workout_line(out, workout)?;
    }

    let breakdown = selection
        .minutes_by_difficulty
        .iter()
        .map(|(difficulty, minutes)| format!("{minutes} min @ {difficulty}"))
        .collect::<Vec<_>>()
        .join(" / ");
    writeln!(out)?;
    writeln!(out, "  Duration: {} min ({breakdown})", selection.total_minutes)?;
    writeln!(
        out,
        "  Average difficulty: {:.2} ({})",
        selection.average_difficulty, selection.session_level
    )
}

fn write_catalog(out: &mut String, workouts: &[AnnotatedWorkout]) -> fmt::Result {
    if workouts.is_empty() {
        return writeln!(out, "Catalog is empty");
    }
    for workout in workouts {
        let since = if workout.never_performed() {
            "never".to_owned()
        } else {
            format!("{}d", workout.days_since)
        };
        writeln!(
            out,
            "{:<8} {:<7} {:>4} min {:>6}  {}",
            workout.workout_type(),
            workout.difficulty().label(),
            workout.duration_minutes(),
            since,
            workout.name()
        )?;
    }
    Ok(())
}

fn write_receipt(out: &mut String, receipt: &ApprovalReceipt) -> fmt::Result {
    writeln!(
        out,
        "Approved {} session for {}: {} min, average difficulty {:.2} ({})",
        receipt.workout_type,
        receipt.date.format(DATE_FORMAT),
        receipt.total_minutes,
        receipt.average_difficulty,
        receipt.session_level
    )?;
    for name in &receipt.updated {
        writeln!(out, "  - {name}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rotation_core::models::{Difficulty, WorkoutDefinition};

    fn selection() -> SelectionResult {
        let today = NaiveDate::from_ymd_opt(2025, 4, 10).unwrap();
        let jab = WorkoutDefinition::new("combat", Difficulty::LIGHT, "Jab Cross", 10)
            .unwrap()
            .with_music("Eye of the Tiger")
            .with_last_performed(NaiveDate::from_ymd_opt(2025, 4, 1));
        let sprawl = WorkoutDefinition::new("combat", Difficulty::INTENSE, "Sprawls", 8).unwrap();
        SelectionResult::from_selected(
            "combat",
            vec![
                AnnotatedWorkout::relative_to(jab, today),
                AnnotatedWorkout::relative_to(sprawl, today),
            ],
        )
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Text);
        assert_eq!(OutputFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_text_selection_layout() {
        let text = render_selection(&selection(), OutputFormat::Text).unwrap();
        assert!(text.starts_with("Selected Workouts: (combat)\n"));
        assert!(text.contains(
            "  - Jab Cross (10 min, Light, Eye of the Tiger)  -  last: 2025-04-01\n"
        ));
        assert!(text.contains("  - Sprawls (8 min, Intense)\n"));
        assert!(text.contains("Duration: 18 min (10 min @ Light / 0 min @ Medium / 8 min @ Intense)"));
        assert!(text.contains("Average difficulty: 2.00 (Medium)"));
    }

    #[test]
    fn test_json_selection_fields() {
        let json = render_selection(&selection(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["total_minutes"], 18);
        assert_eq!(value["status"], "selected");
        assert_eq!(value["selected"][0]["name"], "Jab Cross");
    }

    #[test]
    fn test_empty_selection_message() {
        let text = render_selection(&SelectionResult::no_workouts("flow"), OutputFormat::Text)
            .unwrap();
        assert_eq!(text, "No workouts found for type 'flow'\n");
    }
}
