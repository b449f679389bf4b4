// ABOUTME: Integration tests for the file-backed catalog, recency, session log, and toggle stores
// ABOUTME: Exercises on-disk formats, missing-file defaults, backups, and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{date, init_test_logging, write_file, SAMPLE_CATALOG_CSV};
use std::fs;
use workout_rotation::errors::ErrorCode;
use workout_rotation::models::{Difficulty, SessionLevel};
use workout_rotation::selection::RecencyMap;
use workout_rotation::storage::{
    parse_catalog, CatalogSource, CsvCatalog, CsvSessionLog, FileTypeToggle, JsonRecencyStore,
    LoggedWorkout, RecencyStore, SessionLog, SessionLogEntry, TypeToggle,
};

// ============================================================================
// Catalog
// ============================================================================

#[test]
fn test_csv_catalog_loads_sample() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    write_file(dir.path(), "workouts.csv", SAMPLE_CATALOG_CSV);

    let catalog = CsvCatalog::new(dir.path().join("workouts.csv"))
        .load_catalog()
        .unwrap();

    assert_eq!(catalog.len(), 7);
    assert_eq!(catalog.workout_types(), vec!["combat", "groove"]);
    let jab = catalog.get("Jab Cross").unwrap();
    assert_eq!(jab.difficulty, Difficulty::LIGHT);
    assert_eq!(jab.duration_minutes, 10);
    assert_eq!(jab.music.as_deref(), Some("Eye of the Tiger"));
    assert_eq!(catalog.get("Hooks and Uppercuts").unwrap().music, None);
}

#[test]
fn test_missing_catalog_is_not_found() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();

    let error = CsvCatalog::new(dir.path().join("absent.csv"))
        .load_catalog()
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
}

#[test]
fn test_catalog_rejects_malformed_records() {
    init_test_logging();
    let cases = [
        ("combat,1,Short Row\n", ErrorCode::InvalidFormat),
        ("combat,x,Bad Level,10\n", ErrorCode::InvalidFormat),
        ("combat,0,Too Easy,10\n", ErrorCode::ValueOutOfRange),
        ("combat,2,No Time,0\n", ErrorCode::InvalidInput),
        ("combat,2,Negative,-4\n", ErrorCode::InvalidInput),
        ("combat,2,Fraction,7.5\n", ErrorCode::InvalidFormat),
        ("combat,2, ,10\n", ErrorCode::InvalidInput),
        ("combat,1,Twice,10\ngroove,2,Twice,12\n", ErrorCode::ResourceAlreadyExists),
    ];
    for (text, code) in cases {
        let error = parse_catalog(text.as_bytes()).unwrap_err();
        assert_eq!(error.code, code, "{text:?}: {error}");
    }
}

#[test]
fn test_catalog_error_names_line_and_file() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "workouts.csv",
        "# header\ncombat,1,Jab Cross,10\n\ncombat,1,Jab Cross,12\n",
    );

    let error = CsvCatalog::new(dir.path().join("workouts.csv"))
        .load_catalog()
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceAlreadyExists);
    assert!(error.message.contains("workouts.csv"), "{}", error.message);
    assert!(error.message.contains("line 4"), "{}", error.message);
    assert!(error.message.contains("line 2"), "{}", error.message);
}

#[test]
fn test_quoted_names_may_span_lines() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    write_file(
        dir.path(),
        "workouts.csv",
        "combat,1,\"Jab\nCross\",10\ncombat,2,Hooks,0\n",
    );

    let error = CsvCatalog::new(dir.path().join("workouts.csv"))
        .load_catalog()
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(error.message.contains("line 3:"), "{}", error.message);
}

#[test]
fn test_quoted_names_may_contain_commas() {
    let catalog = parse_catalog("combat,2,\"Jab, Cross, Hook\",9\n".as_bytes()).unwrap();
    assert!(catalog.get("Jab, Cross, Hook").is_some());
}

// ============================================================================
// Recency
// ============================================================================

#[test]
fn test_missing_recency_file_is_empty() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonRecencyStore::new(dir.path().join("dates.json"), dir.path().join("backup.json"));

    assert!(store.load().unwrap().is_empty());
}

#[test]
fn test_recency_skips_empty_dates_and_rejects_garbage() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let store = JsonRecencyStore::new(dir.path().join("dates.json"), dir.path().join("backup.json"));

    write_file(
        dir.path(),
        "dates.json",
        r#"{"Jab Cross": "2025-05-20", "Hooks": "", "Sprawls": null}"#,
    );
    let recency = store.load().unwrap();
    assert_eq!(recency.len(), 1);
    assert_eq!(recency.get("Jab Cross"), Some(&date(2025, 5, 20)));

    write_file(dir.path(), "dates.json", r#"{"Jab Cross": "20/05/2025"}"#);
    assert_eq!(store.load().unwrap_err().code, ErrorCode::InvalidFormat);

    write_file(dir.path(), "dates.json", "[1, 2");
    assert_eq!(store.load().unwrap_err().code, ErrorCode::SerializationError);
}

#[test]
fn test_recency_save_writes_backup_of_previous_file() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let primary = dir.path().join("dates.json");
    let backup = dir.path().join("backup.json");
    let store = JsonRecencyStore::new(&primary, &backup);

    let mut first = RecencyMap::new();
    first.insert("Jab Cross".into(), date(2025, 5, 1));
    store.save(&first).unwrap();
    assert!(!backup.exists());

    let mut second = first.clone();
    second.insert("Retired Workout".into(), date(2024, 1, 2));
    second.insert("Jab Cross".into(), date(2025, 6, 1));
    store.save(&second).unwrap();

    let previous: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&backup).unwrap()).unwrap();
    assert_eq!(previous["Jab Cross"], "2025-05-01");
    assert_eq!(store.load().unwrap(), second);
}

#[test]
fn test_recency_save_creates_missing_directories() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = JsonRecencyStore::new(nested.join("dates.json"), nested.join("backup.json"));

    let mut recency = RecencyMap::new();
    recency.insert("Hooks".into(), date(2025, 2, 3));
    store.save(&recency).unwrap();

    assert_eq!(store.load().unwrap(), recency);
}

// ============================================================================
// Session log
// ============================================================================

fn entry(day: u32, total: u32) -> SessionLogEntry {
    SessionLogEntry {
        date: date(2025, 6, day),
        workout_type: "combat".into(),
        total_minutes: total,
        average_difficulty: 5.0 / 3.0,
        session_level: SessionLevel::Medium,
        workouts: vec![
            LoggedWorkout {
                name: "Jab Cross".into(),
                duration_minutes: 10,
                difficulty: Difficulty::LIGHT,
            },
            LoggedWorkout {
                name: "Hooks, Uppercuts".into(),
                duration_minutes: 12,
                difficulty: Difficulty::MEDIUM,
            },
        ],
    }
}

#[test]
fn test_session_log_writes_header_once() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("log").join("workouts_log.csv");
    let log = CsvSessionLog::new(&path);

    log.append(&entry(1, 22)).unwrap();
    log.append(&entry(2, 22)).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Date,Workout Type,Total Duration,Average Difficulty,Session Level,Workout Details"
    );
    assert_eq!(
        lines[1],
        "2025-06-01,combat,22,1.67,Medium,\"Jab Cross(10min,diff1); Hooks, Uppercuts(12min,diff2)\""
    );
    assert!(lines[2].starts_with("2025-06-02,combat,22,1.67,Medium,"));
}

#[test]
fn test_session_log_round_trips_through_csv_reader() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workouts_log.csv");
    CsvSessionLog::new(&path).append(&entry(9, 22)).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 1);
    assert_eq!(
        &rows[0][5],
        "Jab Cross(10min,diff1); Hooks, Uppercuts(12min,diff2)"
    );
}

// ============================================================================
// Type toggle
// ============================================================================

#[test]
fn test_file_toggle_alternates_and_persists() {
    init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workouts_lasttype.txt");
    let toggle = FileTypeToggle::new(&path);

    assert_eq!(toggle.next_type().unwrap(), "combat");
    assert_eq!(fs::read_to_string(&path).unwrap(), "combat");
    assert_eq!(toggle.next_type().unwrap(), "groove");
    assert_eq!(toggle.next_type().unwrap(), "combat");

    fs::write(&path, "flow\n").unwrap();
    assert_eq!(toggle.next_type().unwrap(), "combat");
}
