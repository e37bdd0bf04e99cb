//! Integration tests driving the binary through scripted stdin

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{diary_cmd, script};

#[test]
fn test_starts_with_sample_data() {
    diary_cmd()
        .write_stdin(script(&["3", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("--- ALL ENTRIES ---"))
        .stdout(predicate::str::contains("Movie day"))
        .stdout(predicate::str::contains("Training"))
        .stdout(predicate::str::contains("Dinner night"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_no_sample_data_flag() {
    diary_cmd()
        .arg("--no-sample-data")
        .write_stdin(script(&["3", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found!"));
}

#[test]
fn test_closed_stdin_exits_cleanly() {
    diary_cmd()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_write_then_list_entry() {
    diary_cmd()
        .arg("--no-sample-data")
        .write_stdin(script(&[
            "1",
            "Per",
            "Petterson",
            "per@ex.com",
            "Present",
            "What i did today",
            "3",
            "0",
        ]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry created! Got ID: 1"))
        .stdout(predicate::str::contains(
            "Present (Per Petterson): What i did today",
        ));
}

#[test]
fn test_ids_keep_growing_after_delete() {
    diary_cmd()
        .write_stdin(script(&["2", "3", "1", "1", "1", "Again", "Text", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry deleted!"))
        .stdout(predicate::str::contains("Entry created! Got ID: 4"));
}

#[test]
fn test_invalid_input_does_not_end_session() {
    diary_cmd()
        .write_stdin(script(&["7", "2", "abc", "3", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice, please try again."))
        .stdout(predicate::str::contains(
            "Invalid input, please use a number.",
        ))
        .stdout(predicate::str::contains("Movie day"));
}

#[test]
fn test_keyword_search_is_case_insensitive() {
    let output = diary_cmd()
        .write_stdin(script(&["4", "1", "TRAINING", "1", "training", "0", "0"]))
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("--- SEARCH RESULTS ---").count(), 2);
    assert_eq!(stdout.matches("] Training (").count(), 2);
}

#[test]
fn test_statistics_table() {
    diary_cmd()
        .write_stdin(script(&["5", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("AUTHOR STATISTICS PAGE"))
        .stdout(predicate::str::contains(
            "| albert@ex.com                  | 1       |",
        ));
}

#[test]
fn test_logs_go_to_stderr() {
    diary_cmd()
        .arg("--log-level")
        .arg("debug")
        .write_stdin(script(&["0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("sample data loaded").not())
        .stderr(predicate::str::contains("sample data loaded"));
}

#[test]
fn test_config_file_disables_sample_data() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("diary.toml");
    fs::write(&config_path, "seed_sample_data = false\n").unwrap();

    diary_cmd()
        .arg("--config")
        .arg(&config_path)
        .write_stdin(script(&["3", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found!"));
}

#[test]
fn test_config_from_env() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("diary.toml");
    fs::write(&config_path, "date_input_format = \"%d.%m.%Y\"\n").unwrap();

    diary_cmd()
        .env("DIARY_CONFIG", &config_path)
        .write_stdin(script(&["4", "2", "2025-01-17", "0", "0"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid date: '2025-01-17'"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();

    diary_cmd()
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .write_stdin(script(&["0"]))
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Config file not found"));
}
