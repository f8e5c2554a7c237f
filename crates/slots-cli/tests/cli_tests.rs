//! Integration tests for the `slots` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the generate,
//! resolve and check subcommands through the actual binary, including stdin
//! input, JSON output and error handling.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the shop.json fixture.
fn shop_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/shop.json")
}

/// Helper: path to the invalid.json fixture.
fn invalid_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/invalid.json")
}

fn slots() -> Command {
    Command::cargo_bin("slots").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Generate subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn generate_prints_one_time_per_line() {
    slots()
        .args(["generate", "--open", "09:00", "--close", "11:00"])
        .assert()
        .success()
        .stdout("09:00\n09:30\n10:00\n10:30\n");
}

#[test]
fn generate_with_custom_step() {
    slots()
        .args(["generate", "--open", "09:00", "--close", "10:00", "--step", "20"])
        .assert()
        .success()
        .stdout("09:00\n09:20\n09:40\n");
}

#[test]
fn generate_closed_window_prints_nothing() {
    slots()
        .args(["generate", "--open", "18:00", "--close", "09:00"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn generate_rejects_zero_step() {
    slots()
        .args(["generate", "--open", "09:00", "--close", "18:00", "--step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --step"));
}

#[test]
fn generate_rejects_step_longer_than_a_day() {
    slots()
        .args(["generate", "--open", "09:00", "--close", "18:00", "--step", "4294967295"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --step"));
}

#[test]
fn generate_rejects_malformed_time() {
    slots()
        .args(["generate", "--open", "nine", "--close", "18:00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --open"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Resolve subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn resolve_skips_booked_times() {
    let output = slots()
        .args([
            "resolve", "-i", shop_json_path(), "--barber", "b1", "--date", "2026-03-16", "--service", "cut",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).unwrap();
    let times: Vec<&str> = stdout.lines().collect();

    assert_eq!(times.len(), 16);
    assert!(!times.contains(&"10:00"));
    assert!(!times.contains(&"11:00"));
    assert!(times.contains(&"15:00"), "cancelled booking frees its slot");
}

#[test]
fn resolve_json_output_for_longer_service() {
    let output = slots()
        .args([
            "resolve", "-i", shop_json_path(), "--barber", "b1", "--date", "2026-03-16", "--service", "full", "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let times: Vec<&str> = value["availableTimes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();

    for gone in ["09:30", "10:00", "10:30", "11:00", "17:30"] {
        assert!(!times.contains(&gone), "{} should not be bookable", gone);
    }
    assert!(times.contains(&"11:30"));
    assert_eq!(times.last(), Some(&"17:00"));
}

#[test]
fn resolve_reads_dataset_from_stdin() {
    let dataset = std::fs::read_to_string(shop_json_path()).unwrap();

    slots()
        .args(["resolve", "--barber", "b2", "--date", "2026-03-16", "--service", "cut"])
        .write_stdin(dataset)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("12:00\n"))
        .stdout(predicate::str::ends_with("19:30\n"));
}

#[test]
fn resolve_closed_day_explains_on_stderr() {
    slots()
        .args([
            "resolve", "-i", shop_json_path(), "--barber", "b1", "--date", "2026-03-17", "--service", "cut",
        ])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("does not work on Tuesday"));
}

#[test]
fn resolve_day_off_explains_on_stderr() {
    slots()
        .args([
            "resolve", "-i", shop_json_path(), "--barber", "b1", "--date", "2026-03-18", "--service", "cut",
        ])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("day off (dentist)"));
}

#[test]
fn resolve_unknown_service_fails() {
    slots()
        .args([
            "resolve", "-i", shop_json_path(), "--barber", "b1", "--date", "2026-03-16", "--service", "perm",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown service: perm"));
}

#[test]
fn resolve_malformed_date_fails() {
    slots()
        .args([
            "resolve", "-i", shop_json_path(), "--barber", "b1", "--date", "16/03/2026", "--service", "cut",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --date"));
}

#[test]
fn resolve_missing_file_fails() {
    slots()
        .args([
            "resolve", "-i", "/nonexistent/shop.json", "--barber", "b1", "--date", "2026-03-16", "--service", "cut",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_prints_summary() {
    slots()
        .args(["check", "-i", shop_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Barbers:       2"))
        .stdout(predicate::str::contains("Appointments:  3 (2 active)"));
}

#[test]
fn check_rejects_invalid_dataset() {
    slots()
        .args(["check", "-i", invalid_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown barber 'ghost'"));
}
