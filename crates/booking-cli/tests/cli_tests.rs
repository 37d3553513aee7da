//! Integration tests for the `bookcheck` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the check and windows
//! subcommands through the actual binary, including stdin piping, file
//! input, candidate scoping, and exit codes.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the bookings.json fixture.
fn bookings_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/bookings.json")
}

/// Helper: read the bookings.json fixture as a string.
fn bookings_json() -> String {
    std::fs::read_to_string(bookings_path()).expect("bookings.json fixture must exist")
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_clear_dates_succeeds() {
    // The gap between spot 7's stays fits 06-06..06-09.
    Command::cargo_bin("bookcheck")
        .unwrap()
        .args([
            "check",
            "-i",
            bookings_path(),
            "--start",
            "2024-06-06",
            "--end",
            "2024-06-09",
            "--spot",
            "7",
            "--today",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No conflicts"))
        .stdout(predicate::str::contains("3 nights"));
}

#[test]
fn check_conflict_prints_rejection_and_exits_one() {
    Command::cargo_bin("bookcheck")
        .unwrap()
        .args([
            "check",
            "-i",
            bookings_path(),
            "--start",
            "2024-06-03",
            "--end",
            "2024-06-08",
            "--spot",
            "7",
            "--today",
            "2024-01-01",
        ])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "already booked for the specified dates",
        ))
        .stdout(predicate::str::contains(
            "Start date conflicts with an existing booking",
        ))
        .stdout(predicate::str::contains("endDate").not());
}

#[test]
fn check_reads_bookings_from_stdin() {
    Command::cargo_bin("bookcheck")
        .unwrap()
        .args([
            "check",
            "--start",
            "2024-06-10",
            "--end",
            "2024-06-12",
            "--spot",
            "7",
            "--today",
            "2024-01-01",
        ])
        .write_stdin(bookings_json())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Start date conflicts"));
}

#[test]
fn check_past_start_is_gated_before_checking() {
    // As of 2024-07-01 the proposal is in the past; the conflict map never
    // appears because the gate short-circuits.
    Command::cargo_bin("bookcheck")
        .unwrap()
        .args([
            "check",
            "-i",
            bookings_path(),
            "--start",
            "2024-06-03",
            "--end",
            "2024-06-08",
            "--spot",
            "7",
            "--today",
            "2024-07-01",
        ])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("startDate cannot be in the past"))
        .stdout(predicate::str::contains("conflicts with an existing").not());
}

#[test]
fn check_end_not_after_start_is_rejected() {
    Command::cargo_bin("bookcheck")
        .unwrap()
        .args([
            "check",
            "-i",
            bookings_path(),
            "--start",
            "2024-06-06",
            "--end",
            "2024-06-06",
            "--today",
            "2024-01-01",
        ])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "endDate cannot be on or before startDate",
        ));
}

#[test]
fn check_exclude_ignores_the_edited_booking() {
    // Booking 1 occupies 06-01..06-05; editing it to 06-02..06-04 only
    // works because its own range is dropped from the candidates.
    Command::cargo_bin("bookcheck")
        .unwrap()
        .args([
            "check",
            "-i",
            bookings_path(),
            "--start",
            "2024-06-02",
            "--end",
            "2024-06-04",
            "--spot",
            "7",
            "--exclude",
            "1",
            "--today",
            "2024-01-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No conflicts"));
}

#[test]
fn check_user_scope_catches_cross_spot_overlap() {
    // User 3 already stays at spot 9 over 07-01..07-04.
    Command::cargo_bin("bookcheck")
        .unwrap()
        .args([
            "check",
            "-i",
            bookings_path(),
            "--start",
            "2024-07-02",
            "--end",
            "2024-07-06",
            "--user",
            "3",
            "--today",
            "2024-01-01",
        ])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Start date conflicts"));
}

#[test]
fn check_invalid_date_reports_the_flag() {
    Command::cargo_bin("bookcheck")
        .unwrap()
        .args([
            "check",
            "-i",
            bookings_path(),
            "--start",
            "not-a-date",
            "--end",
            "2024-06-09",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date for --start"));
}

#[test]
fn check_missing_input_file_fails() {
    Command::cargo_bin("bookcheck")
        .unwrap()
        .args([
            "check",
            "-i",
            "/no/such/file.json",
            "--start",
            "2024-06-06",
            "--end",
            "2024-06-09",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Windows subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn windows_lists_open_gaps_for_a_spot() {
    Command::cargo_bin("bookcheck")
        .unwrap()
        .args([
            "windows",
            "-i",
            bookings_path(),
            "--spot",
            "7",
            "--from",
            "2024-06-01",
            "--to",
            "2024-06-30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-06-06"))
        .stdout(predicate::str::contains("2024-06-09"))
        .stdout(predicate::str::contains("2024-06-16"))
        .stdout(predicate::str::contains("2024-06-30"));
}

#[test]
fn windows_min_nights_drops_short_gaps() {
    // The 3-night gap between the two stays disappears at --min-nights 5.
    Command::cargo_bin("bookcheck")
        .unwrap()
        .args([
            "windows",
            "-i",
            bookings_path(),
            "--spot",
            "7",
            "--from",
            "2024-06-01",
            "--to",
            "2024-06-30",
            "--min-nights",
            "5",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-06-06").not())
        .stdout(predicate::str::contains("2024-06-16"));
}

#[test]
fn windows_empty_calendar_is_one_window() {
    Command::cargo_bin("bookcheck")
        .unwrap()
        .args([
            "windows",
            "-i",
            bookings_path(),
            "--spot",
            "42",
            "--from",
            "2024-06-01",
            "--to",
            "2024-06-30",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"nights\": 29"));
}
