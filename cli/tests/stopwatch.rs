//! # ClockRS Stopwatch Integration Tests
//!
//! File: cli/tests/stopwatch.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! ## Overview
//!
//! Binary-level tests for `clockrs stopwatch`. The stopwatch has no terminal
//! condition, meaning a headless test could never let it run; these tests
//! stick to the argument surface.
//!
mod common;

use common::clockrs_cmd;
use predicates::prelude::*;

/// Help describes the command and its pause control.
#[test]
fn test_stopwatch_help() {
    clockrs_cmd()
        .args(["stopwatch", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stopwatch"))
        .stdout(predicate::str::contains("--title"));
}

/// Unknown flags are rejected.
#[test]
fn test_stopwatch_rejects_unknown_flag() {
    clockrs_cmd()
        .args(["stopwatch", "--laps"])
        .assert()
        .failure();
}

/// A title value is accepted syntactically (reported via help exit path would
/// hang; `--help` after the flag proves parsing).
#[test]
fn test_stopwatch_title_parses() {
    clockrs_cmd()
        .args(["stopwatch", "-t", "standup", "--help"])
        .assert()
        .success();
}
