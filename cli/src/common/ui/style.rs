//! # ClockRS Message Styling
//!
//! File: cli/src/common/ui/style.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Role-based coloring for the one-line status messages commands print
//! before and after the full-screen display: `[*]` intros in cyan, `[+]`
//! completions in green, `[!]` aborts in red, and warnings in yellow. Uses
//! crossterm's `Stylize` so the escape codes come from the same crate as the
//! rest of the terminal layer.
//!
use crossterm::style::Stylize;

/// Cyan informational line, e.g. `[*] Starting Countdown: 5m`.
pub fn info(text: &str) -> String {
    format!("{}", text.cyan())
}

/// Green success line, e.g. `[+] Countdown Complete!`.
pub fn success(text: &str) -> String {
    format!("{}", text.green())
}

/// Yellow warning line, e.g. an unknown time zone falling back to local.
pub fn warning(text: &str) -> String {
    format!("{}", text.yellow())
}

/// Red error/abort line, e.g. `[!] Stopwatch Aborted!`.
pub fn error(text: &str) -> String {
    format!("{}", text.red())
}
