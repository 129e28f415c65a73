//! # ClockRS Command Modules
//!
//! File: cli/src/commands/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module aggregates all top-level commands that comprise the ClockRS CLI.
//! It serves as the central point for importing and re-exporting command modules
//! to make them accessible to the main application entry point (`main.rs`).
//!
//! ## Architecture
//!
//! The commands follow a flat structure:
//! - Each command lives in its own module with an arguments struct and a handler
//! - All modules are made public for access from `main.rs`
//!
//! ## Commands
//!
//! - `countdown`: Full-screen countdown timer (optionally counting up)
//! - `stopwatch`: Full-screen stopwatch with pause/resume
//! - `wallclock`: Full-screen live wall clock with optional time zone
//! - `matrix`: Matrix-style rain animation
//!
//! Each command defines its own arguments structure and handler function
//! to process those arguments and implement the command's functionality.
//!

/// Countdown timer command. Counts a parsed duration down to zero (or up to it).
pub mod countdown;
/// Matrix rain animation command. Runs until the quit key.
pub mod matrix;
/// Stopwatch command. Counts up from zero with pause/resume support.
pub mod stopwatch;
/// Wall clock command. Displays the current time of day, updated every tick.
pub mod wallclock;
