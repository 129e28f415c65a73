//! # ClockRS UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! Terminal user-interface helpers shared by the command handlers. Currently
//! this is the `style` submodule: consistent coloring for the status lines
//! the commands print around the full-screen display (intro, completion,
//! abort, warnings).
//!
//! ## Architecture
//!
//! - **`style`**: Role-based message styling (`info`, `success`, `warning`,
//!   `error`). Commands never hand-roll escape codes; they pick a role and
//!   print the returned string.
//!

/// Role-based message styling for user-facing status lines.
pub mod style;
