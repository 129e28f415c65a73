//! # ClockRS Common Utilities (`common`)
//!
//! File: cli/src/common/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module serves as the root and organizational entry point for all shared,
//! common utility modules used throughout the ClockRS CLI application. It
//! aggregates the rendering engine (bitmap fonts, ASCII art), the display loop
//! shared by every timer mode, terminal device access, time parsing/formatting,
//! and user-interface styling.
//!
//! By centralizing these utilities under the `common::` namespace, ClockRS aims
//! to promote code reuse, maintain consistency, and provide clear separation
//! between command-specific logic (`commands::`) and core infrastructure
//! (`core::`).
//!
//! ## Architecture
//!
//! The `common` module itself primarily consists of declarations (`pub mod`) for
//! its various submodules. Each submodule encapsulates a specific domain:
//!
//! - **`figlet`**: The bitmap-font loader and the pure text-to-ASCII-art renderer.
//! - **`display`**: The render/poll display loop and the per-mode tick strategies
//!   (countdown, stopwatch, wall clock).
//! - **`terminal`**: Terminal geometry, screen clearing, and polled non-blocking
//!   keyboard input behind the `KeyPoller` seam.
//! - **`time`**: Duration/time-of-day string parsing and `HH:MM:SS` formatting.
//! - **`ui`**: Role-based styling for user-facing status lines.
//!
//! ## Usage
//!
//! Command handlers import specific functionality directly from the required
//! submodule within `common`:
//!
//! ```rust
//! use crate::common::display::{modes::Countdown, DisplayLoop, DisplayOptions};
//! use crate::common::figlet::Font;
//! use crate::common::terminal::input::TerminalKeys;
//! use crate::common::time::parse_duration;
//! use crate::common::ui::style;
//! ```
//!
//! This modular approach keeps the utility codebase organized and maintainable.
//!

/// The display loop shared by all timer modes, plus the per-mode strategies.
pub mod display;
/// Bitmap-font loading and ASCII-art rendering.
pub mod figlet;
/// Terminal geometry, screen control, and polled keyboard input.
pub mod terminal;
/// Duration parsing and elapsed-time formatting.
pub mod time;
/// Terminal UI styling helpers.
pub mod ui;
