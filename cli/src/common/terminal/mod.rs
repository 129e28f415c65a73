//! # ClockRS Terminal Utilities (`common::terminal`)
//!
//! File: cli/src/common/terminal/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module wraps the terminal device concerns the display loop relies on:
//! querying the current window geometry (re-read every frame so a mid-run
//! resize is respected), clearing/redrawing the screen, and, in the `input`
//! submodule, polled non-blocking keyboard input.
//!
//! ## Architecture
//!
//! All terminal interaction goes through `crossterm`. Geometry queries never
//! fail from the caller's perspective: when the size cannot be determined
//! (e.g. output is not a TTY), a conventional 80×24 fallback is used so
//! rendering stays best-effort rather than erroring out.
//!
use crate::core::error::Result;
use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{self, Clear, ClearType},
};
use std::io::Write;

/// Polled, non-blocking keyboard input (`Key`, `KeyPoller`, `TerminalKeys`).
pub mod input;

/// Width used when the terminal size cannot be queried.
pub const FALLBACK_COLS: u16 = 80;
/// Height used when the terminal size cannot be queried.
pub const FALLBACK_ROWS: u16 = 24;

/// # Terminal Size (`size`)
///
/// Returns the current terminal `(columns, rows)`, falling back to 80×24 when
/// the query fails. Called fresh each frame by the display loop.
pub fn size() -> (u16, u16) {
    terminal::size().unwrap_or((FALLBACK_COLS, FALLBACK_ROWS))
}

/// # Clear Screen (`clear`)
///
/// Queues a full-screen clear plus a cursor move to the origin on `out`.
/// The caller flushes when the frame is complete.
pub fn clear<W: Write>(out: &mut W) -> Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    /// Size never fails; with or without a TTY it yields a usable geometry.
    #[test]
    fn test_size_is_always_usable() {
        let (cols, rows) = size();
        assert!(cols > 0);
        assert!(rows > 0);
    }

    /// Clearing queues the ANSI clear + home sequence.
    #[test]
    fn test_clear_emits_ansi_sequence() {
        let mut out = Vec::new();
        clear(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}[2J"), "expected clear-screen sequence");
        assert!(text.contains("\u{1b}[1;1H"), "expected cursor-home sequence");
    }
}
