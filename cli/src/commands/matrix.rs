//! # ClockRS Matrix Rain Handler
//!
//! File: cli/src/commands/matrix.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module implements the `clockrs matrix` command: the classic falling
//! character-rain animation. Each frame advances a handful of random columns;
//! every advancing column draws a bright head character, re-draws the two
//! characters above it in normal and dim green, and erases a character
//! fifteen rows up to form the fading trail. A column that reaches the bottom
//! of the screen is cleared and starts over.
//!
//! Unlike the timer modes this is not a once-per-second display, so it drives
//! the terminal directly rather than going through the shared display loop;
//! but it shares the same polled keyboard seam (`q` or Ctrl-C stops it).
//!
//! ## Usage
//!
//! ```bash
//! # Default pacing (50 ms per frame)
//! clockrs matrix
//!
//! # Slow rain
//! clockrs matrix --sleep 120
//! ```
//!
use crate::{
    common::terminal::{self, input::Key, input::KeyPoller, input::TerminalKeys},
    common::ui::style,
    core::error::Result,
};
use anyhow::bail;
use clap::Parser;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use rand::Rng;
use std::collections::HashMap;
use std::io::{self, Write};
use std::thread;
use std::time::Duration;
use tracing::info;

/// Characters the rain is made of: half-width katakana plus Latin
/// alphanumerics and a few symbols.
const RAIN_CHARSET: &str = concat!(
    "ァアィイゥウェエォオカガキギクグケゲコゴサコゴサザシジスズセゼソゾタダチヂッツヅテデトドナニヌネノ",
    "ハバパヒビピフブプヘベペホボポマミムメモャヤュユョヨラリルレロヮワヰヱヲンヴヵヶヷヸヹヺ・ーヽヾ",
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789@#$%^&*()"
);

/// Rows a drop's tail extends before being erased.
const TRAIL_LENGTH: u16 = 15;

/// # Matrix Arguments (`MatrixArgs`)
///
/// Defines the command-line arguments accepted by the `clockrs matrix`
/// subcommand.
#[derive(Parser, Debug)]
#[command(about = "Display a Matrix rain animation in the terminal")]
pub struct MatrixArgs {
    /// Time in milliseconds to wait between updates.
    #[arg(short, long, default_value_t = 50.0)]
    sleep: f64,
}

/// # Handle Matrix Command (`handle_matrix`)
///
/// Validates the frame delay, hides the cursor, and runs the rain until the
/// quit key. The cursor and colors are restored before the closing status
/// line is printed.
///
/// ## Arguments
///
/// * `args`: The parsed `MatrixArgs` struct.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` after the user stops the animation; an error for
///   a negative `--sleep` value.
pub fn handle_matrix(args: MatrixArgs) -> Result<()> {
    info!("Handling matrix command (sleep: {} ms)", args.sleep);

    if !args.sleep.is_finite() || args.sleep < 0.0 {
        bail!("Sleep time must be positive.");
    }
    let frame_delay = Duration::from_secs_f64(args.sleep / 1000.0);

    let mut keys = TerminalKeys::new();
    let mut out = io::stdout().lock();
    execute!(out, Hide)?;
    let run_result = run_rain(&mut out, &mut keys, frame_delay);

    // Restore the cursor and colors even when a frame failed mid-run.
    execute!(out, Show, ResetColor)?;
    terminal::clear(&mut out)?;
    out.flush()?;
    drop(keys); // Release raw mode before printing the closing line.
    run_result?;

    println!("{}", style::error("\n[!] Matrix Animation Stopped!"));
    Ok(())
}

/// The animation loop: advance a batch of random columns, flush the frame,
/// sleep, poll for quit.
fn run_rain<W: Write, K: KeyPoller>(out: &mut W, keys: &mut K, frame_delay: Duration) -> Result<()> {
    let charset: Vec<char> = RAIN_CHARSET.chars().collect();
    let mut rng = rand::rng();
    // Current head row per column, racing down the screen.
    let mut columns: HashMap<u16, u16> = HashMap::new();

    terminal::clear(out)?;
    loop {
        // Geometry is re-read each frame so a resize changes the rain field.
        // Clamped to 1x1 so a bogus zero-size report cannot panic the RNG.
        let (cols, rows) = terminal::size();
        let (cols, rows) = (cols.max(1), rows.max(1));
        let drops_per_frame = (cols / 10).max(1);

        for _ in 0..drops_per_frame {
            let col = rng.random_range(0..cols);
            let glyph = charset[rng.random_range(0..charset.len())];

            let head = columns.entry(col).or_insert(0);
            if *head >= rows {
                // This column reached the bottom; wipe it and start over.
                for row in 0..rows {
                    queue!(out, MoveTo(col, row), Print(' '))?;
                }
                *head = 0;
            }
            *head += 1;
            let head = *head;

            // Bright head, normal and dim trail, and an eraser further up.
            queue!(
                out,
                MoveTo(col, head - 1),
                SetForegroundColor(Color::Green),
                SetAttribute(Attribute::Bold),
                Print(glyph),
                SetAttribute(Attribute::Reset)
            )?;
            if head > 1 {
                queue!(
                    out,
                    MoveTo(col, head - 2),
                    SetForegroundColor(Color::Green),
                    Print(glyph)
                )?;
            }
            if head > 2 {
                queue!(
                    out,
                    MoveTo(col, head - 3),
                    SetForegroundColor(Color::Green),
                    SetAttribute(Attribute::Dim),
                    Print(glyph),
                    SetAttribute(Attribute::Reset)
                )?;
            }
            if head > TRAIL_LENGTH {
                queue!(out, MoveTo(col, head - TRAIL_LENGTH - 1), Print(' '))?;
            }
        }

        queue!(out, MoveTo(0, 0))?;
        out.flush()?;
        thread::sleep(frame_delay);

        if keys.poll_key() == Some(Key::Quit) {
            return Ok(());
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    /// The sleep flag parses in short and long form with a 50 ms default.
    #[test]
    fn test_matrix_args_parsing() {
        let args = MatrixArgs::try_parse_from(["matrix"]).unwrap();
        assert_eq!(args.sleep, 50.0);

        let args = MatrixArgs::try_parse_from(["matrix", "-s", "120"]).unwrap();
        assert_eq!(args.sleep, 120.0);

        let args = MatrixArgs::try_parse_from(["matrix", "--sleep", "12.5"]).unwrap();
        assert_eq!(args.sleep, 12.5);
    }

    /// A negative delay is rejected before the terminal is touched.
    #[test]
    fn test_matrix_rejects_negative_sleep() {
        let result = handle_matrix(MatrixArgs { sleep: -1.0 });
        assert!(result.is_err());
    }

    /// The rain loop itself honors the quit key on the first poll, writing
    /// frames to a plain byte sink.
    #[test]
    fn test_rain_stops_on_quit() {
        struct QuitImmediately;
        impl KeyPoller for QuitImmediately {
            fn poll_key(&mut self) -> Option<Key> {
                Some(Key::Quit)
            }
        }

        let mut out = Vec::new();
        run_rain(&mut out, &mut QuitImmediately, Duration::ZERO).unwrap();
        // One frame was drawn before the poll: the clear sequence is present.
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("\u{1b}[2J"));
    }
}
