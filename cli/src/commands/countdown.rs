//! # ClockRS Countdown Handler
//!
//! File: cli/src/commands/countdown.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module implements the `clockrs countdown` command: a full-screen
//! countdown timer rendered as large ASCII art, counting a parsed duration
//! down to zero (or, with `--countup`, up from zero toward the target).
//!
//! ## Architecture
//!
//! The implementation follows these steps:
//!
//! 1. Parse command-line arguments for the duration string, count-up flag,
//!    and optional title.
//! 2. Load configuration and resolve the font (configured path or bundled).
//! 3. Parse the duration string against the grammar in `common::time`
//!    (`25s`, `5m`, `1h`, `02:15PM`, ...). A parse failure is a typed error
//!    the caller reports; the parser never kills the process itself.
//! 4. Build a `Countdown` strategy and hand it to the shared `DisplayLoop`.
//! 5. Report completion or abort with a styled status line.
//!
//! ## Usage
//!
//! ```bash
//! # Count 25 seconds down to zero
//! clockrs countdown -d 25s
//!
//! # Count up toward five minutes, with a title below the timer
//! clockrs countdown -d 5m --countup -t "tea"
//!
//! # Count down to the next 2:15 PM
//! clockrs cd -d 02:15PM
//! ```
//!
//! Press `q` to abort the countdown early.
//!
use crate::{
    common::display::{modes::Countdown, DisplayLoop, DisplayOptions, LoopOutcome},
    common::figlet::Font,
    common::terminal::{self, input::TerminalKeys},
    common::time::parse_duration,
    common::ui::style,
    core::{config, error::Result},
};
use anyhow::Context;
use chrono::Local;
use clap::Parser;
use crossterm::style::Color;
use std::io::{self, Write};
use std::thread;
use tracing::info;

/// # Countdown Arguments (`CountdownArgs`)
///
/// Defines the command-line arguments accepted by the `clockrs countdown`
/// subcommand. Uses the `clap` crate for parsing and validation.
#[derive(Parser, Debug)]
#[command(about = "Start a full-screen ASCII-art countdown timer")]
pub struct CountdownArgs {
    /// Duration to count, e.g. "25s", "5m", "1h", or a time of day like
    /// "02:15PM" (targets the next occurrence).
    #[arg(short, long, required = true)]
    duration: String,

    /// Optional: count up from zero toward the target instead of down to zero.
    #[arg(short = 'u', long)]
    countup: bool,

    /// Optional: title rendered below the timer.
    #[arg(short, long)]
    title: Option<String>,
}

/// # Handle Countdown Command (`handle_countdown`)
///
/// The main handler function for the `clockrs countdown` command.
///
/// ## Workflow:
/// 1. Loads configuration and resolves the font. A font problem aborts the
///    command before anything is drawn.
/// 2. Parses the duration string relative to the current local time.
/// 3. Prints the styled intro line and waits one tick, matching the display
///    cadence.
/// 4. Runs the shared display loop with a `Countdown` strategy; the loop owns
///    the raw-mode keyboard guard for its duration.
/// 5. Clears the screen and prints the completion (target reached) or abort
///    (`q` pressed) status line.
///
/// ## Arguments
///
/// * `args`: The parsed `CountdownArgs` struct.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` after a completed or user-aborted run.
/// * `Err`: Configuration, font, or duration errors, reported by `main`.
pub fn handle_countdown(args: CountdownArgs) -> Result<()> {
    info!(
        "Handling countdown command (duration: '{}', count up: {}, title: {:?})",
        args.duration, args.countup, args.title
    );

    let cfg = config::load_config()?;
    let font = Font::from_config(&cfg.font)?;

    let parsed = parse_duration(&args.duration, Local::now().naive_local())
        .with_context(|| format!("Failed to parse duration '{}'", args.duration))?;
    let target_seconds = parsed.whole_seconds();
    info!(
        "Countdown target: {} seconds (absolute target: {})",
        target_seconds, parsed.is_absolute
    );

    // The intro names the title when given, the raw duration otherwise.
    let label = args.title.clone().unwrap_or_else(|| args.duration.clone());
    println!("{}", style::info(&format!("[*] Starting Countdown: {label}")));
    thread::sleep(cfg.display.tick_duration());

    let mut strategy = Countdown::new(target_seconds, args.countup);
    let outcome = {
        let mut display = DisplayLoop::new(
            io::stdout().lock(),
            TerminalKeys::new(),
            font,
            DisplayOptions {
                tick: cfg.display.tick_duration(),
                title: args.title,
                color: Color::Green,
            },
        );
        display.run(&mut strategy)?
        // Dropping the loop releases the raw-mode guard before we print below.
    };

    let mut stdout = io::stdout();
    terminal::clear(&mut stdout)?;
    stdout.flush()?;
    match outcome {
        LoopOutcome::Completed => println!("{}", style::success("\n[+] Countdown Complete!")),
        LoopOutcome::Aborted => println!("{}", style::error("\n[!] Countdown Aborted!")),
    }
    Ok(())
}
