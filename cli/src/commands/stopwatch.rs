//! # ClockRS Stopwatch Handler
//!
//! File: cli/src/commands/stopwatch.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module implements the `clockrs stopwatch` command: a full-screen
//! elapsed-time counter rendered as large ASCII art. The stopwatch has no
//! terminal condition of its own (it runs until the quit key) and it is the
//! one mode that supports pausing.
//!
//! ## Usage
//!
//! ```bash
//! # Plain stopwatch
//! clockrs stopwatch
//!
//! # With a title below the counter
//! clockrs sw -t "standup"
//! ```
//!
//! Press `p` to pause/resume (the display freezes while paused) and `q` to
//! stop.
//!
use crate::{
    common::display::{modes::Stopwatch, DisplayLoop, DisplayOptions, LoopOutcome},
    common::figlet::Font,
    common::terminal::{self, input::TerminalKeys},
    common::ui::style,
    core::{config, error::Result},
};
use clap::Parser;
use crossterm::style::Color;
use std::io::{self, Write};
use std::thread;
use tracing::info;

/// # Stopwatch Arguments (`StopwatchArgs`)
///
/// Defines the command-line arguments accepted by the `clockrs stopwatch`
/// subcommand.
#[derive(Parser, Debug)]
#[command(about = "Start a full-screen ASCII-art stopwatch")]
pub struct StopwatchArgs {
    /// Optional: title rendered below the stopwatch.
    #[arg(short, long)]
    title: Option<String>,
}

/// # Handle Stopwatch Command (`handle_stopwatch`)
///
/// Loads configuration and font, prints the intro line, then runs the shared
/// display loop with a `Stopwatch` strategy until the user quits. The
/// stopwatch only ever ends in an abort, which is reported as such.
///
/// ## Arguments
///
/// * `args`: The parsed `StopwatchArgs` struct.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` after the user stops the watch; configuration or
///   font errors otherwise.
pub fn handle_stopwatch(args: StopwatchArgs) -> Result<()> {
    info!("Handling stopwatch command (title: {:?})", args.title);

    let cfg = config::load_config()?;
    let font = Font::from_config(&cfg.font)?;

    let label = args.title.clone().unwrap_or_else(|| "Timer".to_string());
    println!("{}", style::info(&format!("[*] Starting Stopwatch: {label}")));
    thread::sleep(cfg.display.tick_duration());

    let mut strategy = Stopwatch::new();
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
    };

    let mut stdout = io::stdout();
    terminal::clear(&mut stdout)?;
    stdout.flush()?;
    // A stopwatch has no completion condition; quitting is the only exit.
    debug_assert_eq!(outcome, LoopOutcome::Aborted);
    println!("{}", style::error("\n[!] Stopwatch Aborted!"));
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    /// The title flag is parsed in both short and long form.
    #[test]
    fn test_stopwatch_args_parsing() {
        let args = StopwatchArgs::try_parse_from(["stopwatch", "-t", "standup"]).unwrap();
        assert_eq!(args.title.as_deref(), Some("standup"));

        let args = StopwatchArgs::try_parse_from(["stopwatch", "--title", "run"]).unwrap();
        assert_eq!(args.title.as_deref(), Some("run"));
    }

    /// No arguments is a valid invocation.
    #[test]
    fn test_stopwatch_args_default() {
        let args = StopwatchArgs::try_parse_from(["stopwatch"]).unwrap();
        assert_eq!(args.title, None);
    }
}
