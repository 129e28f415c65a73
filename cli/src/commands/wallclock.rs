//! # ClockRS Wall Clock Handler
//!
//! File: cli/src/commands/wallclock.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module implements the `clockrs wallclock` command: a full-screen live
//! clock rendered as large ASCII art. Unlike the countdown and stopwatch, the
//! wall clock tracks no elapsed state: it re-reads the system clock every
//! tick, optionally converted to a named IANA time zone.
//!
//! ## Architecture
//!
//! Time zone resolution happens once, up front: `"Local"` (the default, in
//! any case) means the system's local time; any other value is looked up in
//! the IANA database. An unknown name produces a styled warning and falls
//! back to local time rather than failing the command.
//!
//! ## Usage
//!
//! ```bash
//! # Local time, 12-hour face
//! clockrs wallclock
//!
//! # Amman time on a 24-hour face, with a title
//! clockrs wc -z "Asia/Amman" --24hour -t "amman"
//! ```
//!
//! Press `q` to close the clock.
//!
use crate::{
    common::display::{modes::WallClock, DisplayLoop, DisplayOptions, LoopOutcome},
    common::figlet::Font,
    common::terminal::{self, input::TerminalKeys},
    common::ui::style,
    core::{config, error::Result},
};
use chrono_tz::Tz;
use clap::Parser;
use crossterm::style::Color;
use std::io::{self, Write};
use std::thread;
use tracing::{info, warn};

/// # Wall Clock Arguments (`WallclockArgs`)
///
/// Defines the command-line arguments accepted by the `clockrs wallclock`
/// subcommand.
#[derive(Parser, Debug)]
#[command(about = "Display a full-screen live ASCII-art wall clock")]
pub struct WallclockArgs {
    /// Optional: title rendered below the clock.
    #[arg(short, long)]
    title: Option<String>,

    /// Time zone to display, e.g. "UTC", "Asia/Amman", or "Local".
    #[arg(short = 'z', long, default_value = "Local")]
    timezone: String,

    /// Use a 24-hour clock face instead of 12-hour with AM/PM.
    #[arg(long = "24hour")]
    use_24_hour: bool,
}

/// # Handle Wall Clock Command (`handle_wallclock`)
///
/// Resolves the requested time zone, then runs the shared display loop with a
/// `WallClock` strategy until the user quits.
///
/// ## Arguments
///
/// * `args`: The parsed `WallclockArgs` struct.
///
/// ## Returns
///
/// * `Result<()>`: `Ok(())` after the user closes the clock; configuration or
///   font errors otherwise. An unknown time zone is not an error; it warns
///   and falls back to local time.
pub fn handle_wallclock(args: WallclockArgs) -> Result<()> {
    info!(
        "Handling wallclock command (timezone: '{}', 24-hour: {}, title: {:?})",
        args.timezone, args.use_24_hour, args.title
    );

    let cfg = config::load_config()?;
    let font = Font::from_config(&cfg.font)?;

    let zone = resolve_zone(&args.timezone);

    let label = args
        .title
        .clone()
        .unwrap_or_else(|| "Current Time".to_string());
    println!("{}", style::info(&format!("[*] Starting Wall Clock: {label}")));
    thread::sleep(cfg.display.tick_duration());

    let mut strategy = WallClock::new(zone, args.use_24_hour);
    let outcome = {
        let mut display = DisplayLoop::new(
            io::stdout().lock(),
            TerminalKeys::new(),
            font,
            DisplayOptions {
                tick: cfg.display.tick_duration(),
                title: args.title,
                color: Color::Cyan,
            },
        );
        display.run(&mut strategy)?
    };

    let mut stdout = io::stdout();
    terminal::clear(&mut stdout)?;
    stdout.flush()?;
    // The clock has no completion condition; quitting is the only exit.
    debug_assert_eq!(outcome, LoopOutcome::Aborted);
    println!("{}", style::error("\n[!] Clock Display Aborted!"));
    Ok(())
}

/// Resolves a `--timezone` value: `"Local"` (case-insensitive) or empty means
/// local time; anything else is an IANA lookup with a warned fallback.
fn resolve_zone(name: &str) -> Option<Tz> {
    let trimmed = name.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
        return None;
    }
    match trimmed.parse::<Tz>() {
        Ok(tz) => Some(tz),
        Err(_) => {
            warn!("Invalid timezone '{trimmed}', defaulting to local.");
            println!(
                "{}",
                style::warning(&format!(
                    "[!] Invalid timezone: {trimmed}, defaulting to local."
                ))
            );
            None
        }
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    /// Parsing with every flag present.
    #[test]
    fn test_wallclock_args_parsing() {
        let args = WallclockArgs::try_parse_from([
            "wallclock",
            "-z",
            "Asia/Amman",
            "--24hour",
            "-t",
            "amman",
        ])
        .unwrap();
        assert_eq!(args.timezone, "Asia/Amman");
        assert!(args.use_24_hour);
        assert_eq!(args.title.as_deref(), Some("amman"));
    }

    /// Defaults: local zone, 12-hour face, no title.
    #[test]
    fn test_wallclock_args_defaults() {
        let args = WallclockArgs::try_parse_from(["wallclock"]).unwrap();
        assert_eq!(args.timezone, "Local");
        assert!(!args.use_24_hour);
        assert_eq!(args.title, None);
    }

    /// Zone resolution: local spellings, real zones, and the warned fallback.
    #[test]
    fn test_resolve_zone() {
        assert_eq!(resolve_zone("Local"), None);
        assert_eq!(resolve_zone("local"), None);
        assert_eq!(resolve_zone(""), None);
        assert_eq!(resolve_zone("UTC"), Some(chrono_tz::UTC));
        assert_eq!(resolve_zone("Asia/Amman"), Some(chrono_tz::Asia::Amman));
        assert_eq!(resolve_zone("Mars/Olympus"), None);
    }
}
