//! # ClockRS Main Entry Point
//!
//! File: cli/src/main.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This file serves as the main entry point for the ClockRS CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to appropriate command handlers
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each command (`countdown`, `stopwatch`, etc.) is defined as a variant in the `Commands` enum
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! Basic ClockRS usage:
//!
//! ```bash
//! # Get help
//! clockrs --help
//!
//! # Run a command with increased verbosity
//! clockrs -vv countdown -d 5m
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (countdown, stopwatch, etc.)
mod common; // Contains shared utilities (figlet, display, terminal, etc.)
mod core; // Core infrastructure (errors, config)

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "clockrs",
    about = "🦀 ClockRS ⏰: Terminal ASCII-Art Timers & Clocks",
    long_about = "Full-screen countdowns, stopwatches, and wall clocks rendered as large\n\
                  ASCII art from a FIGlet-style bitmap font. Press 'q' to quit a display.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "cd")]
    Countdown(commands::countdown::CountdownArgs),
    #[command(alias = "sw")]
    Stopwatch(commands::stopwatch::StopwatchArgs),
    #[command(aliases = ["wc", "clock"])]
    Wallclock(commands::wallclock::WallclockArgs),
    #[command(alias = "mx")]
    Matrix(commands::matrix::MatrixArgs),
}

fn main() -> anyhow::Result<()> {
    // Use anyhow::Result directly
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::Countdown(args) => commands::countdown::handle_countdown(args),
        Commands::Stopwatch(args) => commands::stopwatch::handle_stopwatch(args),
        Commands::Wallclock(args) => commands::wallclock::handle_wallclock(args),
        Commands::Matrix(args) => commands::matrix::handle_matrix(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn clockrs_cmd() -> Command {
        Command::cargo_bin("clockrs").expect("Failed to find clockrs binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        clockrs_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        clockrs_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
