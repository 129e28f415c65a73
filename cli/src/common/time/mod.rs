//! # ClockRS Time Utilities (`common::time`)
//!
//! File: cli/src/common/time/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module converts human-supplied duration and time-of-day strings into
//! elapsed-seconds targets for the countdown command, and formats elapsed
//! second counts as `HH:MM:SS` for all display modes.
//!
//! ## Architecture
//!
//! `parse_duration` tries a small grammar in a fixed order:
//!
//! 1. **Absolute time of day**: `H:MM` or `H:MM(AM|PM)`, 12-hour-with-meridiem
//!    format first, 24-hour fallback. A target earlier than `now` rolls
//!    forward one day (the "next occurrence" policy).
//! 2. **Minutes**: trailing `m`, numeric prefix parsed as floating-point
//!    minutes, multiplied by 60.
//! 3. **Hours**: trailing `h`, multiplied by 3600.
//! 4. **Seconds**: trailing `s`, or a bare number, used as-is.
//!
//! Input matching none of these returns `ClockrsError::InvalidDuration`.
//! The parser never terminates the process; the caller decides what a parse
//! failure means for the invocation.
//!
//! ## Examples
//!
//! ```rust
//! use crate::common::time::{format_hms, parse_duration};
//! use chrono::Local;
//!
//! let parsed = parse_duration("5m", Local::now().naive_local())?;
//! assert_eq!(parsed.seconds, 300.0);
//! assert!(!parsed.is_absolute);
//!
//! assert_eq!(format_hms(3725), "01:02:05");
//! ```
//!
use crate::core::error::{ClockrsError, Result};
use chrono::{Duration, NaiveDateTime, NaiveTime};

/// # Parsed Duration (`ParsedDuration`)
///
/// The result of parsing a duration or time-of-day string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedDuration {
    /// Target elapsed seconds. Fractional for sub-second precision when the
    /// input was an absolute time of day.
    pub seconds: f64,
    /// True when the input named a clock time (`H:MM[AM|PM]`) rather than a
    /// relative span.
    pub is_absolute: bool,
}

impl ParsedDuration {
    /// The target rounded to whole seconds, floored at zero. This is what the
    /// tick-based countdown actually counts.
    pub fn whole_seconds(&self) -> u64 {
        self.seconds.round().max(0.0) as u64
    }
}

/// # Parse Duration (`parse_duration`)
///
/// Converts a human-supplied duration or time-of-day string into a target
/// elapsed-seconds value, relative to `now`.
///
/// ## Arguments
///
/// * `input`: The raw string, e.g. `"25s"`, `"5m"`, `"1.5h"`, `"02:15PM"`, `"40"`.
/// * `now`: The reference instant for absolute time-of-day targets. Passed in
///   (rather than read from the system clock) so callers and tests control it.
///
/// ## Returns
///
/// * `Ok(ParsedDuration)` on any grammar match.
/// * `Err` wrapping `ClockrsError::InvalidDuration` otherwise.
pub fn parse_duration(input: &str, now: NaiveDateTime) -> Result<ParsedDuration> {
    let trimmed = input.trim();

    // Absolute time of day is tried first: a meridiem suffix also ends in
    // 'm'/'M' and must not be mistaken for a minutes span.
    if trimmed.contains(':') {
        if let Some(time_of_day) = parse_time_of_day(trimmed) {
            let mut target = now.date().and_time(time_of_day);
            if target < now {
                // Already past today; roll to the next occurrence.
                target += Duration::days(1);
            }
            let delta = target - now;
            return Ok(ParsedDuration {
                seconds: delta.num_milliseconds() as f64 / 1000.0,
                is_absolute: true,
            });
        }
        return Err(ClockrsError::InvalidDuration {
            input: input.to_string(),
        }
        .into());
    }

    let lower = trimmed.to_ascii_lowercase();
    let relative = if let Some(prefix) = lower.strip_suffix('m') {
        parse_float(prefix).map(|minutes| minutes * 60.0)
    } else if let Some(prefix) = lower.strip_suffix('h') {
        parse_float(prefix).map(|hours| hours * 3600.0)
    } else if let Some(prefix) = lower.strip_suffix('s') {
        parse_float(prefix)
    } else {
        parse_float(&lower)
    };

    match relative {
        Some(seconds) => Ok(ParsedDuration {
            seconds,
            is_absolute: false,
        }),
        None => Err(ClockrsError::InvalidDuration {
            input: input.to_string(),
        }
        .into()),
    }
}

/// Parses `H:MM` / `H:MM(AM|PM)`: the 12-hour-with-meridiem format first,
/// then the 24-hour fallback.
fn parse_time_of_day(s: &str) -> Option<NaiveTime> {
    let upper = s.trim().to_ascii_uppercase();
    NaiveTime::parse_from_str(&upper, "%I:%M%p")
        .or_else(|_| NaiveTime::parse_from_str(&upper, "%H:%M"))
        .ok()
}

fn parse_float(s: &str) -> Option<f64> {
    let value: f64 = s.trim().parse().ok()?;
    value.is_finite().then_some(value)
}

/// # Format HH:MM:SS (`format_hms`)
///
/// Formats a whole-second count as zero-padded `HH:MM:SS`. Hours run past 99
/// unclamped for very long stopwatch sessions.
pub fn format_hms(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}
