//! # ClockRS Timer Modes
//!
//! File: cli/src/common/display/modes.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! The three `TickStrategy` implementations the display loop can drive:
//!
//! - **`Countdown`**: decreases toward zero (or, in count-up mode, increases
//!   from zero toward the target); reaching the boundary is the terminal
//!   condition.
//! - **`Stopwatch`**: increases without bound, supports pausing, only quits.
//! - **`WallClock`**: stateless per tick: recomputes the current time of
//!   day (optionally converted to a named IANA zone) instead of tracking
//!   elapsed state; only quits.
//!
//! Each strategy is a small state machine constructed once per invocation
//! from parsed CLI input, mutated once per tick by the display loop, and
//! discarded when the loop exits.
//!
use super::{TickOutcome, TickStrategy};
use crate::common::time::format_hms;
use chrono::{DateTime, Local, TimeZone, Utc};
use chrono_tz::Tz;

/// # Countdown (`Countdown`)
///
/// Counts `remaining` down from the target (or `elapsed` up toward it).
#[derive(Debug, Clone)]
pub struct Countdown {
    target: u64,
    remaining: u64,
    elapsed: u64,
    count_up: bool,
}

impl Countdown {
    pub fn new(target_seconds: u64, count_up: bool) -> Self {
        Self {
            target: target_seconds,
            remaining: target_seconds,
            elapsed: 0,
            count_up,
        }
    }

    /// Seconds left before the terminal condition. Never negative.
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    /// Seconds shown so far in count-up mode.
    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }
}

impl TickStrategy for Countdown {
    fn frame_value(&self) -> String {
        format_hms(if self.count_up {
            self.elapsed
        } else {
            self.remaining
        })
    }

    fn advance(&mut self) -> TickOutcome {
        if self.count_up {
            self.elapsed += 1;
            self.remaining = self.remaining.saturating_sub(1);
            if self.elapsed >= self.target {
                return TickOutcome::Finished;
            }
        } else {
            self.remaining = self.remaining.saturating_sub(1);
            if self.remaining == 0 {
                return TickOutcome::Finished;
            }
        }
        TickOutcome::Continue
    }

    fn is_finished(&self) -> bool {
        if self.count_up {
            self.elapsed >= self.target
        } else {
            self.remaining == 0
        }
    }
}

/// # Stopwatch (`Stopwatch`)
///
/// Counts up from zero. Never finishes on its own; pause is supported.
#[derive(Debug, Clone, Default)]
pub struct Stopwatch {
    elapsed: u64,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed(&self) -> u64 {
        self.elapsed
    }
}

impl TickStrategy for Stopwatch {
    fn frame_value(&self) -> String {
        format_hms(self.elapsed)
    }

    fn advance(&mut self) -> TickOutcome {
        self.elapsed += 1;
        TickOutcome::Continue
    }

    fn allows_pause(&self) -> bool {
        true
    }
}

/// # Wall Clock (`WallClock`)
///
/// Shows the current time of day, re-read from the system clock every tick
/// rather than tracked as elapsed state.
#[derive(Debug, Clone)]
pub struct WallClock {
    zone: Option<Tz>,
    use_24_hour: bool,
}

impl WallClock {
    /// `zone` of `None` means local time.
    pub fn new(zone: Option<Tz>, use_24_hour: bool) -> Self {
        Self { zone, use_24_hour }
    }
}

impl TickStrategy for WallClock {
    fn frame_value(&self) -> String {
        match self.zone {
            Some(tz) => format_clock(&Utc::now().with_timezone(&tz), self.use_24_hour),
            None => format_clock(&Local::now(), self.use_24_hour),
        }
    }

    fn advance(&mut self) -> TickOutcome {
        TickOutcome::Continue
    }
}

/// Formats a clock face: `%H:%M:%S` in 24-hour mode, `%I:%M:%S %p` otherwise.
fn format_clock<Z: TimeZone>(now: &DateTime<Z>, use_24_hour: bool) -> String
where
    Z::Offset: std::fmt::Display,
{
    let pattern = if use_24_hour {
        "%H:%M:%S"
    } else {
        "%I:%M:%S %p"
    };
    now.format(pattern).to_string()
}
