//! # ClockRS Display Loop (`common::display`)
//!
//! File: cli/src/common/display/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module implements the render/poll cycle shared by every timer mode:
//! the single place that owns terminal geometry, frame cadence, pause state,
//! and keyboard handling. The countdown, stopwatch, and wall-clock commands
//! differ only in the small `TickStrategy` they plug into this loop: the
//! "what time value to show next" logic.
//!
//! ## Architecture
//!
//! The loop is a three-state machine: `Running`, `Paused` (only for
//! strategies that allow it), and terminated, expressed as the function
//! returning a `LoopOutcome`. Each tick:
//!
//! 1. If paused, the previous frame value is reused (frozen display);
//!    otherwise the strategy supplies a fresh one.
//! 2. The value is rendered through the ASCII renderer and drawn centered:
//!    terminal geometry is re-queried every frame so a mid-run resize is
//!    respected, each row gets `(width - len)/2` leading spaces (floored,
//!    never negative), and the block is pushed down by `(height - 1)/2`
//!    blank lines. The optional title renders below the block in a distinct
//!    color.
//! 3. One blocking sleep for the tick period, the loop's only suspension
//!    point.
//! 4. Unless paused, the strategy advances; a `Finished` outcome ends the
//!    loop as `Completed`.
//! 5. One non-blocking key poll: quit ends the loop as `Aborted`, pause
//!    toggles the frozen state when the strategy supports it. Input latency
//!    is therefore bounded by the tick period.
//!
//! The loop writes to any `io::Write` sink and reads keys through the
//! `KeyPoller` trait, so tests drive it headless with a byte buffer, a
//! scripted key source, and a zero tick period.
//!
use crate::common::figlet::{render, Font};
use crate::common::terminal::{self, input::Key, input::KeyPoller};
use crate::core::error::Result;
use crossterm::{
    queue,
    style::{Color, ResetColor, SetForegroundColor},
};
use std::{io::Write, thread, time::Duration};

/// Per-mode tick strategies (countdown, stopwatch, wall clock).
pub mod modes;

/// Color the title block is rendered in, for every mode.
const TITLE_COLOR: Color = Color::Yellow;

/// What a strategy reports after advancing one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Keep looping.
    Continue,
    /// Terminal condition reached; the loop ends as `Completed`.
    Finished,
}

/// How a display loop run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopOutcome {
    /// The strategy reached its terminal condition (countdown hit zero).
    Completed,
    /// The user pressed the quit key.
    Aborted,
}

/// # Tick Strategy (`TickStrategy`)
///
/// The per-mode capability the display loop is parameterized by.
pub trait TickStrategy {
    /// The string to display for the current tick (e.g. `"00:04:59"`).
    fn frame_value(&self) -> String;

    /// Advances one tick worth of state. Called once per tick while running
    /// (skipped while paused).
    fn advance(&mut self) -> TickOutcome;

    /// Whether the pause key has any effect for this mode.
    fn allows_pause(&self) -> bool {
        false
    }

    /// Whether the terminal condition already holds before any tick runs
    /// (e.g. a zero-length countdown).
    fn is_finished(&self) -> bool {
        false
    }
}

/// Display options every mode shares.
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    /// Tick period; one real second in production, zero in tests.
    pub tick: Duration,
    /// Optional title rendered below the time block.
    pub title: Option<String>,
    /// Foreground color of the time block.
    pub color: Color,
}

/// # Display Loop (`DisplayLoop`)
///
/// The shared render/poll cycle. Owns the output sink and the key poller for
/// the duration of one run; the strategy is borrowed so callers can inspect
/// its final state afterwards.
pub struct DisplayLoop<W: Write, K: KeyPoller> {
    out: W,
    keys: K,
    font: Font,
    opts: DisplayOptions,
}

impl<W: Write, K: KeyPoller> DisplayLoop<W, K> {
    pub fn new(out: W, keys: K, font: Font, opts: DisplayOptions) -> Self {
        Self {
            out,
            keys,
            font,
            opts,
        }
    }

    /// # Run (`run`)
    ///
    /// Drives the loop until the strategy finishes or the user quits.
    ///
    /// ## Arguments
    ///
    /// * `strategy`: The mode's tick logic, mutated once per running tick.
    ///
    /// ## Returns
    ///
    /// * `Ok(LoopOutcome)` - how the run ended. Rendering errors propagate;
    ///   they are not specially recovered (the next natural tick would retry
    ///   anyway).
    pub fn run<S: TickStrategy>(&mut self, strategy: &mut S) -> Result<LoopOutcome> {
        let mut paused = false;
        let mut frozen = String::new();

        loop {
            if strategy.is_finished() {
                return Ok(LoopOutcome::Completed);
            }

            let value = if paused {
                frozen.clone()
            } else {
                let fresh = strategy.frame_value();
                frozen = fresh.clone();
                fresh
            };
            self.draw_frame(&value)?;

            thread::sleep(self.opts.tick);

            if !paused && strategy.advance() == TickOutcome::Finished {
                return Ok(LoopOutcome::Completed);
            }

            match self.keys.poll_key() {
                Some(Key::Quit) => return Ok(LoopOutcome::Aborted),
                Some(Key::Pause) if strategy.allows_pause() => paused = !paused,
                _ => {}
            }
        }
    }

    /// Draws one full frame: clear, vertical padding, centered time block,
    /// optional centered title block.
    fn draw_frame(&mut self, value: &str) -> Result<()> {
        let (width, height) = terminal::size();
        terminal::clear(&mut self.out)?;

        for _ in 0..top_padding(height) {
            write!(self.out, "\r\n")?;
        }

        let block = render(value, &self.font);
        queue!(self.out, SetForegroundColor(self.opts.color))?;
        for row in block.lines() {
            write!(self.out, "{}{row}\r\n", " ".repeat(left_padding(width, row)))?;
        }
        queue!(self.out, ResetColor)?;

        if let Some(title) = self.opts.title.clone() {
            write!(self.out, "\r\n")?;
            let title_block = render(&title, &self.font);
            queue!(self.out, SetForegroundColor(TITLE_COLOR))?;
            for row in title_block.lines() {
                write!(self.out, "{}{row}\r\n", " ".repeat(left_padding(width, row)))?;
            }
            queue!(self.out, ResetColor)?;
        }

        self.out.flush()?;
        Ok(())
    }
}

/// Leading spaces that center one row: `(width - len)/2`, floored, never
/// negative.
fn left_padding(width: u16, row: &str) -> usize {
    (width as usize).saturating_sub(row.chars().count()) / 2
}

/// Blank lines above the block: `(height - 1)/2`.
fn top_padding(height: u16) -> usize {
    (height.saturating_sub(1) / 2) as usize
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::modes::{Countdown, Stopwatch};
    use super::*;

    /// Scripted key source: one entry consumed per tick, then silence.
    /// Tracks how many ticks polled it.
    struct ScriptedKeys {
        script: Vec<Option<Key>>,
        polls: usize,
    }

    impl ScriptedKeys {
        fn of(script: Vec<Option<Key>>) -> Self {
            Self { script, polls: 0 }
        }
    }

    impl KeyPoller for ScriptedKeys {
        fn poll_key(&mut self) -> Option<Key> {
            self.polls += 1;
            if self.script.is_empty() {
                None
            } else {
                self.script.remove(0)
            }
        }
    }

    fn test_font() -> Font {
        // A minimal but complete font: 1-row glyphs for all 95 codepoints,
        // each row carrying the glyph's codepoint, e.g. '7' renders as "<7>".
        let mut src = String::from("flf2a$ 1 1 8 0\n");
        for code in 32u8..=126 {
            src.push_str(&format!("<{}>@\n", code as char));
        }
        Font::parse(&src).unwrap()
    }

    fn test_options() -> DisplayOptions {
        DisplayOptions {
            tick: Duration::ZERO,
            title: None,
            color: Color::Green,
        }
    }

    fn frames_drawn(out: &[u8]) -> usize {
        String::from_utf8_lossy(out).matches("\u{1b}[2J").count()
    }

    /// Countdown termination: remaining = 3 completes after exactly three
    /// ticks (three drawn frames), and remaining never goes negative.
    #[test]
    fn test_countdown_terminates_after_exact_ticks() {
        let mut out = Vec::new();
        let mut keys = ScriptedKeys::of(vec![]);
        let mut strategy = Countdown::new(3, false);

        let outcome = DisplayLoop::new(&mut out, &mut keys, test_font(), test_options())
            .run(&mut strategy)
            .unwrap();

        assert_eq!(outcome, LoopOutcome::Completed);
        assert_eq!(strategy.remaining(), 0);
        assert_eq!(frames_drawn(&out), 3);
        // Frames showed 3, 2, 1, and the last one second left, never zero
        // or a negative value.
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("<0>  <3>"), "first frame shows 00:00:03");
        assert!(text.contains("<0>  <1>"), "last frame shows 00:00:01");
        assert!(!text.contains("<0>  <0>  <:>  <0>  <0>  <:>  <0>  <0>"));
    }

    /// A zero-length countdown completes without drawing a frame.
    #[test]
    fn test_zero_countdown_completes_immediately() {
        let mut out = Vec::new();
        let mut keys = ScriptedKeys::of(vec![]);
        let mut strategy = Countdown::new(0, false);

        let outcome = DisplayLoop::new(&mut out, &mut keys, test_font(), test_options())
            .run(&mut strategy)
            .unwrap();

        assert_eq!(outcome, LoopOutcome::Completed);
        assert_eq!(frames_drawn(&out), 0);
    }

    /// Quit responsiveness: the quit key ends the run on the tick it arrives,
    /// regardless of how much countdown remains.
    #[test]
    fn test_quit_terminates_within_one_tick() {
        let mut out = Vec::new();
        let mut keys = ScriptedKeys::of(vec![None, Some(Key::Quit)]);
        let mut strategy = Countdown::new(1000, false);

        let outcome = DisplayLoop::new(&mut out, &mut keys, test_font(), test_options())
            .run(&mut strategy)
            .unwrap();

        assert_eq!(outcome, LoopOutcome::Aborted);
        assert_eq!(keys.polls, 2);
        assert_eq!(frames_drawn(&out), 2);
    }

    /// Quit works identically while paused.
    #[test]
    fn test_quit_while_paused() {
        let mut out = Vec::new();
        let mut keys = ScriptedKeys::of(vec![Some(Key::Pause), None, Some(Key::Quit)]);
        let mut strategy = Stopwatch::new();

        let outcome = DisplayLoop::new(&mut out, &mut keys, test_font(), test_options())
            .run(&mut strategy)
            .unwrap();

        assert_eq!(outcome, LoopOutcome::Aborted);
        assert_eq!(keys.polls, 3);
    }

    /// Pause idempotence: a pause/resume toggle freezes `elapsed` for the
    /// paused ticks and resumes cleanly, with no net distortion of the counter.
    #[test]
    fn test_pause_toggle_preserves_elapsed() {
        let mut out = Vec::new();
        // Tick 1 runs (elapsed 0 -> 1) then pauses; tick 2 is frozen and
        // resumes; tick 3 runs (1 -> 2); tick 4 quits.
        let mut keys = ScriptedKeys::of(vec![
            Some(Key::Pause),
            Some(Key::Pause),
            None,
            Some(Key::Quit),
        ]);
        let mut strategy = Stopwatch::new();

        let outcome = DisplayLoop::new(&mut out, &mut keys, test_font(), test_options())
            .run(&mut strategy)
            .unwrap();

        assert_eq!(outcome, LoopOutcome::Aborted);
        // Three running ticks advanced the counter; the paused tick did not.
        assert_eq!(strategy.elapsed(), 3);
    }

    /// The pause key is inert for modes that do not support pausing.
    #[test]
    fn test_pause_ignored_without_support() {
        let mut out = Vec::new();
        let mut keys = ScriptedKeys::of(vec![Some(Key::Pause), Some(Key::Quit)]);
        let mut strategy = Countdown::new(1000, false);

        DisplayLoop::new(&mut out, &mut keys, test_font(), test_options())
            .run(&mut strategy)
            .unwrap();

        // Both ticks advanced: the pause press did not freeze the countdown.
        assert_eq!(strategy.remaining(), 998);
    }

    /// The title block is rendered beneath the time block when configured.
    #[test]
    fn test_title_is_rendered() {
        let mut out = Vec::new();
        let mut keys = ScriptedKeys::of(vec![Some(Key::Quit)]);
        let mut strategy = Stopwatch::new();
        let opts = DisplayOptions {
            title: Some("TEA".to_string()),
            ..test_options()
        };

        DisplayLoop::new(&mut out, &mut keys, test_font(), opts)
            .run(&mut strategy)
            .unwrap();

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("<T>  <E>  <A>"));
    }

    /// Horizontal centering floors and never goes negative.
    #[test]
    fn test_left_padding() {
        assert_eq!(left_padding(80, "abcd"), 38);
        assert_eq!(left_padding(81, "abcd"), 38); // floor
        assert_eq!(left_padding(2, "abcd"), 0); // never negative
    }

    /// Vertical padding follows the (height - 1)/2 rule.
    #[test]
    fn test_top_padding() {
        assert_eq!(top_padding(24), 11);
        assert_eq!(top_padding(25), 12);
        assert_eq!(top_padding(0), 0);
    }
}
