//! # ClockRS Keyboard Input
//!
//! File: cli/src/common/terminal/input.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module implements the polled, never-blocking keyboard input used by
//! the display loop. Input is *polled* once per tick, not awaited, so user
//! input latency is bounded by the tick period rather than by a blocking
//! read.
//!
//! ## Architecture
//!
//! The `KeyPoller` trait is the seam: the display loop only ever calls
//! `poll_key()`, which returns immediately with `Some(Key)` if a key press is
//! buffered and `None` otherwise. Production code uses `TerminalKeys`, which
//! puts the terminal into raw mode for its lifetime (restored on drop) and
//! drains crossterm's event queue without blocking. Tests substitute scripted
//! implementations of the trait, so no real terminal is required.
//!
//! When raw mode cannot be enabled (output piped, no TTY), `TerminalKeys`
//! degrades to a poller that never reports keys, with a single warning;
//! rendering still works, interactive control doesn't.
//!
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::time::Duration;
use tracing::{debug, warn};

/// A key press the display loop reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// `q`/`Q` (or Ctrl-C, which raw mode would otherwise swallow).
    Quit,
    /// `p`/`P`, honored only by modes that support pausing.
    Pause,
    /// Any other key; polled and ignored.
    Other,
}

/// # Key Poller (`KeyPoller`)
///
/// The input-source interface of the display loop: check for one buffered
/// key press without blocking.
pub trait KeyPoller {
    /// Returns the next buffered key press, or `None` when no key is waiting.
    /// Must never block.
    fn poll_key(&mut self) -> Option<Key>;
}

/// Forwarding impl so callers can keep ownership of a poller while the
/// display loop borrows it mutably.
impl<K: KeyPoller + ?Sized> KeyPoller for &mut K {
    fn poll_key(&mut self) -> Option<Key> {
        (**self).poll_key()
    }
}

/// # Terminal Keys (`TerminalKeys`)
///
/// The crossterm-backed `KeyPoller`. Holds the raw-mode guard for as long as
/// it lives; dropping it restores the terminal.
pub struct TerminalKeys {
    raw: Option<RawModeGuard>,
}

impl TerminalKeys {
    /// Enables raw mode and builds the poller. Raw-mode failure (no TTY) is
    /// downgraded to a warning and a poller that never reports keys.
    pub fn new() -> Self {
        match RawModeGuard::enable() {
            Ok(guard) => Self { raw: Some(guard) },
            Err(err) => {
                warn!("Could not enable raw terminal mode ({err}); key controls disabled.");
                Self { raw: None }
            }
        }
    }
}

impl Default for TerminalKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyPoller for TerminalKeys {
    fn poll_key(&mut self) -> Option<Key> {
        if self.raw.is_none() {
            return None;
        }
        // Drain everything buffered since the last tick; the first key press
        // wins, and non-key events (resize, focus) are skipped. A zero
        // timeout keeps this strictly non-blocking.
        while event::poll(Duration::ZERO).unwrap_or(false) {
            let Ok(ev) = event::read() else {
                return None;
            };
            if let Event::Key(key) = ev {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                return Some(match key.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => Key::Quit,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        Key::Quit
                    }
                    KeyCode::Char('p') | KeyCode::Char('P') => Key::Pause,
                    _ => Key::Other,
                });
            }
        }
        None
    }
}

/// Raw-mode RAII guard: enabled on construction, restored on drop.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> std::io::Result<Self> {
        enable_raw_mode()?;
        debug!("Raw terminal mode enabled.");
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            // Nothing sensible left to do during drop but note it.
            warn!("Failed to restore terminal mode: {err}");
        } else {
            debug!("Raw terminal mode restored.");
        }
    }
}
