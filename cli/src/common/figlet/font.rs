//! # ClockRS Font Loader
//!
//! File: cli/src/common/figlet/font.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module parses FIGlet-style bitmap font definitions into the in-memory
//! `Font` structure used by the renderer. A font file is plain UTF-8 text:
//! a header line followed by glyph row data for the printable ASCII range
//! (codepoints 32 through 126), a fixed number of rows per glyph.
//!
//! ## Architecture
//!
//! Parsing is split in two layers:
//! - `Font::parse` is the pure core: header interpretation plus positional
//!   glyph extraction from an in-memory string. Malformed *individual* glyphs
//!   never fail parsing; they just produce sparser glyph entries. Only an
//!   unusable header (no marker token, no integer height) is an error.
//! - `Font::load` wraps `parse` with filesystem concerns: a missing path is
//!   `FontNotFound`, a zero-line file is `FontEmpty`.
//!
//! The font bundled into the binary (`fonts/block.flf`) is exposed through
//! `Font::bundled` so the tool works before the user configures anything.
//!
//! ## Font File Format
//!
//! - Line 1: `<marker-token> <height> ...`; the marker token's character at
//!   index 5 is the **hard-blank** (renders as a space but is distinguishable
//!   from a literal space in the raw file); the second token is the integer
//!   glyph height `H`.
//! - Lines 2..: glyph rows for codepoints 32..=126 in order, `H` rows each,
//!   terminated with `@`. A FIGlet-style `@@` on a glyph's final row is
//!   tolerated (one stripped, one spaced). Rows whose index exceeds the file
//!   length are simply absent, not an error.
//!
use crate::core::config::FontConfig;
use crate::core::error::{ClockrsError, Result};
use anyhow::Context;
use std::{collections::HashMap, fs, path::Path};

/// Character that terminates glyph rows in the font file.
const TERMINATOR: char = '@';

/// First codepoint a font file defines a glyph for (space).
const FIRST_CODEPOINT: u8 = 32;
/// Last codepoint a font file defines a glyph for (tilde).
const LAST_CODEPOINT: u8 = 126;

/// The font definition bundled into the binary, used when no font path is
/// configured. See `cli/fonts/block.flf`.
const BUNDLED_FONT: &str = include_str!("../../../fonts/block.flf");

/// # Font (`Font`)
///
/// An immutable, in-memory bitmap font: the hard-blank marker from the file
/// header, the glyph height, and the glyph table for printable ASCII.
///
/// Invariant: every glyph entry holds at most `height` rows. Rows that were
/// missing from the source file are absent from the entry and padded by the
/// renderer, never a panic.
#[derive(Debug, Clone)]
pub struct Font {
    hard_blank: char,
    height: usize,
    glyphs: HashMap<char, Vec<String>>,
}

impl Font {
    /// # Load Font (`Font::load`)
    ///
    /// Reads and parses a font definition file.
    ///
    /// ## Arguments
    ///
    /// * `path`: Path of the font file to read as UTF-8 text.
    ///
    /// ## Returns
    ///
    /// * `Ok(Font)` on success.
    /// * `Err` wrapping `ClockrsError::FontNotFound` if the path does not exist,
    ///   `ClockrsError::FontEmpty` if the file has zero lines, or
    ///   `ClockrsError::FontMalformed` if the header is unusable.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ClockrsError::FontNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read font file: {}", path.display()))?;
        if content.lines().next().is_none() {
            return Err(ClockrsError::FontEmpty {
                path: path.to_path_buf(),
            }
            .into());
        }
        Self::parse(&content)
            .with_context(|| format!("Failed to parse font file: {}", path.display()))
    }

    /// # Bundled Font (`Font::bundled`)
    ///
    /// Parses the font compiled into the binary. Used whenever the user has
    /// not configured `[font] path`.
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_FONT).context("Bundled font is malformed (this is a packaging bug)")
    }

    /// # Font From Configuration (`Font::from_config`)
    ///
    /// Resolves the font the way the commands do: the configured file when
    /// `[font] path` is set, the bundled font otherwise.
    pub fn from_config(cfg: &FontConfig) -> Result<Self> {
        match &cfg.path {
            Some(path) => Self::load(Path::new(path)),
            None => Self::bundled(),
        }
    }

    /// # Parse Font (`Font::parse`)
    ///
    /// The pure parsing core over an in-memory font definition.
    ///
    /// ## Workflow:
    /// 1. Read the header: hard-blank from index 5 of the first whitespace
    ///    token, glyph height from the second token.
    /// 2. For each codepoint `c` in 32..=126, collect up to `height` rows
    ///    starting at line `1 + (c - 32) * height`; rows past the end of the
    ///    file are skipped.
    /// 3. Clean each row: strip one trailing terminator, then replace the
    ///    hard-blank and any remaining terminator characters with spaces.
    ///
    /// Glyphs with no surviving rows are left out of the table entirely; the
    /// renderer substitutes blank padding for them.
    pub fn parse(source: &str) -> Result<Self> {
        let lines: Vec<&str> = source.lines().collect();
        let header = *lines.first().ok_or_else(|| {
            ClockrsError::FontMalformed("font definition has no header line".to_string())
        })?;

        let mut tokens = header.split_whitespace();
        let marker = tokens.next().ok_or_else(|| {
            ClockrsError::FontMalformed("font header has no marker token".to_string())
        })?;
        let hard_blank = marker.chars().nth(5).ok_or_else(|| {
            ClockrsError::FontMalformed(format!(
                "font header marker token '{marker}' is too short to carry a hard-blank"
            ))
        })?;
        let height: usize = tokens
            .next()
            .and_then(|token| token.parse().ok())
            .filter(|h| *h > 0)
            .ok_or_else(|| {
                ClockrsError::FontMalformed(
                    "font header glyph height is missing or not a positive integer".to_string(),
                )
            })?;

        let mut glyphs = HashMap::new();
        for code in FIRST_CODEPOINT..=LAST_CODEPOINT {
            let ch = code as char;
            let start = 1 + (code - FIRST_CODEPOINT) as usize * height;
            let mut rows = Vec::with_capacity(height);
            for offset in 0..height {
                match lines.get(start + offset) {
                    Some(raw) => rows.push(clean_row(raw, hard_blank)),
                    None => break, // Row index exceeds the file length: row absent.
                }
            }
            if !rows.is_empty() {
                glyphs.insert(ch, rows);
            }
        }

        Ok(Self {
            hard_blank,
            height,
            glyphs,
        })
    }

    /// The hard-blank marker character declared by the font header.
    pub fn hard_blank(&self) -> char {
        self.hard_blank
    }

    /// The glyph height declared by the font header. Every rendered block
    /// has exactly this many rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The rows of one glyph, if the font defines it.
    pub fn glyph(&self, ch: char) -> Option<&[String]> {
        self.glyphs.get(&ch).map(Vec::as_slice)
    }

    /// Number of glyphs the font actually defines.
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }
}

/// Cleans one raw glyph row: strips a single trailing terminator character,
/// then neutralizes the hard-blank and any remaining terminators to spaces.
fn clean_row(raw: &str, hard_blank: char) -> String {
    let stripped = raw.strip_suffix(TERMINATOR).unwrap_or(raw);
    stripped
        .chars()
        .map(|c| {
            if c == hard_blank || c == TERMINATOR {
                ' '
            } else {
                c
            }
        })
        .collect()
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Builds a complete synthetic font: header plus `height` rows for every
    /// codepoint 32..=126, each row carrying the codepoint so glyphs are
    /// distinguishable in assertions.
    fn synthetic_font(height: usize) -> String {
        let mut out = String::from("flf2a$ HEIGHT 5 10 0\n").replace("HEIGHT", &height.to_string());
        for code in 32u8..=126 {
            for row in 0..height {
                let terminator = if row == height - 1 { "@@" } else { "@" };
                out.push_str(&format!("{code:03}$ {row}{terminator}\n"));
            }
        }
        out
    }

    /// Font round trip: a complete synthetic file yields 95 glyph entries,
    /// each of at most `height` rows.
    #[test]
    fn test_parse_full_font_has_all_glyphs() {
        let font = Font::parse(&synthetic_font(4)).unwrap();
        assert_eq!(font.height(), 4);
        assert_eq!(font.hard_blank(), '$');
        assert_eq!(font.glyph_count(), 95);
        for code in 32u8..=126 {
            let rows = font.glyph(code as char).unwrap();
            assert_eq!(rows.len(), 4);
        }
    }

    /// Hard-blank and terminator markers become spaces; one trailing
    /// terminator is stripped outright.
    #[test]
    fn test_row_cleanup() {
        let font = Font::parse(&synthetic_font(4)).unwrap();
        let rows = font.glyph(' ').unwrap();
        // Source row was "032$ 0@": hard-blank '$' turns into a space and
        // the single trailing '@' disappears.
        assert_eq!(rows[0], "032  0");
        // Final row was "032$ 3@@": one '@' stripped, the other spaced.
        assert_eq!(rows[3], "032  3 ");
    }

    /// A truncated file produces sparser entries, never an error: glyphs past
    /// the cut-off are absent, the glyph at the cut-off keeps partial rows.
    #[test]
    fn test_parse_truncated_font_is_sparse() {
        let full = synthetic_font(4);
        // Keep the header plus the rows for ' ' (4) and '!' (4), then half of '"'.
        let truncated: String = full
            .lines()
            .take(1 + 4 + 4 + 2)
            .map(|l| format!("{l}\n"))
            .collect();

        let font = Font::parse(&truncated).unwrap();
        assert_eq!(font.glyph(' ').unwrap().len(), 4);
        assert_eq!(font.glyph('!').unwrap().len(), 4);
        assert_eq!(font.glyph('"').unwrap().len(), 2, "partial glyph survives");
        assert!(font.glyph('#').is_none(), "glyph past EOF is absent");
    }

    /// Header errors: missing header line, short marker token, bad height.
    #[test]
    fn test_parse_rejects_bad_headers() {
        assert!(Font::parse("").is_err());
        assert!(Font::parse("abc 4\nrow@\n").is_err(), "marker too short");
        assert!(Font::parse("flf2a$ nope\nrow@\n").is_err(), "height NaN");
        assert!(Font::parse("flf2a$ 0\n").is_err(), "zero height");
    }

    /// `load` distinguishes a missing path from an empty file.
    #[test]
    fn test_load_error_taxonomy() {
        let missing = Font::load(Path::new("/definitely/not/here.flf"));
        let err = missing.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClockrsError>(),
            Some(ClockrsError::FontNotFound { .. })
        ));

        let empty = NamedTempFile::new().unwrap();
        let err = Font::load(empty.path()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ClockrsError>(),
            Some(ClockrsError::FontEmpty { .. })
        ));
    }

    /// `load` parses a complete file from disk.
    #[test]
    fn test_load_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(synthetic_font(3).as_bytes()).unwrap();
        let font = Font::load(file.path()).unwrap();
        assert_eq!(font.height(), 3);
        assert_eq!(font.glyph_count(), 95);
    }

    /// The font bundled into the binary must always parse.
    #[test]
    fn test_bundled_font_parses() {
        let font = Font::bundled().unwrap();
        assert!(font.height() > 0);
        // The clock faces only need digits, the colon, and AM/PM letters,
        // but the bundled font should cover the whole printable range.
        for ch in "0123456789: AMP".chars() {
            assert!(font.glyph(ch).is_some(), "bundled font misses '{ch}'");
        }
    }
}
