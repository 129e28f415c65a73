//! # ClockRS ASCII Renderer
//!
//! File: cli/src/common/figlet/render.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module converts a text string into a multi-line block of large
//! ASCII-art characters using a loaded `Font`. Rendering is a pure function:
//! identical `(text, font)` inputs always yield byte-identical output, and
//! there are no side effects.
//!
//! ## Architecture
//!
//! For each output row `i` in `[0, font.height())`, the renderer concatenates,
//! for every character of the input in order, that character's glyph row `i`
//! followed by a fixed two-space separator. Characters the font does not map
//! are substituted with a fixed-width blank run so row widths stay visually
//! aligned even with unsupported input. Glyph rows missing from a sparse font
//! entry contribute nothing but the separator.
//!
use super::font::Font;

/// Width of the blank run substituted for characters the font does not map.
pub const UNMAPPED_WIDTH: usize = 8;

/// Separator appended after every glyph column.
const SEPARATOR: &str = "  ";

/// # Render Text (`render`)
///
/// Renders `text` as a block of `font.height()` newline-joined rows of
/// ASCII art.
///
/// ## Arguments
///
/// * `text`: The string to render. Any characters are accepted; ones the
///   font does not cover become blank padding.
/// * `font`: The glyph table to render with.
///
/// ## Returns
///
/// * `String` - `font.height()` rows joined with `\n`. Never fails.
pub fn render(text: &str, font: &Font) -> String {
    let mut rows = Vec::with_capacity(font.height());
    for i in 0..font.height() {
        let mut row = String::new();
        for ch in text.chars() {
            match font.glyph(ch) {
                Some(glyph) => {
                    // A sparse glyph may be missing this row; treat it as empty.
                    if let Some(line) = glyph.get(i) {
                        row.push_str(line);
                    }
                }
                None => {
                    row.push_str(&" ".repeat(UNMAPPED_WIDTH));
                }
            }
            row.push_str(SEPARATOR);
        }
        rows.push(row);
    }
    rows.join("\n")
}
