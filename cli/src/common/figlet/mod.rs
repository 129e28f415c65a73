//! # ClockRS FIGlet Utilities (`common::figlet`)
//!
//! File: cli/src/common/figlet/mod.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module implements the bitmap-font half of ClockRS: loading a
//! FIGlet-style font definition into an in-memory glyph table (`font`),
//! and rendering a text string into a multi-line block of large ASCII-art
//! characters using that table (`render`).
//!
//! ## Architecture
//!
//! - **`font`**: The `Font` type and its parser. A font is a hard-blank
//!   marker character, a glyph height, and a map from printable ASCII
//!   characters to their glyph rows. Fonts are loaded once per invocation
//!   and never mutated afterwards.
//! - **`render`**: A pure function from `(text, &Font)` to a newline-joined
//!   block of `Font::height()` rows. Unsupported characters degrade to
//!   fixed-width blank padding rather than erroring.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::figlet::{render, Font};
//!
//! let font = Font::bundled()?;
//! let block = render("12:34:56", &font);
//! for row in block.lines() {
//!     println!("{row}");
//! }
//! ```
//!

/// Font definition parsing and the in-memory glyph table.
pub mod font;
/// Pure text-to-ASCII-art rendering over a loaded font.
pub mod render;

pub use font::Font;
pub use render::render;
