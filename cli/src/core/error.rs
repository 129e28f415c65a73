//! # ClockRS Error Types
//!
//! File: cli/src/core/error.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used throughout
//! the ClockRS application. It provides a consistent approach to error management
//! with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `ClockrsError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover various domains:
//! - Configuration errors
//! - Font file errors (missing, empty, or unusable header)
//! - Duration/time string parsing errors
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if !path.exists() {
//!     return Err(ClockrsError::FontNotFound { path: path.to_path_buf() })?;
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read font file: {}", path.display()))?;
//! ```
//!
//! The error system provides detailed error messages to the user and
//! includes context information for debugging.
//!
use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for the ClockRS application.
#[derive(Error, Debug)]
pub enum ClockrsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Font file not found: {}", .path.display())]
    FontNotFound { path: PathBuf },

    #[error("Font file is empty: {}", .path.display())]
    FontEmpty { path: PathBuf },

    #[error("Font file is malformed: {0}")]
    FontMalformed(String),

    #[error("Invalid duration or time format: '{input}' (expected e.g. \"25s\", \"5m\", \"1h\", or \"02:15PM\")")]
    InvalidDuration { input: String },
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let config_err = ClockrsError::Config("Missing setting 'font.path'".to_string());
        assert_eq!(
            config_err.to_string(),
            "Configuration error: Missing setting 'font.path'"
        );

        let font_missing = ClockrsError::FontNotFound {
            path: PathBuf::from("/tmp/nope.flf"),
        };
        assert_eq!(
            font_missing.to_string(),
            "Font file not found: /tmp/nope.flf"
        );

        let bad_duration = ClockrsError::InvalidDuration {
            input: "yesterday".into(),
        };
        assert!(bad_duration.to_string().contains("'yesterday'"));
    }
}
