//! # ClockRS Configuration System
//!
//! File: cli/src/core/config.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/clockrs
//!
//! **DISCLAIMER:** This repository is in the early phases of development
//! and is not suitable for production use yet.
//!
//! ## Overview
//!
//! This module implements the configuration system for ClockRS, handling loading,
//! validation, and access to configuration data. Configuration is deliberately
//! small: which bitmap font file to render with, and how the display loop paces
//! itself. Everything else is a command-line flag.
//!
//! ## Architecture
//!
//! The configuration system follows these principles:
//! - Configuration is loaded from the user config file, falling back to defaults
//! - Paths are expanded (e.g., `~` to home directory)
//! - Configuration is validated for correctness before use
//! - Structured data models ensure type safety
//!
//! Configuration sources (in order of precedence):
//! 1. User-specific `~/.config/clockrs/config.toml`
//! 2. Default values defined in the code
//!
//! ## Examples
//!
//! Loading and using configuration:
//!
//! ```rust
//! let cfg = config::load_config()?;
//!
//! // Which font file to load, if the user configured one.
//! let font_path = cfg.font.path.as_deref();
//!
//! // How long one display tick lasts.
//! let tick = cfg.display.tick_duration();
//! ```
//!
//! The configuration is loaded once per command execution and passed
//! to the modules that need it.
//!
use crate::core::error::{ClockrsError, Result}; // Use error from the same core module
use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{fs, path::Path, time::Duration};
use tracing::{debug, info, warn};

/// Represents the main configuration structure, loaded from TOML files.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in TOML
pub struct Config {
    #[serde(default)]
    pub font: FontConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    // Add other top-level configuration sections here
}

/// Configuration for the bitmap font used by the ASCII renderer.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FontConfig {
    /// Path to a FIGlet-style font file (can use ~). Will be expanded.
    /// When unset, the font bundled into the binary is used instead.
    #[serde(default)]
    pub path: Option<String>,
}

/// Configuration for the display loop shared by all timer modes.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    /// Duration of one display tick in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
        }
    }
}

impl DisplayConfig {
    /// The tick period as a `Duration`, ready for the display loop.
    pub fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}

fn default_tick_ms() -> u64 {
    1000 // One real second per tick, matching the displayed HH:MM:SS granularity.
}

/// # Load Configuration (`load_config`)
///
/// Loads the ClockRS configuration: the user file if one exists, code
/// defaults otherwise. Paths are tilde-expanded and the result validated.
///
/// ## Returns
///
/// * `Result<Config>` - The final, validated configuration.
pub fn load_config() -> Result<Config> {
    let mut config = load_user_config()?.unwrap_or_default();
    expand_config_paths(&mut config).context("Failed to expand paths in configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

fn load_user_config() -> Result<Option<Config>> {
    if let Some(proj_dirs) = ProjectDirs::from("com", "ClockRS", "clockrs") {
        let config_dir = proj_dirs.config_dir();
        let config_path = config_dir.join("config.toml");
        if config_path.exists() {
            info!("Loading user configuration from: {}", config_path.display());
            load_config_from_path(&config_path).map(Some)
        } else {
            debug!(
                "User configuration file not found at {}",
                config_path.display()
            );
            Ok(None)
        }
    } else {
        warn!("Could not determine user config directory.");
        Ok(None)
    }
}

fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

fn expand_config_paths(config: &mut Config) -> Result<()> {
    debug!("Expanding paths in configuration...");
    if let Some(path) = &config.font.path {
        let expanded = shellexpand::tilde(path).into_owned();
        debug!("Expanded font path: {}", expanded);
        config.font.path = Some(expanded);
    }
    Ok(())
}

fn validate_config(config: &Config) -> Result<()> {
    info!("Validating final configuration...");
    if let Some(path) = &config.font.path {
        let font_path = Path::new(path);
        if !font_path.exists() {
            // Existence is only warned about here; the font loader reports the
            // definitive FontNotFound when the command actually needs the font.
            warn!(
                "Configured font file '{}' does not exist.",
                font_path.display()
            );
        } else if !font_path.is_file() {
            return Err(anyhow!(ClockrsError::Config(format!(
                "Configured font path '{}' exists but is not a file.",
                font_path.display()
            ))));
        }
    }
    if config.display.tick_ms == 0 {
        return Err(anyhow!(ClockrsError::Config(
            "display.tick_ms must be greater than zero.".to_string()
        )));
    }
    Ok(())
}
