//! Calc Configuration System
//!
//! User-level settings for the calculator, stored in `~/.calc/config.toml`.
//!
//! # Configuration Hierarchy
//!
//! Later sources override earlier ones:
//! 1. Built-in defaults
//! 2. Global config (~/.calc/config.toml, or the file named by `CALC_CONFIG`)
//! 3. Environment variables (CALC_*)
//! 4. CLI flags
//!
//! This crate covers the first two; the CLI applies the rest.
//!
//! # Example
//!
//! ```no_run
//! use calc_config::GlobalConfig;
//!
//! let config = GlobalConfig::load_default().unwrap();
//! println!("prompt: {:?}", config.prompt());
//! ```

pub mod global;

use std::path::PathBuf;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid TOML syntax in {file}: {error}")]
    TomlParseError {
        file: PathBuf,
        error: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },

    #[error("Home directory not found")]
    HomeNotFound,
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

pub use global::{DiagnosticFormat, DiagnosticsConfig, GlobalConfig, ReplConfig};
