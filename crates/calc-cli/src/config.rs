//! CLI configuration
//!
//! Settings come from the config file (see `calc-config`), then environment
//! variables, then command-line flags, each overriding the previous.

use anyhow::{Context, Result};
use calc_config::{ConfigError, DiagnosticFormat, GlobalConfig};
use std::env;
use std::path::{Path, PathBuf};

/// Effective CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// REPL prompt
    pub prompt: String,
    /// Custom history file path (CALC_HISTORY_FILE=/path/to/file)
    pub history_file: Option<PathBuf>,
    /// Disable history (CALC_NO_HISTORY=1)
    pub no_history: bool,
    /// Print all variables after each statement (CALC_SHOW_ENV=1)
    pub show_env: bool,
    /// Disable colored output (CALC_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
    /// JSON diagnostic output (CALC_DIAGNOSTICS=json)
    pub json: bool,
}

impl Config {
    /// Load the config file and apply environment overrides.
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let global = match path {
            Some(path) => GlobalConfig::load_from_file(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
            None => match GlobalConfig::load_default() {
                Err(ConfigError::HomeNotFound) => GlobalConfig::default(),
                other => other.context("Failed to load ~/.calc/config.toml")?,
            },
        };
        Ok(Self::from_global(&global, |key| env::var(key).ok()))
    }

    /// Combine file settings with environment variables read through `var`
    pub fn from_global(global: &GlobalConfig, var: impl Fn(&str) -> Option<String>) -> Self {
        let flag = |key: &str| var(key).map(|v| is_truthy(&v));

        Self {
            prompt: global.prompt().to_string(),
            history_file: var("CALC_HISTORY_FILE")
                .map(PathBuf::from)
                .or_else(|| global.history_file().map(Path::to_path_buf)),
            no_history: flag("CALC_NO_HISTORY").unwrap_or(!global.history_enabled()),
            show_env: flag("CALC_SHOW_ENV").unwrap_or_else(|| global.show_env()),
            // NO_COLOR disables color whatever its value
            no_color: flag("CALC_NO_COLOR").unwrap_or(false)
                || var("NO_COLOR").is_some()
                || !global.color(),
            json: var("CALC_DIAGNOSTICS")
                .map(|v| v.eq_ignore_ascii_case("json"))
                .unwrap_or(global.diagnostic_format() == DiagnosticFormat::Json),
        }
    }

    /// Get the history file path
    ///
    /// Returns:
    /// 1. CALC_HISTORY_FILE or `repl.history_file` if set
    /// 2. ~/.calc/history if the home directory is known
    /// 3. None otherwise
    pub fn history_path(&self) -> Option<PathBuf> {
        if let Some(ref path) = self.history_file {
            return Some(path.clone());
        }
        GlobalConfig::config_dir()
            .ok()
            .map(|dir| dir.join("history"))
    }
}

fn is_truthy(value: &str) -> bool {
    let lower = value.to_lowercase();
    !(lower.is_empty() || lower == "0" || lower == "false" || lower == "off")
}
