//! Global Configuration (~/.calc/config.toml)
//!
//! ```toml
//! [repl]
//! prompt = "calc> "
//! history = true
//! history_file = "/home/me/.calc/history"
//! show_env = false
//! color = true
//!
//! [diagnostics]
//! format = "human"   # or "json"
//! ```

use crate::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prompt shown when no configuration sets one
pub const DEFAULT_PROMPT: &str = "> ";

/// Global user configuration from ~/.calc/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct GlobalConfig {
    /// Interactive session settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repl: Option<ReplConfig>,

    /// Error reporting settings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<DiagnosticsConfig>,
}

/// `[repl]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ReplConfig {
    /// Prompt printed before each line (default: "> ")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Persist line history between sessions (default: true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<bool>,

    /// History file location (default: ~/.calc/history)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_file: Option<PathBuf>,

    /// Print every binding after each statement (default: false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_env: Option<bool>,

    /// Colorize output (default: true)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<bool>,
}

/// `[diagnostics]` table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<DiagnosticFormat>,
}

/// How errors are printed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticFormat {
    #[default]
    Human,
    Json,
}

impl GlobalConfig {
    /// Load global configuration from a file
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::IoError(e)
            }
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            file: path.to_path_buf(),
            error: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults if the file does not exist
    pub fn load_or_default(path: &Path) -> ConfigResult<Self> {
        match Self::load_from_file(path) {
            Err(ConfigError::NotFound(_)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Load ~/.calc/config.toml, or defaults if there is no such file
    pub fn load_default() -> ConfigResult<Self> {
        Self::load_or_default(&Self::global_config_path()?)
    }

    /// Validate the global configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(prompt) = self.repl.as_ref().and_then(|r| r.prompt.as_deref()) {
            if prompt.contains(['\n', '\r']) {
                return Err(ConfigError::InvalidValue {
                    field: "repl.prompt".to_string(),
                    reason: "must not contain line breaks".to_string(),
                });
            }
        }

        if let Some(path) = self.repl.as_ref().and_then(|r| r.history_file.as_ref()) {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "repl.history_file".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Get the global config directory (~/.calc)
    pub fn config_dir() -> ConfigResult<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::HomeNotFound)?;
        Ok(home.join(".calc"))
    }

    /// Get the global config file path (~/.calc/config.toml)
    pub fn global_config_path() -> ConfigResult<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn prompt(&self) -> &str {
        self.repl
            .as_ref()
            .and_then(|r| r.prompt.as_deref())
            .unwrap_or(DEFAULT_PROMPT)
    }

    pub fn history_enabled(&self) -> bool {
        self.repl.as_ref().and_then(|r| r.history).unwrap_or(true)
    }

    /// Configured history file, if any
    pub fn history_file(&self) -> Option<&Path> {
        self.repl.as_ref().and_then(|r| r.history_file.as_deref())
    }

    pub fn show_env(&self) -> bool {
        self.repl.as_ref().and_then(|r| r.show_env).unwrap_or(false)
    }

    pub fn color(&self) -> bool {
        self.repl.as_ref().and_then(|r| r.color).unwrap_or(true)
    }

    pub fn diagnostic_format(&self) -> DiagnosticFormat {
        self.diagnostics
            .as_ref()
            .and_then(|d| d.format)
            .unwrap_or_default()
    }
}
