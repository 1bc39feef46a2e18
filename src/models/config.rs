//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default parse options
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Link navigation behavior
    #[serde(default)]
    pub navigation: NavigationConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        let index_file = self.navigation.index_file.trim();
        if index_file.is_empty() {
            return Err(AppError::validation("navigation.index_file is empty"));
        }
        if index_file.contains('/') {
            return Err(AppError::validation(
                "navigation.index_file must be a file name, not a path",
            ));
        }
        if !matches!(
            self.logging.level.to_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error" | "off"
        ) {
            return Err(AppError::validation(format!(
                "logging.level '{}' is not a known level",
                self.logging.level
            )));
        }
        Ok(())
    }
}

/// Default options applied when parsing from the CLI.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Decode the query string into a key/value map
    #[serde(default)]
    pub parse_query: bool,

    /// Treat a leading `//` as the start of an authority
    #[serde(default)]
    pub slashes_denote_host: bool,
}

/// Navigation decision settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Whether the host page supports history.pushState partial loads
    #[serde(default = "defaults::push_state")]
    pub push_state: bool,

    /// File served for directory URLs
    #[serde(default = "defaults::index_file")]
    pub index_file: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            push_state: defaults::push_state(),
            index_file: defaults::index_file(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level filter
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

mod defaults {
    pub fn push_state() -> bool {
        true
    }
    pub fn index_file() -> String {
        "index.html".into()
    }
    pub fn log_level() -> String {
        "info".into()
    }
}
