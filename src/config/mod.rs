//! Configuration for topicboard
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/topicboard/config.toml)
//! 3. Built-in defaults (lowest priority)

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ─────────────────────────────────────────────────────────────────────────────
// Submodules
// ─────────────────────────────────────────────────────────────────────────────

mod display;
mod logging;
mod serialization;


// ─────────────────────────────────────────────────────────────────────────────
// Re-exports
// ─────────────────────────────────────────────────────────────────────────────

pub use display::{Direction, DisplayConfig, FileDisplay};
pub use logging::{FileLogging, LogRotation, LoggingConfig};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tab selected when nothing is configured
pub const DEFAULT_TAB: &str = "newest";

// ─────────────────────────────────────────────────────────────────────────────
// Application Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Topic file (JSON or TOML); `None` uses the built-in sample topics
    pub topics_file: Option<PathBuf>,

    /// Initial active tab (opaque; unknown names sort by date)
    pub tab: String,

    /// Initial category filter
    pub category: Option<String>,

    /// Whether to run the TUI (disabled for headless output)
    pub enable_tui: bool,

    /// Theme name: "light" or "dark"
    pub theme: String,

    /// Display settings
    pub display: DisplayConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            topics_file: None,
            tab: DEFAULT_TAB.to_string(),
            category: None,
            enable_tui: true,
            theme: "light".to_string(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub topics_file: Option<String>,
    pub tab: Option<String>,
    pub category: Option<String>,
    pub theme: Option<String>,

    /// Optional [display] section
    pub display: Option<FileDisplay>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/topicboard/config.toml
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("topicboard").join("config.toml"))
    }

    /// Create config file with defaults if it doesn't exist
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A missing file yields defaults; a file that exists but cannot be read
    /// or parsed is an error, so a broken config is never silently ignored.
    pub(crate) fn load_file_config(path: &Path) -> Result<FileConfig> {
        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config file {}", path.display())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(FileConfig::default()),
            Err(e) => Err(e)
                .with_context(|| format!("Failed to read config file {}", path.display())),
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Result<Self> {
        let file = match Self::config_path() {
            Some(path) => Self::load_file_config(&path)?,
            None => FileConfig::default(),
        };

        Ok(Self::merge(file, |key| std::env::var(key).ok()))
    }

    /// Merge a parsed file with an environment lookup
    pub(crate) fn merge(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        // Topic file: env > file > none (built-in topics)
        let topics_file = env("TOPICBOARD_TOPICS")
            .or(file.topics_file)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let tab = env("TOPICBOARD_TAB")
            .or(file.tab)
            .unwrap_or(defaults.tab);

        let category = env("TOPICBOARD_CATEGORY")
            .or(file.category)
            .filter(|c| !c.is_empty());

        // TUI toggle: env only (runtime flag)
        let enable_tui = env("TOPICBOARD_NO_TUI")
            .map(|v| v != "1" && v.to_lowercase() != "true")
            .unwrap_or(true);

        let theme = env("TOPICBOARD_THEME")
            .or(file.theme)
            .unwrap_or(defaults.theme);

        Self {
            topics_file,
            tab,
            category,
            enable_tui,
            theme,
            display: DisplayConfig::from_file(file.display),
            logging: LoggingConfig::from_file(file.logging),
        }
    }
}
