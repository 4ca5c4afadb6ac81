//! Display configuration: date style, text direction, transitions

use crate::locale::DateStyle;
use serde::Deserialize;
use std::time::Duration;

/// Horizontal reading direction of the topic list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Right-to-left: rows right-aligned, counters on the left
    #[default]
    Rtl,
    Ltr,
}

impl Direction {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ltr" => Self::Ltr,
            _ => Self::Rtl,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rtl => "rtl",
            Self::Ltr => "ltr",
        }
    }
}

/// Display settings
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    pub date_style: DateStyle,
    pub direction: Direction,
    /// Length of each transition phase (exit, then enter); 0 disables
    pub transition_ms: u64,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_style: DateStyle::Persian,
            direction: Direction::Rtl,
            transition_ms: 300,
        }
    }
}

/// Display settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileDisplay {
    pub date_style: Option<String>,
    pub direction: Option<String>,
    pub transition_ms: Option<u64>,
}

impl DisplayConfig {
    pub fn from_file(file: Option<FileDisplay>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            date_style: file
                .date_style
                .map(|s| DateStyle::from_str(&s))
                .unwrap_or(defaults.date_style),
            direction: file
                .direction
                .map(|s| Direction::from_str(&s))
                .unwrap_or(defaults.direction),
            transition_ms: file.transition_ms.unwrap_or(defaults.transition_ms),
        }
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }
}
