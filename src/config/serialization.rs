//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

/// Quote a string as a TOML basic string
fn quote(s: &str) -> String {
    toml::Value::String(s.to_string()).to_string()
}

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        let topics_file = match &self.topics_file {
            Some(path) => format!("topics_file = {}", quote(&path.display().to_string())),
            None => "# topics_file = \"~/topics.json\"".to_string(),
        };
        let category = match &self.category {
            Some(category) => format!("category = {}", quote(category)),
            None => "# category = \"برنامه‌نویسی\"".to_string(),
        };

        format!(
            r#"# topicboard configuration

# Topic file (JSON array or TOML [[topics]]); the built-in sample topics are
# used when unset
{topics_file}

# Initial tab: newest, most-liked, most-replied
tab = {tab}

# Initial category filter (exact match)
{category}

# Theme: light, dark
theme = {theme}

[display]
# Date style: persian (Solar Hijri with Persian digits), iso
date_style = "{date_style}"
# Text direction: rtl, ltr
direction = "{direction}"
# Length of each list transition phase in milliseconds (0 disables)
transition_ms = {transition_ms}

[logging]
# Log level: trace, debug, info, warn, error (RUST_LOG overrides)
level = {level}
# Write JSON logs to rotating files
file_enabled = {file_enabled}
file_dir = {file_dir}
# Rotation: hourly, daily, never
file_rotation = "{file_rotation}"
file_prefix = {file_prefix}
"#,
            topics_file = topics_file,
            tab = quote(&self.tab),
            category = category,
            theme = quote(&self.theme),
            date_style = self.display.date_style.as_str(),
            direction = self.display.direction.as_str(),
            transition_ms = self.display.transition_ms,
            level = quote(&self.logging.level),
            file_enabled = self.logging.file_enabled,
            file_dir = quote(&self.logging.file_dir.display().to_string()),
            file_rotation = self.logging.file_rotation.as_str(),
            file_prefix = quote(&self.logging.file_prefix),
        )
    }
}
