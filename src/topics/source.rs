//! Topic sources
//!
//! The store is injected rather than baked into the renderer. Every source
//! runs its records through the same validation, so a loaded store always
//! has parseable dates and unique ids.

use super::model::{Topic, TopicId};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Date format used by topic records
pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, thiserror::Error)]
pub enum TopicLoadError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("topic {id} has invalid date {value:?} (expected YYYY-MM-DD)")]
    InvalidDate { id: TopicId, value: String },

    #[error("duplicate topic id {0}")]
    DuplicateId(TopicId),
}

/// Anything that can supply the topic store
pub trait TopicSource {
    /// Short human-readable description, shown in logs and the title bar
    fn describe(&self) -> String;

    /// Load and validate the full topic collection
    fn load(&self) -> Result<Vec<Topic>, TopicLoadError>;
}

/// Topic record as it appears in a file, before date validation
#[derive(Debug, Clone, Deserialize)]
pub struct RawTopic {
    pub id: TopicId,
    pub title: String,
    pub author: String,
    pub date: String,
    pub likes: u32,
    pub replies: u32,
    pub category: String,
}

impl RawTopic {
    fn into_topic(self) -> Result<Topic, TopicLoadError> {
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT).map_err(|_| {
            TopicLoadError::InvalidDate {
                id: self.id,
                value: self.date.clone(),
            }
        })?;

        Ok(Topic {
            id: self.id,
            title: self.title,
            author: self.author,
            date,
            likes: self.likes,
            replies: self.replies,
            category: self.category,
        })
    }
}

/// Validate raw records into a store: dates must parse, ids must be unique
pub fn validate(raw: Vec<RawTopic>) -> Result<Vec<Topic>, TopicLoadError> {
    let mut seen = HashSet::with_capacity(raw.len());
    let mut topics = Vec::with_capacity(raw.len());

    for record in raw {
        if !seen.insert(record.id) {
            return Err(TopicLoadError::DuplicateId(record.id));
        }
        topics.push(record.into_topic()?);
    }

    Ok(topics)
}

// ─────────────────────────────────────────────────────────────────────────────
// Built-in seed data
// ─────────────────────────────────────────────────────────────────────────────

/// (id, title, author, date, likes, replies, category)
type SeedRecord = (
    TopicId,
    &'static str,
    &'static str,
    &'static str,
    u32,
    u32,
    &'static str,
);

const SEED: [SeedRecord; 5] = [
    (
        1,
        "شروع برنامه‌نویسی وب",
        "سارا چن",
        "2024-03-20",
        245,
        89,
        "برنامه‌نویسی",
    ),
    (
        2,
        "تکنیک‌های مدرن جاوااسکریپت",
        "علی کیم",
        "2024-03-19",
        189,
        156,
        "برنامه‌نویسی",
    ),
    (
        3,
        "اصول طراحی رابط کاربری",
        "مریم گارسیا",
        "2024-03-18",
        312,
        67,
        "طراحی",
    ),
    (
        4,
        "مبانی یادگیری ماشین",
        "جان اسمیت",
        "2024-03-17",
        178,
        45,
        "هوش مصنوعی",
    ),
    (
        5,
        "بهترین روش‌های امنیت شبکه",
        "امیلی براون",
        "2024-03-16",
        156,
        34,
        "امنیت",
    ),
];

/// The five built-in sample topics
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedTopics;

impl TopicSource for SeedTopics {
    fn describe(&self) -> String {
        "built-in sample topics".to_string()
    }

    fn load(&self) -> Result<Vec<Topic>, TopicLoadError> {
        let raw = SEED
            .iter()
            .map(
                |&(id, title, author, date, likes, replies, category)| RawTopic {
                    id,
                    title: title.to_string(),
                    author: author.to_string(),
                    date: date.to_string(),
                    likes,
                    replies,
                    category: category.to_string(),
                },
            )
            .collect();
        validate(raw)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// File source
// ─────────────────────────────────────────────────────────────────────────────

/// TOML topic files hold an array of `[[topics]]` tables
#[derive(Debug, Deserialize)]
struct TomlTopicFile {
    #[serde(default)]
    topics: Vec<RawTopic>,
}

/// Topics read from a JSON (array of records) or TOML (`[[topics]]`) file
///
/// The format is picked from the extension; anything other than `.toml` is
/// read as JSON.
#[derive(Debug, Clone)]
pub struct FileTopicSource {
    path: PathBuf,
}

impl FileTopicSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn is_toml(&self) -> bool {
        self.path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
    }

    fn parse(&self, contents: &str) -> Result<Vec<RawTopic>, TopicLoadError> {
        let parse_err = |message: String| TopicLoadError::Parse {
            path: self.path.clone(),
            message,
        };

        if self.is_toml() {
            toml::from_str::<TomlTopicFile>(contents)
                .map(|file| file.topics)
                .map_err(|e| parse_err(e.to_string()))
        } else {
            serde_json::from_str::<Vec<RawTopic>>(contents).map_err(|e| parse_err(e.to_string()))
        }
    }
}

impl TopicSource for FileTopicSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<Vec<Topic>, TopicLoadError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| TopicLoadError::Io {
            path: self.path.clone(),
            source,
        })?;

        let topics = validate(self.parse(&contents)?)?;
        tracing::debug!(path = %self.path.display(), count = topics.len(), "Loaded topic file");
        Ok(topics)
    }
}

/// Pick the source for an optional configured path
pub fn source_for(path: Option<&Path>) -> Box<dyn TopicSource + Send + Sync> {
    match path {
        Some(path) => Box::new(FileTopicSource::new(path)),
        None => Box::new(SeedTopics),
    }
}
