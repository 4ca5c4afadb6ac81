//! Topic record

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier of a topic, unique within one store
pub type TopicId = u32;

/// A single discussion thread with its engagement counters
///
/// Immutable once loaded. Dates are plain calendar dates and serialize as
/// `YYYY-MM-DD`, which is also the on-disk format of topic files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    pub author: String,
    pub date: NaiveDate,
    pub likes: u32,
    pub replies: u32,
    pub category: String,
}

impl Topic {
    #[cfg(test)]
    pub fn new(
        id: TopicId,
        title: impl Into<String>,
        author: impl Into<String>,
        date: NaiveDate,
        likes: u32,
        replies: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            date,
            likes,
            replies,
            category: category.into(),
        }
    }
}
