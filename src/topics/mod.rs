//! Topic store and the derived view over it

mod model;
mod source;
mod view;

pub use model::{Topic, TopicId};
pub use source::{source_for, TopicLoadError, TopicSource};
#[cfg(test)]
pub use source::{FileTopicSource, SeedTopics};
pub use view::{categories, derive_view, Selection, SortMode};
