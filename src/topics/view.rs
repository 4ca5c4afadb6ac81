//! Derived view: filter by category, then sort by the active tab
//!
//! Everything here is pure. The renderer calls [`derive_view`] again whenever
//! the selection or the store changes; nothing is cached between calls.

use super::model::Topic;
use std::cmp::Ordering;

/// Sort mode selected by the active tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Date descending (most recent first); also the fallback for unknown tabs
    #[default]
    Newest,
    /// Likes descending
    MostLiked,
    /// Replies descending
    MostReplied,
}

impl SortMode {
    /// All modes in tab-bar order
    pub const ALL: [SortMode; 3] = [SortMode::Newest, SortMode::MostLiked, SortMode::MostReplied];

    /// Map a tab name to a mode; unrecognized names select [`SortMode::Newest`]
    pub fn from_tab(tab: &str) -> Self {
        match tab {
            "most-liked" => Self::MostLiked,
            "most-replied" => Self::MostReplied,
            _ => Self::Newest,
        }
    }

    /// Canonical tab name
    pub fn as_tab(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::MostLiked => "most-liked",
            Self::MostReplied => "most-replied",
        }
    }

    /// Tab bar label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Newest => "جدیدترین",
            Self::MostLiked => "محبوب‌ترین",
            Self::MostReplied => "پربحث‌ترین",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Newest => 0,
            Self::MostLiked => 1,
            Self::MostReplied => 2,
        }
    }

    /// Next tab (wraps around)
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab (wraps around)
    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Descending comparator on this mode's key
    fn compare(&self, a: &Topic, b: &Topic) -> Ordering {
        match self {
            Self::Newest => b.date.cmp(&a.date),
            Self::MostLiked => b.likes.cmp(&a.likes),
            Self::MostReplied => b.replies.cmp(&a.replies),
        }
    }
}

/// Derive the ordered view for a tab name and optional category
///
/// `active_tab` is opaque: anything other than `"most-liked"` or
/// `"most-replied"` sorts by date. `selected_category` filters by exact,
/// case-sensitive equality; an empty string means no filter.
pub fn derive_view<'a>(
    topics: &'a [Topic],
    active_tab: &str,
    selected_category: Option<&str>,
) -> Vec<&'a Topic> {
    derive_view_by(topics, SortMode::from_tab(active_tab), selected_category)
}

/// Typed form of [`derive_view`]
///
/// The sort is stable: topics with equal keys keep their store order.
pub fn derive_view_by<'a>(
    topics: &'a [Topic],
    mode: SortMode,
    selected_category: Option<&str>,
) -> Vec<&'a Topic> {
    let category = selected_category.filter(|c| !c.is_empty());

    let mut view: Vec<&Topic> = match category {
        Some(category) => topics.iter().filter(|t| t.category == category).collect(),
        None => topics.iter().collect(),
    };

    view.sort_by(|a, b| mode.compare(a, b));
    view
}

/// Distinct categories in order of first appearance
pub fn categories(topics: &[Topic]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for topic in topics {
        if !seen.contains(&topic.category.as_str()) {
            seen.push(&topic.category);
        }
    }
    seen
}

/// Caller-owned selection state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub active_tab: String,
    pub selected_category: Option<String>,
}

impl Selection {
    pub fn new(active_tab: impl Into<String>, selected_category: Option<String>) -> Self {
        Self {
            active_tab: active_tab.into(),
            selected_category,
        }
    }

    pub fn mode(&self) -> SortMode {
        SortMode::from_tab(&self.active_tab)
    }

    pub fn category(&self) -> Option<&str> {
        self.selected_category.as_deref()
    }

    /// Identity of the rendered list: `"{tab}-{category}"`, with `null` when
    /// no category is selected. A change of key retires the whole list.
    pub fn transition_key(&self) -> String {
        format!(
            "{}-{}",
            self.active_tab,
            self.selected_category.as_deref().unwrap_or("null")
        )
    }

    /// Apply this selection to a store
    pub fn apply<'a>(&self, topics: &'a [Topic]) -> Vec<&'a Topic> {
        derive_view(topics, &self.active_tab, self.category())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::source::{SeedTopics, TopicSource};
    use chrono::NaiveDate;

    const PROGRAMMING: &str = "برنامه‌نویسی";

    fn seed() -> Vec<Topic> {
        SeedTopics.load().unwrap()
    }

    fn ids(view: &[&Topic]) -> Vec<u32> {
        view.iter().map(|t| t.id).collect()
    }

    fn topic(id: u32, likes: u32, replies: u32, day: u32, category: &str) -> Topic {
        Topic::new(
            id,
            format!("t{}", id),
            "a",
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            likes,
            replies,
            category,
        )
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Scenarios over the sample records
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn most_liked_orders_by_likes() {
        let topics = seed();
        let view = derive_view(&topics, "most-liked", None);
        assert_eq!(ids(&view), vec![3, 1, 2, 4, 5]);
        assert_eq!(
            view.iter().map(|t| t.likes).collect::<Vec<_>>(),
            vec![312, 245, 189, 178, 156]
        );
    }

    #[test]
    fn most_replied_orders_by_replies() {
        let topics = seed();
        let view = derive_view(&topics, "most-replied", None);
        assert_eq!(ids(&view), vec![2, 1, 3, 4, 5]);
        assert_eq!(
            view.iter().map(|t| t.replies).collect::<Vec<_>>(),
            vec![156, 89, 67, 45, 34]
        );
    }

    #[test]
    fn default_tab_orders_by_date() {
        let topics = seed();
        assert_eq!(ids(&derive_view(&topics, "newest", None)), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn category_filter_keeps_only_matches() {
        let topics = seed();
        for tab in ["newest", "most-liked", "most-replied"] {
            let mut got = ids(&derive_view(&topics, tab, Some(PROGRAMMING)));
            got.sort_unstable();
            assert_eq!(got, vec![1, 2], "tab {tab}");
        }
        // most-replied puts 2 (156) ahead of 1 (89)
        assert_eq!(
            ids(&derive_view(&topics, "most-replied", Some(PROGRAMMING))),
            vec![2, 1]
        );
    }

    #[test]
    fn unknown_category_yields_empty_view() {
        let topics = seed();
        for tab in ["newest", "most-liked", "most-replied", "bogus"] {
            assert!(derive_view(&topics, tab, Some("nonexistent-category")).is_empty());
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn input_is_not_mutated() {
        let topics = seed();
        let before = topics.clone();
        for tab in ["newest", "most-liked", "most-replied"] {
            let _ = derive_view(&topics, tab, None);
            let _ = derive_view(&topics, tab, Some(PROGRAMMING));
        }
        assert_eq!(topics, before);
    }

    #[test]
    fn filter_count_matches_input_count() {
        let topics = seed();
        for category in categories(&topics) {
            let view = derive_view(&topics, "newest", Some(category));
            let expected = topics.iter().filter(|t| t.category == category).count();
            assert_eq!(view.len(), expected);
            assert!(view.iter().all(|t| t.category == category));
        }
        assert_eq!(derive_view(&topics, "newest", None).len(), topics.len());
    }

    #[test]
    fn adjacent_pairs_are_ordered() {
        let topics = seed();
        let liked = derive_view(&topics, "most-liked", None);
        assert!(liked.windows(2).all(|w| w[0].likes >= w[1].likes));

        let replied = derive_view(&topics, "most-replied", None);
        assert!(replied.windows(2).all(|w| w[0].replies >= w[1].replies));

        for tab in ["", "newest", "Most-Liked", "anything"] {
            let dated = derive_view(&topics, tab, None);
            assert!(dated.windows(2).all(|w| w[0].date >= w[1].date), "tab {tab:?}");
        }
    }

    #[test]
    fn derivation_is_idempotent() {
        let topics = seed();
        for tab in ["newest", "most-liked", "most-replied"] {
            let once: Vec<Topic> = derive_view(&topics, tab, None)
                .into_iter()
                .cloned()
                .collect();
            let twice = derive_view(&once, tab, None);
            assert_eq!(ids(&twice), once.iter().map(|t| t.id).collect::<Vec<_>>());
        }
    }

    #[test]
    fn ties_keep_store_order() {
        let topics = vec![
            topic(7, 10, 1, 5, "x"),
            topic(3, 20, 1, 5, "x"),
            topic(9, 10, 1, 5, "x"),
            topic(1, 10, 1, 5, "x"),
        ];
        assert_eq!(ids(&derive_view(&topics, "most-liked", None)), vec![3, 7, 9, 1]);
        assert_eq!(ids(&derive_view(&topics, "most-replied", None)), vec![7, 3, 9, 1]);
        assert_eq!(ids(&derive_view(&topics, "newest", None)), vec![7, 3, 9, 1]);
    }

    #[test]
    fn category_match_is_case_sensitive() {
        let topics = vec![topic(1, 0, 0, 1, "Rust"), topic(2, 0, 0, 2, "rust")];
        assert_eq!(ids(&derive_view(&topics, "newest", Some("rust"))), vec![2]);
        assert_eq!(ids(&derive_view(&topics, "newest", Some("RUST"))), Vec::<u32>::new());
    }

    #[test]
    fn empty_category_means_no_filter() {
        let topics = seed();
        assert_eq!(derive_view(&topics, "newest", Some("")).len(), topics.len());
    }

    #[test]
    fn empty_store_yields_empty_view() {
        assert!(derive_view(&[], "most-liked", None).is_empty());
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Sort mode and selection helpers
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn sort_mode_tab_mapping() {
        assert_eq!(SortMode::from_tab("most-liked"), SortMode::MostLiked);
        assert_eq!(SortMode::from_tab("most-replied"), SortMode::MostReplied);
        assert_eq!(SortMode::from_tab("newest"), SortMode::Newest);
        assert_eq!(SortMode::from_tab("whatever"), SortMode::Newest);
        for mode in SortMode::ALL {
            assert_eq!(SortMode::from_tab(mode.as_tab()), mode);
        }
    }

    #[test]
    fn sort_mode_cycles() {
        assert_eq!(SortMode::Newest.next(), SortMode::MostLiked);
        assert_eq!(SortMode::MostReplied.next(), SortMode::Newest);
        assert_eq!(SortMode::Newest.prev(), SortMode::MostReplied);
    }

    #[test]
    fn categories_in_first_appearance_order() {
        let topics = seed();
        assert_eq!(
            categories(&topics),
            vec![PROGRAMMING, "طراحی", "هوش مصنوعی", "امنیت"]
        );
    }

    #[test]
    fn transition_key_uses_null_for_no_category() {
        assert_eq!(
            Selection::new("most-liked", None).transition_key(),
            "most-liked-null"
        );
        assert_eq!(
            Selection::new("newest", Some("امنیت".to_string())).transition_key(),
            "newest-امنیت"
        );
    }

    #[test]
    fn selection_apply_matches_derive_view() {
        let topics = seed();
        let selection = Selection::new("most-liked", Some(PROGRAMMING.to_string()));
        assert_eq!(ids(&selection.apply(&topics)), vec![1, 2]);
        assert_eq!(selection.mode(), SortMode::MostLiked);
    }
}
