// Formatters
//
// Shared text for topic rows, used by the TUI cards and the headless list.

use crate::locale::DateStyle;
use crate::topics::Topic;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// "نویسنده: سارا چن • ۱۴۰۳/۱/۱"
pub fn meta_line(topic: &Topic, style: DateStyle) -> String {
    format!("نویسنده: {} • {}", topic.author, style.format(topic.date))
}

/// Like count with its marker, e.g. "245 👍"
///
/// Counts stay in ASCII digits; only the date is localized.
pub fn likes_label(topic: &Topic) -> String {
    format!("{} 👍", topic.likes)
}

/// Reply count with its marker, e.g. "89 💬"
pub fn replies_label(topic: &Topic) -> String {
    format!("{} 💬", topic.replies)
}

/// Truncate to at most `max_width` display columns, ending in "…" when cut
///
/// # Examples
/// ```ignore
/// assert_eq!(truncate_to_width("hello world", 6), "hello…");
/// assert_eq!(truncate_to_width("hi", 6), "hi");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1; // room for the ellipsis
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::{SeedTopics, TopicSource};

    #[test]
    fn meta_line_uses_localized_date() {
        let topics = SeedTopics.load().unwrap();
        assert_eq!(
            meta_line(&topics[0], DateStyle::Persian),
            "نویسنده: سارا چن • ۱۴۰۳/۱/۱"
        );
        assert_eq!(
            meta_line(&topics[0], DateStyle::Iso),
            "نویسنده: سارا چن • 2024-03-20"
        );
    }

    #[test]
    fn counters_use_plain_digits() {
        let topics = SeedTopics.load().unwrap();
        assert_eq!(likes_label(&topics[2]), "312 👍");
        assert_eq!(replies_label(&topics[1]), "156 💬");
    }

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("hello world", 6), "hello…");
        assert_eq!(truncate_to_width("hi", 6), "hi");
        assert_eq!(truncate_to_width("hello", 0), "");
        // Wide CJK characters take two columns each
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }
}
