// Headless output
//
// Prints the derived view once, as readable text or as a JSON array of
// topic records. No transitions: every invocation is a fresh render.

use crate::locale::DateStyle;
use crate::topics::Topic;
use crate::tui::components::formatters::{likes_label, meta_line, replies_label};
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Two lines per topic
    #[default]
    Text,
    /// JSON array with the topic records
    Json,
}

pub fn write_view<W: Write>(
    out: &mut W,
    view: &[&Topic],
    format: OutputFormat,
    style: DateStyle,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(out, view, style),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, view).context("Failed to encode topics")?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn write_text<W: Write>(out: &mut W, view: &[&Topic], style: DateStyle) -> Result<()> {
    if view.is_empty() {
        writeln!(out, "(no topics)")?;
        return Ok(());
    }

    for topic in view {
        writeln!(out, "#{} {}", topic.id, topic.title)?;
        writeln!(
            out,
            "   {}  │  {}  {}",
            meta_line(topic, style),
            likes_label(topic),
            replies_label(topic)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::{derive_view, SeedTopics, TopicSource};

    fn render(tab: &str, category: Option<&str>, format: OutputFormat) -> String {
        let topics = SeedTopics.load().unwrap();
        let view = derive_view(&topics, tab, category);
        let mut out = Vec::new();
        write_view(&mut out, &view, format, DateStyle::Iso).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn text_lists_topics_in_view_order() {
        let text = render("most-liked", None, OutputFormat::Text);
        let ids: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with('#'))
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(ids, vec!["#3", "#1", "#2", "#4", "#5"]);
        assert!(text.contains("312 👍"));
    }

    #[test]
    fn json_round_trips_records() {
        let json = render("most-replied", None, OutputFormat::Json);
        let parsed: Vec<Topic> = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed.iter().map(|t| t.id).collect::<Vec<_>>(),
            vec![2, 1, 3, 4, 5]
        );
        assert!(json.contains("\"date\": \"2024-03-19\""));
    }

    #[test]
    fn empty_view() {
        assert_eq!(
            render("newest", Some("nonexistent-category"), OutputFormat::Text),
            "(no topics)\n"
        );
        assert_eq!(
            render("newest", Some("nonexistent-category"), OutputFormat::Json).trim(),
            "[]"
        );
    }
}
