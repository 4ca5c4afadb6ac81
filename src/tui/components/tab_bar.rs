// Tab bar component
//
// Sort tabs on one side, the active category filter on the other. In RTL
// the tabs read from the right edge.

use crate::config::Direction;
use crate::topics::SortMode;
use crate::tui::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction as Axis, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Label for "no category filter"
const ALL_CATEGORIES: &str = "همه";

pub fn category_label(category: Option<&str>) -> String {
    format!("دسته‌بندی: {}", category.unwrap_or(ALL_CATEGORIES))
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let rtl = app.display.direction == Direction::Rtl;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Axis::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);
    let (tabs_area, category_area) = if rtl {
        (chunks[1], chunks[0])
    } else {
        (chunks[0], chunks[1])
    };

    // Tabs widget draws left to right; reverse the order so RTL reads from the right
    let mut modes: Vec<SortMode> = SortMode::ALL.to_vec();
    if rtl {
        modes.reverse();
    }
    let active = app.mode();
    let selected = modes.iter().position(|m| *m == active).unwrap_or(0);
    // Number keys select tabs in canonical order
    let titles: Vec<String> = modes
        .iter()
        .map(|mode| format!("{} {}", mode.index() + 1, mode.label()))
        .collect();
    // Each tab is padded by one column per side, with a one-column divider between
    let needed: u16 = titles.iter().map(|t| t.width() as u16 + 3).sum::<u16>().saturating_sub(1);

    let tabs = Tabs::new(titles.into_iter().map(Line::from))
        .select(selected)
        .style(Style::default().fg(theme.tab_inactive))
        .highlight_style(
            Style::default()
                .fg(theme.tab_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", Style::default().fg(theme.border)));

    if rtl {
        // Right-align the tab strip by trimming unused space on its left
        let offset = tabs_area.width.saturating_sub(needed);
        let shifted = Rect::new(
            tabs_area.x + offset,
            tabs_area.y,
            tabs_area.width - offset,
            tabs_area.height,
        );
        f.render_widget(tabs, shifted);
    } else {
        f.render_widget(tabs, tabs_area);
    }

    let category = Paragraph::new(category_label(app.selection.category()))
        .alignment(if rtl { Alignment::Left } else { Alignment::Right })
        .style(Style::default().fg(theme.meta));
    f.render_widget(category, category_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_label_defaults_to_all() {
        assert_eq!(category_label(None), "دسته‌بندی: همه");
        assert_eq!(category_label(Some("طراحی")), "دسته‌بندی: طراحی");
    }
}
