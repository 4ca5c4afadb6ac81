// Topic list component
//
// One bordered card per topic in the derived view. During a transition the
// card stack is drawn with the frame's row offset and, while faded, in the
// muted palette. Cards that would be clipped by the list area are skipped.

use super::formatters::{likes_label, meta_line, replies_label, truncate_to_width};
use crate::config::Direction;
use crate::topics::Topic;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Alignment, Constraint, Direction as Axis, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

/// Shown when the derived view is empty (e.g. unknown category)
const EMPTY_MESSAGE: &str = "موضوعی یافت نشد";

/// Render the list for the current transition frame
pub fn render(f: &mut Frame, area: Rect, app: &App, now: Instant) {
    let frame = app.transition.frame(now);
    let rows: &[Topic] = if frame.outgoing {
        app.transition.outgoing()
    } else {
        &app.view
    };

    if rows.is_empty() {
        if !frame.outgoing {
            render_empty(f, area, app, frame.faded);
        }
        return;
    }

    let bp = Breakpoint::from_width(area.width);
    let card_height = bp.card_height();
    let visible = usize::from((area.height / card_height).max(1));

    // Keep the highlighted card on screen; retired rows always start at the top
    let first = if frame.outgoing {
        0
    } else {
        app.selected.saturating_sub(visible - 1)
    };

    let mut top = i32::from(area.y) + i32::from(frame.offset);
    for (idx, topic) in rows.iter().enumerate().skip(first) {
        let card_top = top;
        top += i32::from(card_height);

        if card_top < i32::from(area.y) {
            continue;
        }
        if card_top + i32::from(card_height) > i32::from(area.bottom()) {
            break;
        }

        let rect = Rect::new(area.x, card_top as u16, area.width, card_height);
        let highlighted = !frame.outgoing && idx == app.selected;
        let faded = frame.faded || app.transition.is_moving(topic.id, now);
        render_card(f, rect, topic, bp, highlighted, faded, app);
    }
}

fn render_empty(f: &mut Frame, area: Rect, app: &App, faded: bool) {
    let theme = &app.theme;
    let fg = if faded { theme.border } else { theme.muted };
    let message = Paragraph::new(EMPTY_MESSAGE)
        .alignment(Alignment::Center)
        .style(Style::default().fg(fg));

    let line = Rect::new(area.x, area.y + area.height / 2, area.width, 1.min(area.height));
    f.render_widget(message, line);
}

fn render_card(
    f: &mut Frame,
    area: Rect,
    topic: &Topic,
    bp: Breakpoint,
    highlighted: bool,
    faded: bool,
    app: &App,
) {
    let theme = &app.theme;
    let style = app.display.date_style;

    let (title_fg, meta_fg, counter_fg) = if faded {
        (theme.muted, theme.muted, theme.muted)
    } else {
        (theme.title, theme.meta, theme.counter)
    };
    let border_fg = if highlighted && !faded {
        theme.highlight
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_fg))
        .style(Style::default().bg(theme.card));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rtl = app.display.direction == Direction::Rtl;
    let counter_width = bp.counter_width().min(inner.width / 2);
    let constraints = if rtl {
        [Constraint::Length(counter_width), Constraint::Min(0)]
    } else {
        [Constraint::Min(0), Constraint::Length(counter_width)]
    };
    let chunks = Layout::default()
        .direction(Axis::Horizontal)
        .constraints(constraints)
        .split(inner);
    let (counter_area, text_area) = if rtl {
        (chunks[0], chunks[1])
    } else {
        (chunks[1], chunks[0])
    };

    // Title and author/date
    let text_width = usize::from(text_area.width.saturating_sub(1));
    let mut lines = vec![Line::from(Span::styled(
        truncate_to_width(&topic.title, text_width),
        Style::default().fg(title_fg).add_modifier(Modifier::BOLD),
    ))];
    if bp.shows_meta() {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&meta_line(topic, style), text_width),
            Style::default().fg(meta_fg),
        )));
    }
    let text_alignment = if rtl {
        Alignment::Right
    } else {
        Alignment::Left
    };
    f.render_widget(Paragraph::new(lines).alignment(text_alignment), text_area);

    // Counters sit on the outer edge: left in RTL, right in LTR
    let counters = Line::from(vec![
        Span::styled(likes_label(topic), Style::default().fg(counter_fg)),
        Span::raw("  "),
        Span::styled(replies_label(topic), Style::default().fg(counter_fg)),
    ]);
    let counter_alignment = if rtl {
        Alignment::Left
    } else {
        Alignment::Right
    };
    f.render_widget(
        Paragraph::new(counters).alignment(counter_alignment),
        counter_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::locale::DateStyle;
    use crate::logging::LogBuffer;
    use crate::topics::SeedTopics;
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render(f, area, app, Instant::now())
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    fn ltr_app(category: Option<&str>) -> App {
        let mut config = Config::default();
        config.display.direction = Direction::Ltr;
        config.display.date_style = DateStyle::Iso;
        config.display.transition_ms = 0;
        config.category = category.map(str::to_string);
        App::new(&config, Box::new(SeedTopics), LogBuffer::new()).unwrap()
    }

    #[test]
    fn renders_cards_in_view_order() {
        let app = ltr_app(None);
        let text = screen_text(&app, 80, 24);

        let first = text.find("245").unwrap();
        let second = text.find("189").unwrap();
        assert!(first < second, "newest topic should be drawn first");
    }

    #[test]
    fn empty_view_shows_message() {
        let app = ltr_app(Some("nonexistent-category"));
        let text = screen_text(&app, 60, 10);
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(!text.contains("245"));
    }

    #[test]
    fn short_area_clips_to_whole_cards() {
        let app = ltr_app(None);
        // Room for exactly two 4-row cards
        let text = screen_text(&app, 80, 9);
        assert!(text.contains("245"));
        assert!(text.contains("189"));
        assert!(!text.contains("312"));
    }

    #[test]
    fn persian_dates_keep_ascii_counters() {
        let mut config = Config::default();
        config.display.direction = Direction::Ltr;
        config.display.transition_ms = 0;
        let app = App::new(&config, Box::new(SeedTopics), LogBuffer::new()).unwrap();
        let text = screen_text(&app, 80, 24);
        assert!(text.contains("245"));
        assert!(!text.contains("۲۴۵"));
    }
}
