// Title bar component
//
// App name, where the topics came from, and how many are visible.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let line = Line::from(vec![
        Span::styled(
            " topicboard ",
            Style::default()
                .fg(theme.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("│ {} ", app.source_description()),
            Style::default().fg(theme.meta),
        ),
        Span::styled(
            format!("│ {}/{}", app.view.len(), app.topics.len()),
            Style::default().fg(theme.counter),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
