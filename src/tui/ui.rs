// Frame layout
//
// ┌ title bar ─────────────────────────┐ 1 row
// │ tab bar                            │ 2 rows
// │ topic list                         │ rest
// └ status bar ────────────────────────┘ 1 row

use super::app::App;
use super::components::{status_bar, tab_bar, title_bar, topic_list};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};
use std::time::Instant;

pub fn draw(f: &mut Frame, app: &App) {
    let now = Instant::now();
    let area = f.area();

    f.render_widget(
        Block::default().style(
            Style::default()
                .bg(app.theme.background)
                .fg(app.theme.foreground),
        ),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    title_bar::render(f, chunks[0], app);
    tab_bar::render(f, chunks[1], app);
    topic_list::render(f, chunks[2], app, now);
    status_bar::render(f, chunks[3], app);

    if let Some(toast) = &app.toast {
        toast.render(f, area, &app.theme);
    }
}
