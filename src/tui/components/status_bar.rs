// Status bar component
//
// Key hints on the left, the newest log line on the right.

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
    Frame,
};

const HINTS_FULL: &str = " q quit │ ←/→ tab │ c category │ 0 all │ ↑/↓ move │ r reload";
const HINTS_COMPACT: &str = " q ←→ c 0 r";

/// Format uptime as `MM:SS`, or `H:MM:SS` past the hour
pub fn format_uptime(secs: u64) -> String {
    let (h, m, s) = (secs / 3600, (secs % 3600) / 60, secs % 60);
    if h > 0 {
        format!("{}:{:02}:{:02}", h, m, s)
    } else {
        format!("{:02}:{:02}", m, s)
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let hints = if bp >= Breakpoint::Wide {
        format!("{} │ {}", HINTS_FULL, format_uptime(app.uptime().as_secs()))
    } else if bp == Breakpoint::Normal {
        HINTS_FULL.to_string()
    } else {
        HINTS_COMPACT.to_string()
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Percentage(40)])
        .split(area);

    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(theme.status_bar)),
        chunks[0],
    );

    if let Some(entry) = app.log_buffer.latest() {
        let color = match entry.level {
            LogLevel::Error | LogLevel::Warn => theme.error,
            _ => theme.muted,
        };
        let text = format!(
            "{} {} {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.level.as_str(),
            entry.message
        );
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(color)),
            chunks[1],
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_format() {
        assert_eq!(format_uptime(5), "00:05");
        assert_eq!(format_uptime(65), "01:05");
        assert_eq!(format_uptime(3725), "1:02:05");
    }
}
