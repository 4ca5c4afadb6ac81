//! Toast notification component
//!
//! A non-blocking overlay in the bottom-right corner that disappears after a
//! short while. Used for reload results.

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// A toast notification that auto-dismisses
pub struct Toast {
    pub message: String,
    created_at: Instant,
    duration: Duration,
    error: bool,
}

impl Toast {
    /// Informational toast, shown for 2 seconds
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            duration: Duration::from_secs(2),
            error: false,
        }
    }

    /// Error toast, shown for 4 seconds
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            duration: Duration::from_secs(4),
            error: true,
            ..Self::new(message)
        }
    }

    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= self.duration
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        // 1 line of text, 2 columns padding each side
        let width = (self.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        let x = area.right().saturating_sub(width + 2);
        let y = area.bottom().saturating_sub(height + 2);
        let toast_area = Rect::new(x, y, width, height).intersection(area);
        if toast_area.is_empty() {
            return;
        }

        let accent = if self.error { theme.error } else { theme.highlight };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(self.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry() {
        let toast = Toast::new("hi");
        let now = Instant::now();
        assert!(!toast.is_expired(now));
        assert!(toast.is_expired(now + Duration::from_secs(3)));

        let error = Toast::error("boom");
        assert!(error.is_error());
        assert!(!error.is_expired(now + Duration::from_secs(3)));
    }
}
