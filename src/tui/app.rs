// TUI application state
//
// Holds the topic store, the caller-owned selection and the derived view.
// Every change to the selection or the store re-derives the view from
// scratch; a change of selection key also starts a list transition.

use super::components::toast::Toast;
use super::transition::Transition;
use crate::config::{Config, DisplayConfig};
use crate::logging::LogBuffer;
use crate::theme::Theme;
use crate::topics::{categories, Selection, SortMode, Topic, TopicLoadError, TopicSource};
use std::time::{Duration, Instant};

/// Main application state for the TUI
pub struct App {
    source: Box<dyn TopicSource + Send + Sync>,

    /// The loaded store, read-only between reloads
    pub topics: Vec<Topic>,

    /// Active tab and category filter
    pub selection: Selection,

    /// Derived view for the current selection
    pub view: Vec<Topic>,

    /// Highlighted row in `view`
    pub selected: usize,

    pub transition: Transition,

    pub theme: Theme,

    pub display: DisplayConfig,

    pub toast: Option<Toast>,

    /// Log buffer for the status line
    pub log_buffer: LogBuffer,

    pub should_quit: bool,

    start_time: Instant,
}

impl App {
    /// Load the store from `source` and derive the initial view
    pub fn new(
        config: &Config,
        source: Box<dyn TopicSource + Send + Sync>,
        log_buffer: LogBuffer,
    ) -> Result<Self, TopicLoadError> {
        let topics = source.load()?;
        tracing::info!(source = %source.describe(), count = topics.len(), "Loaded topics");

        let theme = Theme::by_name(&config.theme);
        tracing::debug!(theme = %theme.name, "Selected theme");

        let mut app = Self {
            source,
            topics,
            selection: Selection::new(config.tab.clone(), config.category.clone()),
            view: Vec::new(),
            selected: 0,
            transition: Transition::new(config.display.transition_duration()),
            theme,
            display: config.display.clone(),
            toast: None,
            log_buffer,
            should_quit: false,
            start_time: Instant::now(),
        };
        app.refresh();
        Ok(app)
    }

    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    /// Re-derive the view for the current selection and store
    pub fn refresh(&mut self) {
        self.view = self
            .selection
            .apply(&self.topics)
            .into_iter()
            .cloned()
            .collect();
        self.selected = self.selected.min(self.view.len().saturating_sub(1));
    }

    /// Replace the selection; a new key retires the on-screen list
    pub fn set_selection(&mut self, selection: Selection, now: Instant) {
        if selection == self.selection {
            return;
        }

        if selection.transition_key() != self.selection.transition_key() {
            let on_screen = std::mem::take(&mut self.view);
            self.transition.begin(on_screen, now);
            self.selected = 0;
        }

        tracing::debug!(key = %selection.transition_key(), "Selection changed");
        self.selection = selection;
        self.refresh();
    }

    pub fn mode(&self) -> SortMode {
        self.selection.mode()
    }

    pub fn set_mode(&mut self, mode: SortMode, now: Instant) {
        let selection = Selection::new(mode.as_tab(), self.selection.selected_category.clone());
        self.set_selection(selection, now);
    }

    pub fn next_tab(&mut self, now: Instant) {
        self.set_mode(self.mode().next(), now);
    }

    pub fn prev_tab(&mut self, now: Instant) {
        self.set_mode(self.mode().prev(), now);
    }

    /// Step the category filter: all → first category → … → last → all
    pub fn cycle_category(&mut self, now: Instant) {
        let next = {
            let available = categories(&self.topics);
            match self.selection.category() {
                None => available.first().map(|c| c.to_string()),
                Some(current) => match available.iter().position(|c| *c == current) {
                    Some(i) => available.get(i + 1).map(|c| c.to_string()),
                    // Unknown category from the command line: start over
                    None => available.first().map(|c| c.to_string()),
                },
            }
        };

        let selection = Selection::new(self.selection.active_tab.clone(), next);
        self.set_selection(selection, now);
    }

    pub fn clear_category(&mut self, now: Instant) {
        let selection = Selection::new(self.selection.active_tab.clone(), None);
        self.set_selection(selection, now);
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.view.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.view.len().saturating_sub(1);
    }

    /// Reload the store from its source
    ///
    /// The selection key is unchanged, so the list stays mounted and rows
    /// that changed position settle in place. On failure the previous store
    /// stays.
    pub fn reload(&mut self, now: Instant) {
        match self.source.load() {
            Ok(topics) => {
                tracing::info!(count = topics.len(), "Reloaded topics");
                self.show_toast(format!("✓ {} topics reloaded", topics.len()));
                self.topics = topics;
                let before = std::mem::take(&mut self.view);
                self.refresh();
                self.transition.reorder(&before, &self.view, now);
            }
            Err(e) => {
                tracing::warn!("Reload failed: {}", e);
                self.toast = Some(Toast::error(format!("✗ {}", e)));
            }
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Advance time-driven state (transitions, toast expiry)
    pub fn tick(&mut self, now: Instant) {
        self.transition.tick(now);
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
    }

    pub fn uptime(&self) -> Duration {
        self.start_time.elapsed()
    }
}
