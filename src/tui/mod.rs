// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, animation ticks)
// - Mapping keys to selection changes

pub mod app;
pub mod components;
pub mod layout;
pub mod transition;
pub mod ui;

use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Frame interval while a transition runs; idle frames are much rarer
const ANIMATION_TICK: Duration = Duration::from_millis(40);
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Run the TUI until the user quits
///
/// Sets up the terminal, runs the event loop, and restores the terminal even
/// when the loop fails.
pub async fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = run_event_loop(&mut terminal, &mut app).await;

    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Each iteration waits up to one frame for input, then advances
/// time-driven state (transitions, toast expiry).
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        let tick = if app.transition.is_animating() {
            ANIMATION_TICK
        } else {
            IDLE_TICK
        };

        if let Some(Event::Key(key_event)) = poll_input(tick).await? {
            handle_key_event(app, key_event, Instant::now());
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Wait up to `timeout` for a terminal event without blocking the runtime
async fn poll_input(timeout: Duration) -> Result<Option<Event>> {
    tokio::task::spawn_blocking(move || -> Result<Option<Event>> {
        if event::poll(timeout).context("Failed to poll terminal events")? {
            Ok(Some(event::read().context("Failed to read terminal event")?))
        } else {
            Ok(None)
        }
    })
    .await
    .context("Input task panicked")?
}

/// Map a key press to an app action
pub fn handle_key_event(app: &mut App, key_event: KeyEvent, now: Instant) {
    // Terminals that report releases would otherwise trigger twice
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true
        }

        // Tabs
        KeyCode::Tab | KeyCode::Right => app.next_tab(now),
        KeyCode::BackTab | KeyCode::Left => app.prev_tab(now),
        KeyCode::Char(c @ '1'..='3') => {
            let idx = (c as usize) - ('1' as usize);
            app.set_mode(crate::topics::SortMode::ALL[idx], now);
        }

        // Category filter
        KeyCode::Char('c') => app.cycle_category(now),
        KeyCode::Char('0') => app.clear_category(now),

        // Row highlight
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),

        KeyCode::Char('r') => app.reload(now),
        _ => {}
    }
}
