// topicboard - forum topics in the terminal
//
// Shows a list of discussion topics sorted by recency, likes or replies and
// filtered by category, with animated transitions when the selection changes.
//
// Architecture:
// - Topics: the store (seed data or a topic file) and the pure derived view
// - TUI (ratatui): renders the derived view and maps keys to selection changes
// - Output: headless text/JSON rendering of the same view
// - Config: env > file > defaults, with command-line flags on top

mod cli;
mod config;
mod locale;
mod logging;
mod output;
mod theme;
mod topics;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::{Config, LoggingConfig};
use logging::{LogBuffer, TuiLogLayer};
use output::OutputFormat;
use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use tracing_appender::non_blocking::WorkerGuard;

/// Initialize tracing
///
/// In TUI mode logs are captured into `log_buffer` so they never garble the
/// alternate screen; otherwise they go to stderr. File logging (JSON, with
/// rotation) is added on top when enabled.
///
/// Precedence: RUST_LOG env var > config file > default "info".
/// The returned guard must live until exit so buffered file logs flush.
fn init_logging(
    config: &LoggingConfig,
    tui_mode: bool,
    log_buffer: &LogBuffer,
) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| config.filter_directive().into());

    let console = if tui_mode {
        TuiLogLayer::new(log_buffer.clone()).boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .boxed()
    };

    let (file_layer, guard) = if config.file_enabled {
        match config.file_appender() {
            Ok(appender) => {
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                let layer = tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(non_blocking)
                    .with_ansi(false);
                (Some(layer), Some(guard))
            }
            // No subscriber yet, so this can only go to stderr
            Err(e) => {
                eprintln!("Warning: file logging disabled: {:#}", e);
                (None, None)
            }
        }
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file_layer)
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env()?;
    cli.apply_overrides(&mut config);

    // The TUI needs a real terminal; anything else gets the headless list
    let tui_mode =
        cli.command.is_none() && config.enable_tui && std::io::stdout().is_terminal();

    let log_buffer = LogBuffer::new();
    let _file_guard = init_logging(&config.logging, tui_mode, &log_buffer);

    let source = topics::source_for(config.topics_file.as_deref());
    tracing::debug!(source = %source.describe(), tab = %config.tab, "Starting");

    match cli.command {
        Some(Commands::Config { show, reset, path }) => {
            cli::handle_config(show, reset, path, &config)?;
        }
        Some(Commands::Categories) => {
            let topics = source.load().context("Failed to load topics")?;
            for category in topics::categories(&topics) {
                println!("{}", category);
            }
        }
        Some(Commands::List { format }) => {
            print_view(&config, source.as_ref(), format)?;
        }
        None if tui_mode => {
            let app = tui::app::App::new(&config, source, log_buffer)
                .context("Failed to load topics")?;
            tracing::info!("Starting TUI");
            tui::run_tui(app).await?;
        }
        None => {
            tracing::info!("TUI disabled, printing topic list");
            print_view(&config, source.as_ref(), OutputFormat::Text)?;
        }
    }

    Ok(())
}

fn print_view(
    config: &Config,
    source: &(dyn topics::TopicSource + Send + Sync),
    format: OutputFormat,
) -> Result<()> {
    let topics = source.load().context("Failed to load topics")?;
    let view = topics::derive_view(&topics, &config.tab, config.category.as_deref());
    tracing::debug!(shown = view.len(), total = topics.len(), "Derived view");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::write_view(&mut out, &view, format, config.display.date_style)
}
