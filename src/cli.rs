// CLI module - command-line argument parsing and handlers
//
// Without a subcommand the TUI starts. Subcommands:
// - list: print the derived view once (text or JSON)
// - categories: print the categories present in the store
// - config --show|--path|--reset: inspect or regenerate the config file

use crate::config::{Config, VERSION};
use crate::output::OutputFormat;
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;

/// Browse forum topics sorted by recency, likes or replies
#[derive(Parser, Debug)]
#[command(name = "topicboard")]
#[command(version = VERSION)]
#[command(about = "Browse forum topics in the terminal", long_about = None)]
pub struct Cli {
    /// Topic file (JSON array or TOML [[topics]]); overrides config
    #[arg(long, global = true)]
    pub topics: Option<PathBuf>,

    /// Active tab: newest, most-liked, most-replied (anything else sorts by date)
    #[arg(long, global = true)]
    pub tab: Option<String>,

    /// Only show topics in this category (exact match)
    #[arg(long, global = true)]
    pub category: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the sorted, filtered topic list and exit
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the categories present in the topic store
    Categories,

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

impl Cli {
    /// Fold command-line overrides into the loaded config (flags beat env and file)
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.topics {
            config.topics_file = Some(path.clone());
        }
        if let Some(tab) = &self.tab {
            config.tab = tab.clone();
        }
        if let Some(category) = &self.category {
            config.category = Some(category.clone()).filter(|c| !c.is_empty());
        }
    }
}

pub fn handle_config(show: bool, reset: bool, path: bool, config: &Config) -> Result<()> {
    if path {
        let path = Config::config_path().context("Could not determine config path")?;
        println!("{}", path.display());
    } else if show {
        println!("# Effective configuration (flags > env > file > defaults)");
        println!();
        print!("{}", config.to_toml());
    } else if reset {
        handle_config_reset()?;
    } else {
        println!("Usage: topicboard config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
    }
    Ok(())
}

fn handle_config_reset() -> Result<()> {
    let Some(path) = Config::config_path() else {
        bail!("Could not determine config path");
    };

    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "topicboard",
            "list",
            "--tab",
            "most-liked",
            "--category",
            "طراحی",
            "--format",
            "json",
        ]);
        let mut config = Config::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.tab, "most-liked");
        assert_eq!(config.category.as_deref(), Some("طراحی"));
        assert!(matches!(
            cli.command,
            Some(Commands::List {
                format: OutputFormat::Json
            })
        ));
    }

    #[test]
    fn no_subcommand_runs_tui() {
        let cli = Cli::parse_from(["topicboard", "--tab", "most-replied"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.tab.as_deref(), Some("most-replied"));
    }
}
