//! Pokedex - a searchable catalog browser for the terminal
//!
//! Subcommands browse, list and show entries from a static catalog file,
//! and `fetch` rebuilds that file from PokeAPI.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pokedex_core::config::PokedexConfig;

mod catalog_cli;
#[cfg(feature = "fetch")]
mod fetch_cli;
#[cfg(feature = "tui")]
mod tui;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "pokedex",
    about = "Searchable Pokédex catalog for the terminal",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "info", global = true)]
    log_level: LogLevel,

    /// Emit logs as JSON
    #[clap(long, global = true)]
    log_json: bool,

    /// Write logs to this file instead of stderr (always used by `browse`)
    #[clap(long, global = true)]
    log_file: Option<PathBuf>,

    /// Override configuration file path
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Override the catalog file from the configuration
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,

    /// Override the detail dataset from the configuration
    #[clap(long, global = true)]
    details: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Browse the catalog interactively
    #[cfg(feature = "tui")]
    Browse,

    /// List entries, optionally filtered by a name query
    List {
        /// Case-insensitive name query
        query: Option<String>,

        /// Output results as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show one entry by id
    Show {
        /// Entry id (e.g. 25)
        id: String,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Fetch localized names from PokeAPI and write the catalog file
    #[cfg(feature = "fetch")]
    Fetch(fetch_cli::FetchArgs),

    /// Print the effective configuration
    Config,
}

/// Initialize tracing with CLI flags
///
/// Logs go to stderr, or to `log_file` when given. The interactive browser
/// owns the terminal, so without a log file its logs are discarded.
fn initialize_tracing(cli: &Cli, interactive: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_directive()));

    let writer = match (&cli.log_file, interactive) {
        (Some(path), _) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::sync::Mutex::new(file))
        }
        (None, true) => tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::sink),
        (None, false) => tracing_subscriber::fmt::writer::BoxMakeWriter::new(std::io::stderr),
    };

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(writer)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_ansi(cli.log_file.is_none())
            .with_writer(writer)
            .init();
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<PokedexConfig> {
    let mut config =
        PokedexConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(path) = &cli.catalog {
        config.data.catalog_path = path.clone();
    }
    if let Some(path) = &cli.details {
        config.data.detail_path = Some(path.clone());
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "tui")]
    let interactive = matches!(cli.command, Command::Browse);
    #[cfg(not(feature = "tui"))]
    let interactive = false;

    initialize_tracing(&cli, interactive)?;

    let config = load_config(&cli)?;
    debug!("Effective configuration: {:?}", config);

    match cli.command {
        #[cfg(feature = "tui")]
        Command::Browse => tui::run(config).await,
        Command::List { query, json } => catalog_cli::execute_list(&config, query.as_deref(), json),
        Command::Show { id, json } => catalog_cli::execute_show(&config, &id, json),
        #[cfg(feature = "fetch")]
        Command::Fetch(args) => fetch_cli::execute_fetch(&config, args).await,
        Command::Config => {
            print!("{}", config.to_yaml()?);
            Ok(())
        }
    }
}
