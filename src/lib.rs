//! pairtime library root.
//! Exposes the analysis core, the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::Path;

pub use crate::core::logic::{Analysis, Core};
pub use crate::core::parser::RecordParser;
pub use crate::core::ranking::Report;
pub use errors::{AppError, LoadError, RecordError};
pub use models::{PairKey, PairOrder, ProjectPairKey, WorkRecord};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg),
        Commands::Pairs { .. } => cli::commands::pairs::handle(&cli.command, cfg),
        Commands::Interactive { .. } => cli::commands::interactive::handle(&cli.command, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg, config_path),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .as_deref()
        .map(utils::path::expand_tilde)
        .unwrap_or_else(Config::config_file);
    let cfg = Config::load_from(&config_path)?;

    utils::logger::init(cli.verbose, &cfg.log_filter);
    tracing::debug!(config = %config_path.display(), "configuration loaded");

    dispatch(&cli, &cfg, &config_path)
}
