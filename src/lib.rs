//! FloatChat library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Dashboard { .. } => cli::commands::dashboard::handle(&cli.command, cfg),
        Commands::Floats { .. } => cli::commands::floats::handle(&cli.command, cfg),
        Commands::Regions => cli::commands::regions::handle(cfg),
        Commands::Alerts { .. } => cli::commands::alerts::handle(&cli.command),
        Commands::Profile => cli::commands::profile::handle(cfg),
        Commands::Measurements => cli::commands::measurements::handle(cfg),
        Commands::Oceans { .. } => cli::commands::oceans::handle(&cli.command, cfg),
        Commands::Compare { .. } => cli::commands::compare::handle(&cli.command),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command),
        Commands::Chat { .. } => cli::commands::chat::handle(cli, cfg),
        Commands::Prompts => cli::commands::prompts::handle(),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once (from --config when given)
    let path = cli.config_path();
    let cfg = match &cli.command {
        // config must stay inspectable even when the file does not parse
        Commands::Config { .. } | Commands::Init => {
            Config::load_from(&path).unwrap_or_else(|e| {
                log::warn!("{}: {}; using defaults", path.display(), e);
                Config::default()
            })
        }
        _ => Config::load_from(&path)?,
    };

    log::debug!("config loaded from {}", path.display());

    // 3️⃣ dispatch
    dispatch(&cli, &cfg)
}
