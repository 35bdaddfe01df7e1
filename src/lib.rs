//! rHabits library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::{DateTime, Utc};
use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, now),
        Commands::Check { .. } => cli::commands::check::handle(&cli.command, cfg, now),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List => cli::commands::list::handle(&cli.command, cfg, now),
        Commands::Analyze { .. } => cli::commands::analyze::handle(&cli.command, cfg, now),
        Commands::Details { .. } => cli::commands::details::handle(&cli.command, cfg, now),
        Commands::Demo { .. } => cli::commands::demo::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, now),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load the config once
    let mut cfg = Config::load()?;

    // 3️⃣ apply the database override from the command line
    //    (relative names live in the config directory, as with `init`)
    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::resolve_under(&Config::config_dir(), custom_db)
            .to_string_lossy()
            .to_string();
    }

    // 4️⃣ reference clock for every period computation of this run
    let now = utils::date::resolve_now(cli.now.as_deref())?;

    dispatch(&cli, &cfg, now)
}
