use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use chrono::{DateTime, Utc};

pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        habit,
        force,
    } = cmd
    {
        let mut pool = open_db(cfg)?;
        ExportLogic::export(&mut pool, *format, file, habit.as_deref(), *force, now)?;
    }
    Ok(())
}
