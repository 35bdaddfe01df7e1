use crate::cli::parser::Commands;
use crate::cli::commands::open_db;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::{DateTime, Utc};

/// Create a new habit.
pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Add { name, spec, period } = cmd {
        //
        // 1. Resolve periodicity (default from config)
        //
        let periodicity = match period {
            Some(p) => *p,
            None => cfg.default_periodicity()?,
        };

        //
        // 2. Open DB and create
        //
        let mut pool = open_db(cfg)?;
        let habit = AddLogic::apply(&mut pool, name, spec, periodicity, now)?;

        success(format!(
            "Successfully created the {} habit '{}'. Good luck!",
            habit.periodicity, habit.name
        ));
    }

    Ok(())
}
