use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::queries::load_habit;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { name, yes } = cmd {
        let mut pool = open_db(cfg)?;

        // fail early on unknown names, before prompting
        let habit = load_habit(&pool, name)?;

        let prompt = format!(
            "Delete habit '{}' ({}, {}) and all its recorded periods? This action is irreversible.",
            habit.name, habit.periodicity, habit.specification
        );

        if !*yes && !confirm(&prompt)? {
            info("Operation cancelled.");
            return Ok(());
        }

        let periods = DeleteLogic::apply(&mut pool, &habit.name)?;
        success(format!(
            "Habit '{}' successfully deleted ({} recorded period(s) removed).",
            habit.name, periods
        ));
    }

    Ok(())
}
