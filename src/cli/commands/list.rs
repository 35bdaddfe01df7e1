use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::period::current_period_start;
use crate::core::calculator::reconcile::ReconcileOutcome;
use crate::core::refresh::RefreshLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::{colorize_yes_no, separator_char};
use crate::utils::table::Table;
use chrono::{DateTime, Utc};

/// List all habits. Missed periods are registered before printing.
pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::List = cmd {
        let mut pool = open_db(cfg)?;
        let refreshed = RefreshLogic::refresh_all(&mut pool, now)?;

        if refreshed.is_empty() {
            info("No habits yet. Create one with `rhabits add <NAME>`.");
            return Ok(());
        }

        if cfg.show_reconcile_status {
            for (habit, _, outcome) in &refreshed {
                if let ReconcileOutcome::Backfilled { .. } = outcome {
                    info(format!("Habit {}: {}", habit.name, outcome));
                }
            }
        }

        header("Habits");

        let mut table = Table::new(vec![
            "Name",
            "Specification",
            "Periodicity",
            "Created on",
            "Periods",
            "Done this period",
        ]);

        for (habit, series, _) in &refreshed {
            let current = current_period_start(habit.anchor(), habit.periodicity, now);
            let done = series
                .last()
                .is_some_and(|r| r.period_start >= current && r.completed);

            let done_cell = if habit.is_demo() {
                "demo".to_string()
            } else {
                colorize_yes_no(done)
            };

            table.add_row(vec![
                habit.name.clone(),
                habit.specification.clone(),
                habit.periodicity.to_string(),
                habit.created_on(),
                series.len().to_string(),
                done_cell,
            ]);
        }

        print!("{}", table.render(separator_char(&cfg.separator_char)));
    }

    Ok(())
}
