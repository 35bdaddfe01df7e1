use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::demo::{DemoLogic, DemoWindow};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date::parse_date;

fn window_from_config(cfg: &Config) -> AppResult<DemoWindow> {
    let start = parse_date(&cfg.demo_window_start)
        .ok_or_else(|| AppError::InvalidDate(cfg.demo_window_start.clone()))?;
    let end = parse_date(&cfg.demo_window_end)
        .ok_or_else(|| AppError::InvalidDate(cfg.demo_window_end.clone()))?;
    DemoWindow::new(start, end)
}

/// Create a random demo habit inside the configured demo window.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Demo { period, seed } = cmd {
        let window = window_from_config(cfg)?;
        let mut pool = open_db(cfg)?;

        let (habit, series) = DemoLogic::apply(&mut pool, *period, window, *seed)?;

        success(format!(
            "Created the {} demo habit '{}' with {} period(s) ({} checked-off).",
            habit.periodicity,
            habit.name,
            series.len(),
            series.success_count()
        ));
        info("Demo habits are read-only: they cannot be checked-off.");
    }

    Ok(())
}
