use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyze::AnalyzeLogic;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::color_for_percentage;
use crate::utils::formatting::separator_char;
use crate::utils::table::Table;
use chrono::{DateTime, Utc};

/// Overview of all habits matching the periodicity filter.
pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Analyze { period, sort } = cmd {
        let mut pool = open_db(cfg)?;
        let analyses = AnalyzeLogic::overview(&mut pool, now, *period, *sort)?;

        if analyses.is_empty() {
            info("There are no habits to be analyzed!");
            return Ok(());
        }

        header(format!(
            "Analysis of {} habits (sorted by {})",
            period.label(),
            sort.label()
        ));

        let mut table = Table::new(vec![
            "Name",
            "Periodicity",
            "Periods",
            "Checked-off",
            "Percentage",
            "Longest streak",
            "Period longest streak",
        ]);

        for a in &analyses {
            let r = &a.report;
            table.add_row(vec![
                a.name.clone(),
                a.periodicity.to_string(),
                r.period_count.to_string(),
                r.success_count.to_string(),
                color_for_percentage(r.success_count, r.period_count, &r.success_percentage),
                r.longest_streak.to_string(),
                r.range_label(),
            ]);
        }

        print!("{}", table.render(separator_char(&cfg.separator_char)));
        println!();
        println!("Number of analyzed habits: {}", analyses.len());
    }

    Ok(())
}
