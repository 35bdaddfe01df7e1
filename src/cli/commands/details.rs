use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyze::AnalyzeLogic;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::format_timestamp;
use crate::utils::formatting::{bold, colorize_optional, colorize_yes_no, separator_char};
use crate::utils::table::Table;
use chrono::{DateTime, Utc};

/// Detailed analysis of one habit, periods listed newest first.
pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Details { name } = cmd {
        let mut pool = open_db(cfg)?;
        let details = AnalyzeLogic::details(&mut pool, name, now)?;
        let a = &details.analysis;
        let r = &a.report;

        header(format!("Details of '{}'", a.name));

        let fields = [
            ("Name", a.name.clone()),
            ("Specification", a.specification.clone()),
            ("Periodicity", a.periodicity.to_string()),
            ("Number of periods", r.period_count.to_string()),
            ("Checked-off periods", r.success_count.to_string()),
            ("Percentage checked-off periods", r.success_percentage.clone()),
            ("Longest Streak", r.longest_streak.to_string()),
            ("Period Longest Streak", r.range_label()),
            ("Created on", a.created_on.clone()),
        ];

        for (label, value) in fields {
            println!("{:<32} {}", bold(&format!("{label}:")), value);
        }
        println!();

        let mut table = Table::new(vec!["Period", "Checked-off", "Completed at"]);
        for row in details.periods.iter().rev() {
            table.add_row(vec![
                row.label.clone(),
                colorize_yes_no(row.completed),
                colorize_optional(row.completed_at.as_ref().map(format_timestamp)),
            ]);
        }

        print!("{}", table.render(separator_char(&cfg.separator_char)));
    }

    Ok(())
}
