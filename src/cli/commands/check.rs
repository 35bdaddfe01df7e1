use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calculator::period::period_label;
use crate::core::calculator::reconcile::ReconcileOutcome;
use crate::core::check::CheckLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use chrono::{DateTime, Utc};

/// Check-off a habit. A refused check-off (demo data, already done for the
/// running period) is reported as a warning, not as a failure.
pub fn handle(cmd: &Commands, cfg: &Config, now: DateTime<Utc>) -> AppResult<()> {
    if let Commands::Check { name } = cmd {
        let mut pool = open_db(cfg)?;

        match CheckLogic::apply(&mut pool, name, now) {
            Ok(outcome) => {
                if cfg.show_reconcile_status
                    && let ReconcileOutcome::Backfilled { .. } = outcome.reconciled
                {
                    info(format!("Habit {}: {}", outcome.habit.name, outcome.reconciled));
                }

                success(format!(
                    "Successfully checked-off '{}' for {}!",
                    outcome.habit.name,
                    period_label(outcome.period_start, outcome.habit.periodicity)
                ));
            }
            Err(e) if e.is_check_off_refusal() => warning(e),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
