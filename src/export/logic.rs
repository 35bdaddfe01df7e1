use crate::core::refresh::RefreshLogic;
use crate::db::log::hlog_quiet;
use crate::db::pool::DbPool;
use crate::db::queries::{load_habit, load_habits};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, notify_export_success};
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::PeriodExport;
use crate::ui::messages::{info, warning};
use crate::utils::path::is_absolute;
use chrono::{DateTime, Utc};
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Reconciled per-period rows of one habit, or of every habit.
    pub fn collect(
        pool: &mut DbPool,
        habit: Option<&str>,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<PeriodExport>> {
        let habits = match habit {
            Some(name) => vec![load_habit(pool, name)?],
            None => load_habits(pool)?,
        };

        let mut rows = Vec::new();
        for h in &habits {
            let (series, _) = RefreshLogic::refresh_habit(pool, h, now)?;
            rows.extend(
                series
                    .records()
                    .iter()
                    .map(|r| PeriodExport::from_record(h, r)),
            );
        }
        Ok(rows)
    }

    /// Export the per-period listing.
    ///
    /// - `format`: csv | json
    /// - `file`: absolute path of the output file
    /// - `habit`: restrict to one habit (all habits when `None`)
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        habit: Option<&str>,
        force: bool,
        now: DateTime<Utc>,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !is_absolute(file) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let rows = Self::collect(pool, habit, now)?;

        if rows.is_empty() {
            warning("No recorded periods to export.");
            return Ok(0);
        }

        info(format!(
            "Exporting {} period(s) to {}: {}",
            rows.len(),
            format.as_str(),
            path.display()
        ));

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        notify_export_success(format, rows.len(), path);

        hlog_quiet(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} period(s) as {}", rows.len(), format.as_str()),
        );

        Ok(rows.len())
    }
}
