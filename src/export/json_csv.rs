use crate::errors::{AppError, AppResult};
use crate::export::PeriodExport;
use std::fs;
use std::path::Path;

pub(crate) fn export_json(rows: &[PeriodExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    fs::write(path, json)?;
    Ok(())
}

/// Header row comes from the serde field names of [`PeriodExport`].
pub(crate) fn export_csv(rows: &[PeriodExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
