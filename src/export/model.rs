// src/export/model.rs

use crate::core::calculator::period::period_label;
use crate::models::habit::Habit;
use crate::models::period_record::PeriodRecord;
use serde::Serialize;

/// Flat row: one recorded period of one habit.
#[derive(Serialize, Clone, Debug)]
pub struct PeriodExport {
    pub habit: String,
    pub periodicity: String,
    pub demo: bool,
    pub period_start: String,
    pub period: String,
    pub completed: bool,
    pub completed_at: Option<String>,
}

impl PeriodExport {
    pub fn from_record(habit: &Habit, record: &PeriodRecord) -> Self {
        Self {
            habit: habit.name.clone(),
            periodicity: habit.periodicity.label().to_string(),
            demo: habit.is_demo(),
            period_start: record.start_str(),
            period: period_label(record.period_start, habit.periodicity),
            completed: record.completed,
            completed_at: record.completed_at.map(|ts| ts.to_rfc3339()),
        }
    }
}
