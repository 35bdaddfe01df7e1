use crate::core::calculator::streak::{PeriodRow, StreakReport, analyze_series, period_rows};
use crate::core::refresh::RefreshLogic;
use crate::db::pool::DbPool;
use crate::db::queries::load_habit;
use crate::errors::AppResult;
use crate::models::habit::Habit;
use crate::models::periodicity::Periodicity;
use crate::models::series::PeriodSeries;
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

/// Which habits an overview covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PeriodFilter {
    #[default]
    All,
    Daily,
    Weekly,
}

impl PeriodFilter {
    pub fn matches(&self, p: Periodicity) -> bool {
        match self {
            PeriodFilter::All => true,
            PeriodFilter::Daily => p == Periodicity::Daily,
            PeriodFilter::Weekly => p == Periodicity::Weekly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PeriodFilter::All => "all",
            PeriodFilter::Daily => "daily",
            PeriodFilter::Weekly => "weekly",
        }
    }
}

/// Overview ordering. `Streak` puts the longest streak first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    #[default]
    Name,
    Created,
    Streak,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Created => "date of creation",
            SortKey::Streak => "streak",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HabitAnalysis {
    pub name: String,
    pub specification: String,
    pub periodicity: Periodicity,
    pub created_on: String,
    #[serde(skip)]
    pub created_at: DateTime<Utc>,
    pub report: StreakReport,
}

impl HabitAnalysis {
    pub fn new(habit: &Habit, series: &PeriodSeries) -> Self {
        Self {
            name: habit.name.clone(),
            specification: habit.specification.clone(),
            periodicity: habit.periodicity,
            created_on: habit.created_on(),
            created_at: habit.created_at,
            report: analyze_series(series),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HabitDetails {
    pub analysis: HabitAnalysis,
    pub periods: Vec<PeriodRow>,
}

pub struct AnalyzeLogic;

impl AnalyzeLogic {
    /// Filter and order analyses. Sorting is stable, so equal keys keep
    /// registry order.
    pub fn select(
        mut analyses: Vec<HabitAnalysis>,
        filter: PeriodFilter,
        sort: SortKey,
    ) -> Vec<HabitAnalysis> {
        analyses.retain(|a| filter.matches(a.periodicity));

        match sort {
            SortKey::Name => analyses.sort_by(|a, b| a.name.cmp(&b.name)),
            SortKey::Created => analyses.sort_by_key(|a| a.created_at),
            SortKey::Streak => {
                analyses.sort_by(|a, b| b.report.longest_streak.cmp(&a.report.longest_streak))
            }
        }

        analyses
    }

    /// Reconcile every habit and build the overview.
    pub fn overview(
        pool: &mut DbPool,
        now: DateTime<Utc>,
        filter: PeriodFilter,
        sort: SortKey,
    ) -> AppResult<Vec<HabitAnalysis>> {
        let analyses = RefreshLogic::refresh_all(pool, now)?
            .iter()
            .map(|(habit, series, _)| HabitAnalysis::new(habit, series))
            .collect();

        Ok(Self::select(analyses, filter, sort))
    }

    /// Analysis plus the chronological per-period listing of one habit.
    pub fn details(pool: &mut DbPool, name: &str, now: DateTime<Utc>) -> AppResult<HabitDetails> {
        let habit = load_habit(pool, name)?;
        let (series, _) = RefreshLogic::refresh_habit(pool, &habit, now)?;

        Ok(HabitDetails {
            analysis: HabitAnalysis::new(&habit, &series),
            periods: period_rows(&series),
        })
    }
}
