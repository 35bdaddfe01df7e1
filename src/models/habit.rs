use super::periodicity::Periodicity;
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Specification text given to generated demo habits.
pub const DEMO_SPECIFICATION: &str = "! DEMO ! DATA !";

/// Tracked habits follow the wall clock; demo habits carry a fixed,
/// pre-generated series and are never reconciled or checked-off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitKind {
    Tracked,
    Demo,
}

impl HabitKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            HabitKind::Tracked => "tracked",
            HabitKind::Demo => "demo",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "tracked" => Some(HabitKind::Tracked),
            "demo" => Some(HabitKind::Demo),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Habit {
    pub id: i64,                  // ⇔ habits.id
    pub name: String,             // ⇔ habits.name (UNIQUE)
    pub specification: String,    // ⇔ habits.specification
    pub periodicity: Periodicity, // ⇔ habits.periodicity ('daily' | 'weekly')
    pub kind: HabitKind,          // ⇔ habits.kind ('tracked' | 'demo')
    pub created_at: DateTime<Utc>, // ⇔ habits.created_at (TEXT, RFC 3339)
}

impl Habit {
    /// Build a not-yet-stored tracked habit (`id = 0`).
    pub fn new(
        name: &str,
        specification: &str,
        periodicity: Periodicity,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            name: name.trim().to_string(),
            specification: specification.trim().to_string(),
            periodicity,
            kind: HabitKind::Tracked,
            created_at,
        }
    }

    /// Build a not-yet-stored demo habit.
    pub fn demo(name: &str, periodicity: Periodicity, created_at: DateTime<Utc>) -> Self {
        Self {
            kind: HabitKind::Demo,
            ..Self::new(name, DEMO_SPECIFICATION, periodicity, created_at)
        }
    }

    pub fn is_demo(&self) -> bool {
        self.kind == HabitKind::Demo
    }

    /// Calendar date of period 0.
    pub fn anchor(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    pub fn created_on(&self) -> String {
        self.created_at.format("%Y-%m-%d").to_string()
    }
}
