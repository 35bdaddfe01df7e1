use chrono::Duration;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Cadence of a habit. Fixes both the period length and the way the
/// period is rendered (single day vs. 7-day window).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Periodicity {
    #[value(alias = "d")]
    Daily,
    #[value(alias = "w", alias = "7d")]
    Weekly,
}

impl Periodicity {
    /// Period length in days.
    pub fn days(&self) -> i64 {
        match self {
            Periodicity::Daily => 1,
            Periodicity::Weekly => 7,
        }
    }

    pub fn length(&self) -> Duration {
        Duration::days(self.days())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Periodicity::Daily => "daily",
            Periodicity::Weekly => "weekly",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.label()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "daily" => Some(Periodicity::Daily),
            "weekly" => Some(Periodicity::Weekly),
            _ => None,
        }
    }

    /// Helper: convert user input (config file or prompt), case-insensitive.
    /// Also accepts the legacy "D" / "7d" codes.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "daily" | "d" => Some(Periodicity::Daily),
            "weekly" | "w" | "7d" => Some(Periodicity::Weekly),
            _ => None,
        }
    }
}

impl std::fmt::Display for Periodicity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
