//! Ordered, gap-free time series of period outcomes for one habit.

use super::period_record::PeriodRecord;
use super::periodicity::Periodicity;
use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodSeries {
    periodicity: Periodicity,
    records: Vec<PeriodRecord>,
}

impl PeriodSeries {
    pub fn new(periodicity: Periodicity) -> Self {
        Self {
            periodicity,
            records: Vec::new(),
        }
    }

    /// Build a series from already ordered records (e.g. loaded from the
    /// database), rejecting gaps and duplicates.
    pub fn from_records(periodicity: Periodicity, records: Vec<PeriodRecord>) -> AppResult<Self> {
        let mut series = Self::new(periodicity);
        series.extend(records)?;
        Ok(series)
    }

    pub fn periodicity(&self) -> Periodicity {
        self.periodicity
    }

    pub fn records(&self) -> &[PeriodRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn last(&self) -> Option<&PeriodRecord> {
        self.records.last()
    }

    pub fn last_start(&self) -> Option<NaiveDate> {
        self.records.last().map(|r| r.period_start)
    }

    /// Start the next appended record must have, if the series is non-empty.
    pub fn expected_next_start(&self) -> Option<NaiveDate> {
        self.last_start().map(|s| s + self.periodicity.length())
    }

    /// Append one record. Its start must be exactly one period after the
    /// current last record; an empty series accepts any start.
    pub fn push(&mut self, record: PeriodRecord) -> AppResult<()> {
        if let Some(expected) = self.expected_next_start()
            && record.period_start != expected
        {
            return Err(AppError::ContiguityViolation {
                expected,
                got: record.period_start,
            });
        }
        self.records.push(record);
        Ok(())
    }

    /// Bulk append. All-or-nothing: on a contiguity error the series is
    /// left as it was.
    pub fn extend<I>(&mut self, records: I) -> AppResult<()>
    where
        I: IntoIterator<Item = PeriodRecord>,
    {
        let before = self.records.len();
        for r in records {
            if let Err(e) = self.push(r) {
                self.records.truncate(before);
                return Err(e);
            }
        }
        Ok(())
    }

    /// Records appended after the first `stored` ones, i.e. what still has to
    /// be persisted when the series was loaded with `stored` rows.
    pub fn tail_from(&self, stored: usize) -> &[PeriodRecord] {
        &self.records[stored.min(self.records.len())..]
    }

    pub fn success_count(&self) -> usize {
        self.records.iter().filter(|r| r.completed).count()
    }
}
