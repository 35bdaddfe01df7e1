pub mod habit;
pub mod period_record;
pub mod periodicity;
pub mod series;
