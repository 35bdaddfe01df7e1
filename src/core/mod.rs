pub mod add;
pub mod analyze;
pub mod backup;
pub mod calculator;
pub mod check;
pub mod del;
pub mod demo;
pub mod log;
pub mod refresh;
