pub mod checkoff;
pub mod period;
pub mod reconcile;
pub mod streak;
