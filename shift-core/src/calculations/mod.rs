//! Financial calculations for a working day and for the saved history.
//!
//! Both entry points are pure functions over in-memory values: they never
//! fail, never touch storage and are safe to call from any number of
//! concurrent readers.

pub mod day;
pub mod history;

pub use day::calculate_day;
pub use history::{HistorySummary, summarize_history};
