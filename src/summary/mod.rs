pub mod builder;
pub mod daily;
pub mod week;

pub use builder::{build_week_summary, week_dates, DAYS_IN_WEEK};
pub use daily::{summarize_day, DailySummary, EmptyDayPolicy};
pub use week::WeekSummary;
