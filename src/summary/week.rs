use super::DailySummary;

/// Totals across a run of daily summaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSummary {
    pub total_event_count: usize,
    pub total_duration: u64,
    /// Longest event title of the busiest day (largest total duration),
    /// which need not be the single longest event of the week.
    pub longest_event_title: String,
}

impl WeekSummary {
    /// `None` for an empty slice: there is nothing to total.
    pub fn aggregate(days: &[DailySummary]) -> Option<Self> {
        let busiest = days.iter().reduce(|busiest, day| {
            if day.total_duration > busiest.total_duration {
                day
            } else {
                busiest
            }
        })?;

        Some(Self {
            total_event_count: days.iter().map(|day| day.event_count).sum(),
            total_duration: days.iter().map(|day| day.total_duration).sum(),
            longest_event_title: busiest.longest_event_title.clone(),
        })
    }
}
