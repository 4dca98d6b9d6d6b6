use chrono::NaiveDate;
use serde::Deserialize;

use crate::calendar::Event;
use crate::error::SummaryError;

/// What to do with a day that has no events, where "longest event" has no answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyDayPolicy {
    /// Zero counts and an empty title.
    #[default]
    Placeholder,
    /// Fail the whole cycle.
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub event_count: usize,
    /// Minutes.
    pub total_duration: u64,
    pub longest_event_title: String,
}

/// Reduce one day's events into its summary row.
pub fn summarize_day(
    date: NaiveDate,
    events: &[Event],
    policy: EmptyDayPolicy,
) -> Result<DailySummary, SummaryError> {
    let longest_event_title = match (longest_event(events), policy) {
        (Some(event), _) => event.title.clone(),
        (None, EmptyDayPolicy::Placeholder) => String::new(),
        (None, EmptyDayPolicy::Fail) => return Err(SummaryError::EmptyDay { date }),
    };

    Ok(DailySummary {
        date,
        event_count: events.len(),
        total_duration: events
            .iter()
            .map(|event| u64::from(event.duration_in_minutes))
            .sum(),
        longest_event_title,
    })
}

// First event wins ties, so no max_by_key (which keeps the last).
fn longest_event(events: &[Event]) -> Option<&Event> {
    events.iter().reduce(|longest, event| {
        if event.duration_in_minutes > longest.duration_in_minutes {
            event
        } else {
            longest
        }
    })
}
