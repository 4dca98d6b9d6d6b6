use chrono::{Days, NaiveDate};
use futures::future::try_join_all;
use tracing::{debug, info};

use super::{summarize_day, DailySummary, EmptyDayPolicy};
use crate::calendar::EventSource;
use crate::error::SummaryError;

pub const DAYS_IN_WEEK: usize = 7;

/// `today` and the six calendar days after it.
pub fn week_dates(today: NaiveDate) -> [NaiveDate; DAYS_IN_WEEK] {
    std::array::from_fn(|offset| today + Days::new(offset as u64))
}

/// Fetch every day of the week concurrently and summarise each one.
///
/// All seven fetches are in flight together. The first failure fails the
/// whole week and the outstanding fetches are dropped; on success the
/// summaries come back in date order whatever order the fetches finished in.
pub async fn build_week_summary<S>(
    today: NaiveDate,
    source: &S,
    policy: EmptyDayPolicy,
) -> Result<Vec<DailySummary>, SummaryError>
where
    S: EventSource + ?Sized,
{
    info!(%today, source = %source.describe(), "building week summary");

    let fetches = week_dates(today).into_iter().map(|date| async move {
        let events = source
            .events_for_date(date)
            .await
            .map_err(|err| SummaryError::Fetch { date, source: err })?;
        debug!(%date, events = events.len(), "events received");
        summarize_day(date, &events, policy)
    });

    try_join_all(fetches).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_consecutive_from_today() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let dates = week_dates(today);
        assert_eq!(dates[0], today);
        for pair in dates.windows(2) {
            assert_eq!(pair[1], pair[0].succ_opt().unwrap());
        }
        assert_eq!(dates[6], NaiveDate::from_ymd_opt(2024, 1, 7).unwrap());
    }

    #[test]
    fn dates_cross_month_and_leap_day() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        let formatted: Vec<String> = week_dates(today)
            .iter()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .collect();
        assert_eq!(
            formatted,
            [
                "2024-02-27",
                "2024-02-28",
                "2024-02-29",
                "2024-03-01",
                "2024-03-02",
                "2024-03-03",
                "2024-03-04",
            ]
        );
    }

    #[test]
    fn dates_cross_year_end() {
        let today = NaiveDate::from_ymd_opt(2023, 12, 29).unwrap();
        let dates = week_dates(today);
        assert_eq!(dates[3], NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(dates[6], NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
    }
}
