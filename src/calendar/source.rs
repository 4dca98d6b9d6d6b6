use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use super::Event;
use crate::error::SourceError;

/// Anything that can answer "which events happen on this date".
///
/// Implementations own their transport concerns (timeouts, auth, retries);
/// the summary builder only ever asks for one day at a time.
#[async_trait]
pub trait EventSource: Send + Sync {
    async fn events_for_date(&self, date: NaiveDate) -> Result<Vec<Event>, SourceError>;

    /// Short label for logs and the status bar.
    fn describe(&self) -> String;
}

#[async_trait]
impl<T: EventSource + ?Sized> EventSource for Arc<T> {
    async fn events_for_date(&self, date: NaiveDate) -> Result<Vec<Event>, SourceError> {
        (**self).events_for_date(date).await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
