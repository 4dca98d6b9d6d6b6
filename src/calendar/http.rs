use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::debug;

use super::{Event, EventSource, DATE_FORMAT};
use crate::error::SourceError;

/// Events API reached over HTTP: `GET {base_url}/events?date=YYYY-MM-DD`.
pub struct HttpEventSource {
    client: Client,
    endpoint: String,
}

impl HttpEventSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: events_endpoint(base_url),
        })
    }
}

#[async_trait]
impl EventSource for HttpEventSource {
    async fn events_for_date(&self, date: NaiveDate) -> Result<Vec<Event>, SourceError> {
        let day = date.format(DATE_FORMAT).to_string();
        debug!(endpoint = %self.endpoint, %day, "requesting events");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("date", day.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status { date, status });
        }

        let body = response.bytes().await?;
        decode_events(&body)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

fn events_endpoint(base_url: &str) -> String {
    format!("{}/events", base_url.trim_end_matches('/'))
}

pub(crate) fn decode_events(body: &[u8]) -> Result<Vec<Event>, SourceError> {
    Ok(serde_json::from_slice(body)?)
}
