use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Failure reported by an event source for a single day.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("events request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("events API answered {status} for {date}")]
    Status {
        date: NaiveDate,
        status: reqwest::StatusCode,
    },

    #[error("malformed events payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("cannot read events file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("file event source selected but no events file configured")]
    MissingEventsFile,
}

/// Failure of a whole summary cycle. Any single day failing fails the week.
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("fetching events for {date} failed")]
    Fetch {
        date: NaiveDate,
        #[source]
        source: SourceError,
    },

    #[error("no events on {date}, longest event is undefined")]
    EmptyDay { date: NaiveDate },
}

impl SummaryError {
    pub fn date(&self) -> NaiveDate {
        match self {
            SummaryError::Fetch { date, .. } | SummaryError::EmptyDay { date } => *date,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}
