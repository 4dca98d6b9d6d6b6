use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;

use super::{Event, EventSource};
use crate::error::SourceError;

/// Events read from a JSON fixture of the form `{"2024-01-01": [ ...events ]}`.
/// Dates missing from the file have no events.
#[derive(Debug, Default)]
pub struct FileEventSource {
    path: Option<PathBuf>,
    days: HashMap<NaiveDate, Vec<Event>>,
}

impl FileEventSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let content = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut source = Self::from_json(&content)?;
        source.path = Some(path.to_path_buf());
        Ok(source)
    }

    pub fn from_json(content: &str) -> Result<Self, SourceError> {
        let days = serde_json::from_str(content)?;
        Ok(Self { path: None, days })
    }

    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}

#[async_trait]
impl EventSource for FileEventSource {
    async fn events_for_date(&self, date: NaiveDate) -> Result<Vec<Event>, SourceError> {
        Ok(self.days.get(&date).cloned().unwrap_or_default())
    }

    fn describe(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => "inline fixture".to_string(),
        }
    }
}
