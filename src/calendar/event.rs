use serde::{Deserialize, Serialize};

/// A calendar entry as delivered by the events API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub duration_in_minutes: u32,
    pub title: String,
}

impl Event {
    pub fn new(duration_in_minutes: u32, title: impl Into<String>) -> Self {
        Self {
            duration_in_minutes,
            title: title.into(),
        }
    }
}
