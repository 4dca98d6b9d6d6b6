pub mod event;
pub mod file;
pub mod http;
pub mod source;

use std::sync::Arc;

use tracing::info;

pub use event::Event;
pub use file::FileEventSource;
pub use http::HttpEventSource;
pub use source::EventSource;

use crate::config::{Config, SourceKind};
use crate::error::SourceError;

/// Calendar-day text form used on the wire and in the summary table.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the event source selected by the configuration.
pub fn source_from_config(config: &Config) -> Result<Arc<dyn EventSource>, SourceError> {
    match config.source {
        SourceKind::Http => Ok(Arc::new(HttpEventSource::new(
            &config.base_url,
            config.timeout(),
        )?)),
        SourceKind::File => {
            let path = config
                .events_file
                .as_deref()
                .ok_or(SourceError::MissingEventsFile)?;
            let source = FileEventSource::open(path)?;
            info!(path = %path.display(), days = source.day_count(), "loaded events file");
            Ok(Arc::new(source))
        }
    }
}
