use color_eyre::eyre::{eyre, Result};
use crossterm::event::{Event, EventStream, KeyEvent, KeyEventKind};
use futures::StreamExt;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::error::SummaryError;
use crate::summary::DailySummary;

/// Everything the main loop reacts to.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize,
    /// Outcome of a summary fetch cycle.
    Summary(Result<Vec<DailySummary>, SummaryError>),
    /// Terminal input is gone; the loop cannot continue.
    Fatal(String),
}

pub type EventSender = mpsc::UnboundedSender<AppEvent>;

/// Merges terminal input with fetch completions into one stream.
pub struct EventHandler {
    tx: EventSender,
    rx: mpsc::UnboundedReceiver<AppEvent>,
    reader: JoinHandle<()>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let reader = tokio::spawn(forward_terminal_events(tx.clone()));
        Self { tx, rx, reader }
    }

    pub fn sender(&self) -> EventSender {
        self.tx.clone()
    }

    pub async fn next(&mut self) -> Result<AppEvent> {
        self.rx
            .recv()
            .await
            .ok_or_else(|| eyre!("event channel closed"))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.reader.abort();
    }
}

async fn forward_terminal_events(tx: EventSender) {
    let mut reader = EventStream::new();
    while let Some(event) = reader.next().await {
        let app_event = match event {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
            Ok(Event::Resize(..)) => AppEvent::Resize,
            Ok(_) => continue,
            Err(err) => {
                error!(error = %err, "terminal input failed");
                let _ = tx.send(AppEvent::Fatal(format!("terminal input failed: {err}")));
                break;
            }
        };
        if tx.send(app_event).is_err() {
            break;
        }
    }
    debug!("terminal reader stopped");
}
