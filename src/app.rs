use std::sync::Arc;

use chrono::{Local, NaiveDate};
use color_eyre::eyre::{eyre, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, error, info};

use crate::calendar::EventSource;
use crate::error::SummaryError;
use crate::event::{AppEvent, EventSender};
use crate::summary::{build_week_summary, DailySummary, EmptyDayPolicy};
use crate::theme::Theme;

/// Widget state. Exactly one of these is shown at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SummaryState {
    #[default]
    Idle,
    Loading,
    Failed,
    Loaded(Vec<DailySummary>),
}

impl SummaryState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SummaryState::Loading)
    }
}

pub struct App {
    pub running: bool,
    pub show_help: bool,
    /// First day of the current (or last) fetch cycle.
    pub today: NaiveDate,
    pub state: SummaryState,
    pub theme: Theme,
    pub status_message: Option<String>,
    source: Arc<dyn EventSource>,
    empty_day: EmptyDayPolicy,
    pinned_today: Option<NaiveDate>,
    events: EventSender,
}

impl App {
    pub fn new(source: Arc<dyn EventSource>, events: EventSender) -> Self {
        Self {
            running: true,
            show_help: false,
            today: Local::now().date_naive(),
            state: SummaryState::Idle,
            theme: Theme::default(),
            status_message: None,
            source,
            empty_day: EmptyDayPolicy::default(),
            pinned_today: None,
            events,
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_empty_day(mut self, policy: EmptyDayPolicy) -> Self {
        self.empty_day = policy;
        self
    }

    /// Always start the week at `today` instead of the local date.
    pub fn with_today(mut self, today: Option<NaiveDate>) -> Self {
        if let Some(day) = today {
            self.today = day;
        }
        self.pinned_today = today;
        self
    }

    pub fn source_label(&self) -> String {
        self.source.describe()
    }

    /// Kick off a fetch cycle. The outcome arrives later as [`AppEvent::Summary`].
    ///
    /// Returns `false` without doing anything while a cycle is in flight.
    pub fn start_fetch(&mut self) -> bool {
        if self.state.is_loading() {
            debug!("fetch already in flight");
            return false;
        }

        self.today = self.pinned_today.unwrap_or_else(|| Local::now().date_naive());
        self.state = SummaryState::Loading;
        info!(today = %self.today, "fetch started");

        let source = Arc::clone(&self.source);
        let events = self.events.clone();
        let today = self.today;
        let policy = self.empty_day;
        tokio::spawn(async move {
            let outcome = build_week_summary(today, source.as_ref(), policy).await;
            if events.send(AppEvent::Summary(outcome)).is_err() {
                debug!("summary receiver gone, dropping result");
            }
        });
        true
    }

    /// Apply one event from the main loop. A fatal event stops the app and is returned as an error.
    pub fn dispatch(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Resize => {}
            AppEvent::Summary(outcome) => self.finish_fetch(outcome),
            AppEvent::Fatal(reason) => {
                self.running = false;
                return Err(eyre!(reason));
            }
        }
        Ok(())
    }

    pub fn finish_fetch(&mut self, outcome: std::result::Result<Vec<DailySummary>, SummaryError>) {
        self.state = match outcome {
            Ok(days) => {
                info!(days = days.len(), "fetch finished");
                SummaryState::Loaded(days)
            }
            Err(err) => {
                let cause = std::error::Error::source(&err)
                    .map(ToString::to_string)
                    .unwrap_or_default();
                error!(error = %err, date = %err.date(), %cause, "fetch failed");
                SummaryState::Failed
            }
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear status message on any key
        self.status_message = None;

        // Help overlay takes priority
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
                self.show_help = false;
            }
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _)
            | (KeyCode::Esc, _)
            | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.running = false;
            }
            (KeyCode::Char('r'), _) => {
                if !self.start_fetch() {
                    self.status_message = Some("Fetch already in progress".to_string());
                }
            }
            (KeyCode::Char('?'), _) => self.show_help = true,
            _ => {}
        }
    }
}
