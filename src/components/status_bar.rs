use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, SummaryState};
use crate::calendar::DATE_FORMAT;
use crate::summary::week_dates;

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let w = area.width as usize;
        let style = app.theme.status;

        let state_str = match app.state {
            SummaryState::Idle => "Idle",
            SummaryState::Loading => "Loading",
            SummaryState::Failed => "Failed",
            SummaryState::Loaded(_) => "Loaded",
        };
        let dates = week_dates(app.today);
        let range = format!(
            "{} .. {}",
            dates[0].format(DATE_FORMAT),
            dates[dates.len() - 1].format(DATE_FORMAT)
        );
        let left = if w >= 100 {
            format!(" [{}] {} from {} ", state_str, range, app.source_label())
        } else if w >= 60 {
            format!(" [{}] {} ", state_str, range)
        } else {
            format!(" [{}] ", state_str)
        };

        // Status message if present, otherwise width-dependent hints
        let right = if let Some(ref msg) = app.status_message {
            format!(" {} ", msg)
        } else if w >= 70 {
            " r:Refresh ?:Help q:Quit ".to_string()
        } else if w >= 40 {
            " r ? q ".to_string()
        } else {
            String::new()
        };

        let padding = " ".repeat(w.saturating_sub(left.len() + right.len()));

        let line = Line::from(vec![
            Span::styled(left, style),
            Span::styled(padding, style),
            Span::styled(right, style),
        ]);

        frame.render_widget(Paragraph::new(line).style(style), area);
    }
}
