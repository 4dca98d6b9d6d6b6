pub mod help;
pub mod status_bar;
pub mod summary_table;

pub use help::HelpPopup;
pub use status_bar::StatusBar;
pub use summary_table::{SummaryTable, SummaryView};

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::App;

/// Draw the whole screen: summary area, status bar, and the help overlay when open.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

    SummaryTable::render(frame, layout[0], &app.state, &app.theme);
    StatusBar::render(frame, layout[1], app);

    if app.show_help {
        HelpPopup::render(frame, area, &app.theme);
    }
}
