use ratatui::{
    layout::{Constraint, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::app::SummaryState;
use crate::calendar::DATE_FORMAT;
use crate::summary::{DailySummary, WeekSummary};
use crate::theme::Theme;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const ERROR_MESSAGE: &str = "Error fetching data. Please try again later.";
pub const EMPTY_MESSAGE: &str = "Summary list is empty";

const TITLE: &str = " Calendar summary ";
const HEADERS: [&str; 4] = [
    "Date",
    "Number of events",
    "Total duration [min]",
    "Longest event",
];

/// What the summary area shows for a given state, in precedence order:
/// loading, then error, then empty, then the table.
#[derive(Debug, PartialEq)]
pub enum SummaryView<'a> {
    Loading,
    Error,
    Empty,
    Table {
        days: &'a [DailySummary],
        week: WeekSummary,
    },
}

impl<'a> SummaryView<'a> {
    pub fn from_state(state: &'a SummaryState) -> Self {
        match state {
            SummaryState::Loading => SummaryView::Loading,
            SummaryState::Failed => SummaryView::Error,
            SummaryState::Idle => SummaryView::Empty,
            SummaryState::Loaded(days) => match WeekSummary::aggregate(days) {
                Some(week) => SummaryView::Table { days, week },
                None => SummaryView::Empty,
            },
        }
    }
}

pub struct SummaryTable;

impl SummaryTable {
    pub fn render(frame: &mut Frame, area: Rect, state: &SummaryState, theme: &Theme) {
        let block = Block::default()
            .title(TITLE)
            .title_style(theme.header)
            .borders(Borders::ALL)
            .border_style(theme.border);

        match SummaryView::from_state(state) {
            SummaryView::Loading => render_message(frame, area, block, LOADING_MESSAGE, theme.dim),
            SummaryView::Error => render_message(frame, area, block, ERROR_MESSAGE, theme.error),
            SummaryView::Empty => render_message(frame, area, block, EMPTY_MESSAGE, theme.dim),
            SummaryView::Table { days, week } => {
                let table = summary_table(days, &week, theme).block(block);
                frame.render_widget(table, area);
            }
        }
    }
}

fn render_message(frame: &mut Frame, area: Rect, block: Block, message: &str, style: Style) {
    let para = Paragraph::new(Line::styled(message.to_string(), style)).block(block);
    frame.render_widget(para, area);
}

fn summary_table<'a>(days: &[DailySummary], week: &WeekSummary, theme: &Theme) -> Table<'a> {
    let header = Row::new(HEADERS.map(Cell::from)).style(theme.header);

    let mut rows: Vec<Row> = days
        .iter()
        .enumerate()
        .map(|(i, day)| {
            Row::new([
                day.date.format(DATE_FORMAT).to_string(),
                day.event_count.to_string(),
                day.total_duration.to_string(),
                day.longest_event_title.clone(),
            ])
            .style(theme.row(i))
        })
        .collect();

    rows.push(
        Row::new([
            "Total".to_string(),
            week.total_event_count.to_string(),
            week.total_duration.to_string(),
            week.longest_event_title.clone(),
        ])
        .style(theme.total),
    );

    let widths = [
        Constraint::Length(10),
        Constraint::Length(HEADERS[1].len() as u16),
        Constraint::Length(HEADERS[2].len() as u16),
        Constraint::Fill(1),
    ];

    Table::new(rows, widths).header(header).column_spacing(2)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, style::Color, Terminal};

    use super::*;

    fn scenario_days() -> Vec<DailySummary> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        start
            .iter_days()
            .take(7)
            .enumerate()
            .map(|(i, date)| {
                if i == 0 {
                    DailySummary {
                        date,
                        event_count: 2,
                        total_duration: 90,
                        longest_event_title: "Design Review".to_string(),
                    }
                } else {
                    DailySummary {
                        date,
                        event_count: 1,
                        total_duration: 15,
                        longest_event_title: "Sync".to_string(),
                    }
                }
            })
            .collect()
    }

    fn render(state: &SummaryState) -> Terminal<TestBackend> {
        let mut terminal = Terminal::new(TestBackend::new(90, 12)).unwrap();
        terminal
            .draw(|frame| SummaryTable::render(frame, frame.area(), state, &Theme::default()))
            .unwrap();
        terminal
    }

    fn lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    fn cells(line: &str) -> Vec<&str> {
        line.trim_matches('│').split_whitespace().collect()
    }

    fn screen(state: &SummaryState) -> String {
        lines(&render(state)).join("\n")
    }

    #[test]
    fn loading_shows_only_indicator() {
        let text = screen(&SummaryState::Loading);
        assert!(text.contains(LOADING_MESSAGE));
        assert!(!text.contains("Number of events"));
    }

    #[test]
    fn failure_shows_error_message() {
        let text = screen(&SummaryState::Failed);
        assert!(text.contains(ERROR_MESSAGE));
        assert!(!text.contains("Total"));
    }

    #[test]
    fn empty_result_shows_empty_message() {
        assert!(screen(&SummaryState::Loaded(Vec::new())).contains(EMPTY_MESSAGE));
        assert!(screen(&SummaryState::Idle).contains(EMPTY_MESSAGE));
    }

    #[test]
    fn table_has_header_days_and_total() {
        let terminal = render(&SummaryState::Loaded(scenario_days()));
        let rows = lines(&terminal);

        assert!(rows[0].contains("Calendar summary"));
        for header in HEADERS {
            assert!(rows[1].contains(header), "missing header {header}");
        }
        assert!(rows[2].contains("2024-01-01"));
        assert!(rows[2].contains("90"));
        assert!(rows[2].contains("Design Review"));
        assert!(rows[8].contains("2024-01-07"));
        assert!(rows[8].contains("Sync"));

        assert_eq!(cells(&rows[9]), ["Total", "8", "180", "Design", "Review"]);
        assert!(rows[9].contains("Design Review"));
    }

    #[test]
    fn all_empty_days_render_zero_rows_and_zero_total() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let days: Vec<DailySummary> = start
            .iter_days()
            .take(7)
            .map(|date| DailySummary {
                date,
                event_count: 0,
                total_duration: 0,
                longest_event_title: String::new(),
            })
            .collect();
        let rows = lines(&render(&SummaryState::Loaded(days)));

        for (i, date) in start.iter_days().take(7).enumerate() {
            let day = date.format(DATE_FORMAT).to_string();
            assert_eq!(cells(&rows[2 + i]), [day.as_str(), "0", "0"]);
        }

        assert_eq!(cells(&rows[9]), ["Total", "0", "0"]);
    }

    #[test]
    fn day_rows_alternate_background() {
        let terminal = render(&SummaryState::Loaded(scenario_days()));
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(1, 2)].bg, Color::Rgb(0xf2, 0xf2, 0xf2));
        assert_eq!(buffer[(1, 3)].bg, Color::Rgb(0xff, 0xff, 0xff));
        assert_eq!(buffer[(1, 4)].bg, Color::Rgb(0xf2, 0xf2, 0xf2));
    }

    #[test]
    fn view_precedence_follows_state() {
        assert_eq!(SummaryView::from_state(&SummaryState::Loading), SummaryView::Loading);
        assert_eq!(SummaryView::from_state(&SummaryState::Failed), SummaryView::Error);
        let days = scenario_days();
        let state = SummaryState::Loaded(days.clone());
        match SummaryView::from_state(&state) {
            SummaryView::Table { days: shown, week } => {
                assert_eq!(shown, days.as_slice());
                assert_eq!(week.total_event_count, 8);
            }
            other => panic!("expected table, got {other:?}"),
        }
    }
}
