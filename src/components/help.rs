use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::theme::Theme;

const KEYS: [(&str, &str); 4] = [
    ("r", "Fetch the week again"),
    ("?", "Toggle this help"),
    ("q / Esc", "Quit"),
    ("Ctrl-c", "Quit"),
];

pub struct HelpPopup;

impl HelpPopup {
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup_w = area.width.clamp(20, 44);
        let popup_h = area.height.clamp(6, (KEYS.len() + 5) as u16);
        let x = area.x + area.width.saturating_sub(popup_w) / 2;
        let y = area.y + area.height.saturating_sub(popup_h) / 2;
        let popup_area = Rect::new(x, y, popup_w, popup_h).intersection(area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keybindings ")
            .title_style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let key_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        let mut lines: Vec<Line> = KEYS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("  {:<10}", key), key_style),
                    Span::raw(*desc),
                ])
            })
            .collect();
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("  Theme: ", theme.dim),
            Span::raw(theme.name.clone()),
        ]));
        lines.push(Line::from(Span::styled("Esc or ? to close", theme.dim)));

        let para = Paragraph::new(lines).wrap(Wrap { trim: false });
        frame.render_widget(para, inner);
    }
}
