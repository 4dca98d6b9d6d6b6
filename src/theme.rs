use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub header: Style,
    pub border: Style,
    pub dim: Style,
    pub status: Style,
    pub error: Style,
    /// Table rows at even indices (first, third, ...).
    pub row_even: Style,
    pub row_odd: Style,
    pub total: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Gray),
            dim: Style::default().fg(Color::DarkGray),
            status: Style::default().fg(Color::White).bg(Color::DarkGray),
            error: Style::default().fg(Color::LightRed).add_modifier(Modifier::BOLD),
            row_even: Style::default().fg(Color::Black).bg(Color::Rgb(0xf2, 0xf2, 0xf2)),
            row_odd: Style::default().fg(Color::Black).bg(Color::Rgb(0xff, 0xff, 0xff)),
            total: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

impl Theme {
    /// Get a built-in preset by name.
    pub fn preset(name: &str) -> Self {
        match name {
            "dracula" => Self::dracula(),
            "gruvbox" => Self::gruvbox(),
            "nord" => Self::nord(),
            _ => Self::default(),
        }
    }

    fn dracula() -> Self {
        let fg = Color::Rgb(248, 248, 242);
        Self {
            name: "dracula".to_string(),
            header: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Rgb(68, 71, 90)),
            dim: Style::default().fg(Color::Rgb(98, 114, 164)),
            status: Style::default().fg(fg).bg(Color::Rgb(68, 71, 90)),
            error: Style::default().fg(Color::Rgb(255, 85, 85)).add_modifier(Modifier::BOLD),
            row_even: Style::default().fg(fg).bg(Color::Rgb(68, 71, 90)),
            row_odd: Style::default().fg(fg).bg(Color::Rgb(40, 42, 54)),
            total: Style::default().fg(Color::Rgb(189, 147, 249)).add_modifier(Modifier::BOLD),
        }
    }

    fn gruvbox() -> Self {
        let fg = Color::Rgb(235, 219, 178);
        Self {
            name: "gruvbox".to_string(),
            header: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Rgb(102, 92, 84)),
            dim: Style::default().fg(Color::Rgb(146, 131, 116)),
            status: Style::default().fg(fg).bg(Color::Rgb(80, 73, 69)),
            error: Style::default().fg(Color::Rgb(251, 73, 52)).add_modifier(Modifier::BOLD),
            row_even: Style::default().fg(fg).bg(Color::Rgb(60, 56, 54)),
            row_odd: Style::default().fg(fg).bg(Color::Rgb(40, 40, 40)),
            total: Style::default().fg(Color::Rgb(250, 189, 47)).add_modifier(Modifier::BOLD),
        }
    }

    fn nord() -> Self {
        let fg = Color::Rgb(229, 233, 240);
        Self {
            name: "nord".to_string(),
            header: Style::default().fg(fg).add_modifier(Modifier::BOLD),
            border: Style::default().fg(Color::Rgb(67, 76, 94)),
            dim: Style::default().fg(Color::Rgb(76, 86, 106)),
            status: Style::default().fg(fg).bg(Color::Rgb(67, 76, 94)),
            error: Style::default().fg(Color::Rgb(191, 97, 106)).add_modifier(Modifier::BOLD),
            row_even: Style::default().fg(fg).bg(Color::Rgb(59, 66, 82)),
            row_odd: Style::default().fg(fg).bg(Color::Rgb(46, 52, 64)),
            total: Style::default().fg(Color::Rgb(136, 192, 208)).add_modifier(Modifier::BOLD),
        }
    }

    /// Style for the table row at `index`, alternating by parity.
    pub fn row(&self, index: usize) -> Style {
        if index % 2 == 0 {
            self.row_even
        } else {
            self.row_odd
        }
    }
}

// ── TOML config types ──

/// `[theme]` table of the config file.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ThemeConfig {
    pub preset: Option<String>,
    pub header_fg: Option<String>,
    pub border_fg: Option<String>,
    pub dim_fg: Option<String>,
    pub status_fg: Option<String>,
    pub status_bg: Option<String>,
    pub error_fg: Option<String>,
    pub row_even_bg: Option<String>,
    pub row_odd_bg: Option<String>,
    pub total_fg: Option<String>,
}

impl ThemeConfig {
    pub fn to_theme(&self) -> Theme {
        // Start from preset or default
        let mut theme = self
            .preset
            .as_deref()
            .map(Theme::preset)
            .unwrap_or_default();

        let color = |value: &Option<String>| value.as_deref().and_then(parse_color);

        if let Some(c) = color(&self.header_fg) {
            theme.header = theme.header.fg(c);
        }
        if let Some(c) = color(&self.border_fg) {
            theme.border = theme.border.fg(c);
        }
        if let Some(c) = color(&self.dim_fg) {
            theme.dim = theme.dim.fg(c);
        }
        if let Some(c) = color(&self.status_fg) {
            theme.status = theme.status.fg(c);
        }
        if let Some(c) = color(&self.status_bg) {
            theme.status = theme.status.bg(c);
        }
        if let Some(c) = color(&self.error_fg) {
            theme.error = theme.error.fg(c);
        }
        if let Some(c) = color(&self.row_even_bg) {
            theme.row_even = theme.row_even.bg(c);
        }
        if let Some(c) = color(&self.row_odd_bg) {
            theme.row_odd = theme.row_odd.bg(c);
        }
        if let Some(c) = color(&self.total_fg) {
            theme.total = theme.total.fg(c);
        }

        theme
    }
}

/// Parse a color string: hex "#rrggbb", or named colors.
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}
