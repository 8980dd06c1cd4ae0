//! Centralized theme and styling constants.

use ratatui::style::{Color, Modifier, Style};

use crate::{options::ThemeName, panel::Severity};

/// Palette for one colour scheme.
pub struct Theme {
    pub normal: Style,
    pub dim: Style,
    pub border: Color,
    pub title: Color,
    pub caption: Style,
    pub caption_collapsed: Style,
    pub key: Style,
    pub button: Style,
    pub button_disabled: Style,
    pub system: Style,
    pub splash: Style,
    pub separator: Style,
    severities: [Style; 5],
}

static DARK: Theme = Theme {
    normal: Style::new().fg(Color::White),
    dim: Style::new().fg(Color::DarkGray),
    border: Color::DarkGray,
    title: Color::Cyan,
    caption: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    caption_collapsed: Style::new().fg(Color::DarkGray),
    key: Style::new().fg(Color::Cyan),
    button: Style::new().bg(Color::Rgb(40, 40, 60)).fg(Color::White),
    button_disabled: Style::new().fg(Color::DarkGray),
    system: Style::new().fg(Color::Yellow).add_modifier(Modifier::ITALIC),
    splash: Style::new().fg(Color::Magenta),
    separator: Style::new().fg(Color::Rgb(60, 60, 60)),
    severities: [
        Style::new().fg(Color::Red),
        Style::new().fg(Color::Yellow),
        Style::new().fg(Color::Blue),
        Style::new().fg(Color::White),
        Style::new().fg(Color::DarkGray),
    ],
};

static LIGHT: Theme = Theme {
    normal: Style::new().fg(Color::Black),
    dim: Style::new().fg(Color::Gray),
    border: Color::Gray,
    title: Color::Blue,
    caption: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
    caption_collapsed: Style::new().fg(Color::Gray),
    key: Style::new().fg(Color::Blue),
    button: Style::new().bg(Color::Rgb(220, 220, 235)).fg(Color::Black),
    button_disabled: Style::new().fg(Color::Gray),
    system: Style::new().fg(Color::Rgb(150, 90, 0)).add_modifier(Modifier::ITALIC),
    splash: Style::new().fg(Color::Rgb(120, 40, 140)),
    separator: Style::new().fg(Color::Rgb(200, 200, 200)),
    severities: [
        Style::new().fg(Color::Red),
        Style::new().fg(Color::Rgb(170, 110, 0)),
        Style::new().fg(Color::Blue),
        Style::new().fg(Color::Black),
        Style::new().fg(Color::Gray),
    ],
};

impl Theme {
    /// Dark unless the options ask for light.
    #[must_use]
    pub fn of(name: Option<ThemeName>) -> &'static Self {
        match name {
            Some(ThemeName::Light) => &LIGHT,
            Some(ThemeName::Dark) | None => &DARK,
        }
    }

    #[must_use]
    pub const fn severity(&self, severity: Severity) -> Style {
        self.severities[severity.rank() as usize]
    }
}
