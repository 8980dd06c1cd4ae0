//! `HelpMenu` component - overlay showing keyboard shortcuts.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use super::Component;

pub const KEYBINDINGS: &[(&str, &str)] = &[
    ("F8", "show/hide panel"),
    ("Alt-p", "step up"),
    ("Alt-n", "step down"),
    ("Alt-Enter", "to cursor"),
    ("g", "toggle goals"),
    ("m", "toggle messages"),
    ("k", "toggle packages"),
    ("0-4", "message filter"),
    ("[ / ]", "more/less severe"),
    ("PgUp/PgDn", "scroll messages"),
    ("?", "close help"),
    ("q", "quit"),
];

/// Help menu popup showing keyboard shortcuts.
#[derive(Default)]
pub struct HelpMenu {
    visible: bool,
}

impl HelpMenu {
    pub const fn toggle(&mut self) {
        self.visible = !self.visible;
    }
}

impl Component for HelpMenu {
    type Input = ();
    type Event = KeyEvent;

    fn update(&mut self, (): Self::Input) {}

    fn handle_event(&mut self, key: Self::Event) -> bool {
        if !self.visible || key.kind != KeyEventKind::Press {
            return false;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('?') => {
                self.visible = false;
                true
            }
            _ => false,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let width = 34u16.min(area.width);
        #[allow(clippy::cast_possible_truncation)]
        let height = ((KEYBINDINGS.len() as u16) + 2).min(area.height);
        let x = area.x + area.width.saturating_sub(width + 1);
        let y = area.y + area.height.saturating_sub(height + 2);
        let popup_area = Rect::new(x, y, width, height);

        frame.render_widget(Clear, popup_area);

        let block = Block::bordered()
            .title(" Help ")
            .border_style(Style::new().fg(Color::Cyan));

        let key_style = Style::new().fg(Color::Cyan);
        let help_lines: Vec<Line> = KEYBINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("{key:>10}"), key_style),
                    Span::raw(format!("  {desc}")),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(help_lines).block(block), popup_area);
    }
}
