//! Status bar with keybindings and filter status.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{Component, Theme};
use crate::panel::Severity;

pub struct StatusInput {
    pub threshold: Severity,
    pub hidden_entries: usize,
    pub connected: bool,
    pub theme: &'static Theme,
}

pub struct StatusBar {
    threshold: Severity,
    hidden_entries: usize,
    connected: bool,
    theme: &'static Theme,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self {
            threshold: Severity::Info,
            hidden_entries: 0,
            connected: false,
            theme: Theme::of(None),
        }
    }
}

impl Component for StatusBar {
    type Input = StatusInput;
    type Event = ();

    fn update(&mut self, input: Self::Input) {
        self.threshold = input.threshold;
        self.hidden_entries = input.hidden_entries;
        self.connected = input.connected;
        self.theme = input.theme;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        const KEYBINDINGS: &[(&str, &str)] = &[("?", "help"), ("F8", "hide"), ("q", "quit")];

        let separator = Span::raw(" │ ");
        let keybind_spans = KEYBINDINGS.iter().enumerate().flat_map(|(i, (key, desc))| {
            let prefix = (i > 0).then(|| separator.clone());
            prefix.into_iter().chain([
                Span::styled(*key, self.theme.key),
                Span::raw(format!(": {desc}")),
            ])
        });

        let filter_span = Span::styled(
            format!(" [{}{}]", self.threshold, hidden_suffix(self.hidden_entries)),
            self.theme.severity(self.threshold),
        );
        let link_span = if self.connected {
            Span::styled(" engine", self.theme.dim)
        } else {
            Span::styled(" waiting for engine…", self.theme.dim)
        };

        let spans: Vec<Span> = keybind_spans.chain([filter_span, link_span]).collect();
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn hidden_suffix(hidden: usize) -> String {
    if hidden == 0 {
        String::new()
    } else {
        format!(", {hidden} hidden")
    }
}
