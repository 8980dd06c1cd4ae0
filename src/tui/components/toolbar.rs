//! Toolbar row with the proof navigation buttons.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{ClickRegion, ClickTarget, Component, Theme};
use crate::panel::ToolbarButton;

pub struct ToolbarInput {
    pub enabled: bool,
    pub theme: &'static Theme,
}

pub struct ToolbarView {
    enabled: bool,
    theme: &'static Theme,
    click_regions: Vec<ClickRegion>,
}

impl Default for ToolbarView {
    fn default() -> Self {
        Self {
            enabled: false,
            theme: Theme::of(None),
            click_regions: Vec::new(),
        }
    }
}

impl ToolbarView {
    #[must_use]
    pub fn click_regions(&self) -> &[ClickRegion] {
        &self.click_regions
    }
}

impl Component for ToolbarView {
    type Input = ToolbarInput;
    type Event = ();

    fn update(&mut self, input: Self::Input) {
        self.enabled = input.enabled;
        self.theme = input.theme;
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.click_regions.clear();

        let style = if self.enabled {
            self.theme.button
        } else {
            self.theme.button_disabled
        };

        let mut spans = Vec::new();
        let mut x = area.x;
        for button in ToolbarButton::ALL {
            let label = Span::styled(format!(" {} ", button.label()), style);
            let width = u16::try_from(label.width()).unwrap_or(u16::MAX);
            let visible = width.min(area.right().saturating_sub(x));
            if visible > 0 {
                self.click_regions.push(ClickRegion {
                    area: Rect::new(x, area.y, visible, 1),
                    target: ClickTarget::Button(button),
                });
            }
            x = x.saturating_add(width + 1);
            spans.push(label);
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
