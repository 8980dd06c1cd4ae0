//! Component-based UI architecture.
//!
//! Stateful chrome (toolbar, help overlay, status bar) implements
//! [`Component`]. The three panes are plain render functions over the panel
//! model. Click regions are computed during rendering to ensure consistency.

mod goal_pane;
mod help_menu;
mod message_pane;
mod packages_pane;
mod status_bar;
mod theme;
mod toolbar;

pub use goal_pane::render_goal_pane;
pub use help_menu::HelpMenu;
pub use message_pane::{render_filter, render_message_pane};
pub use packages_pane::render_packages_pane;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
pub use status_bar::{StatusBar, StatusInput};
pub use theme::Theme;
pub use toolbar::{ToolbarInput, ToolbarView};

use crate::panel::{PaneId, ToolbarButton};

/// What a click on a screen region acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    PowerButton,
    Button(ToolbarButton),
    Caption(PaneId),
    SeverityFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickRegion {
    pub area: Rect,
    pub target: ClickTarget,
}

impl ClickRegion {
    #[must_use]
    pub const fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.area.x
            && column < self.area.x.saturating_add(self.area.width)
            && row >= self.area.y
            && row < self.area.y.saturating_add(self.area.height)
    }
}

/// A UI component with co-located state, rendering, and event handling.
pub trait Component {
    type Input;
    type Event;

    fn update(&mut self, input: Self::Input);

    /// Handle an event. Returns true if the event was consumed.
    fn handle_event(&mut self, _event: Self::Event) -> bool {
        false
    }

    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Draw a pane caption and register it as clickable.
pub fn render_caption(
    frame: &mut Frame,
    area: Rect,
    pane: PaneId,
    collapsed: bool,
    theme: &Theme,
    regions: &mut Vec<ClickRegion>,
) {
    let (marker, style) = if collapsed {
        ("▸ ", theme.caption_collapsed)
    } else {
        ("▾ ", theme.caption)
    };
    let caption = Line::from(vec![Span::styled(marker, style), Span::styled(pane.caption(), style)]);
    frame.render_widget(Paragraph::new(caption), area);
    regions.push(ClickRegion {
        area,
        target: ClickTarget::Caption(pane),
    });
}
