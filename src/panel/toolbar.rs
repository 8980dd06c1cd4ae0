//! Proof navigation toolbar and its single action handler slot.

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolbarButton {
    Up,
    Down,
    ToCursor,
    Reset,
}

impl ToolbarButton {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::ToCursor, Self::Reset];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::ToCursor => "to-cursor",
            Self::Reset => "reset",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "▲ Up",
            Self::Down => "▼ Down",
            Self::ToCursor => "↦ To cursor",
            Self::Reset => "⟲ Reset",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Up => "Up (Alt-P)",
            Self::Down => "Down (Alt-N)",
            Self::ToCursor => "To cursor (Alt-Enter)",
            Self::Reset => "Reset worker",
        }
    }
}

/// What caused a button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Key,
    Mouse { column: u16, row: u16 },
}

/// UI event handed to the action handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionEvent {
    pub button: ToolbarButton,
    pub trigger: Trigger,
}

pub type ActionHandler = Box<dyn FnMut(&ActionEvent)>;

pub struct Toolbar {
    enabled: bool,
    handler: ActionHandler,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self {
            enabled: false,
            handler: Box::new(|_| {}),
        }
    }
}

impl Toolbar {
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub const fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn set_handler(&mut self, handler: ActionHandler) {
        self.handler = handler;
    }

    /// Returns false when the press was dropped because buttons are disabled.
    pub fn press(&mut self, event: &ActionEvent) -> bool {
        if !self.enabled {
            debug!(button = event.button.name(), "ignoring press on disabled toolbar");
            return false;
        }
        (self.handler)(event);
        true
    }
}
