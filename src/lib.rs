//! Collapsible side panel for an interactive proof assistant.
//!
//! [`panel::Panel`] holds the presentation state (goals, filtered messages,
//! packages, toolbar); [`tui`] draws it in a terminal and [`tui_ipc`] links
//! it to the proof engine.

pub mod error;
pub mod options;
pub mod panel;
pub mod tui;
pub mod tui_ipc;
