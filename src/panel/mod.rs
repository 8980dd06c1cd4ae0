//! Headless model of the classic side panel.
//!
//! The panel owns all presentation state: visibility, the on-hold flag,
//! toolbar enablement, pane collapse flags, and the three content regions.
//! Front ends draw it through read accessors and feed UI events back via the
//! mutating methods; nothing here knows about terminals.

mod goals;
mod log;
mod pane;
mod scroll;
mod toolbar;

use std::time::Instant;

pub use goals::{GoalBlock, GoalRegion, Splash, SplashMode};
pub use log::{EntryId, LevelSelect, LogEntry, MessageLog, Severity, SCROLL_DELAY};
pub use pane::{PaneId, Panes};
pub use scroll::{ScrollBehavior, ScrollState};
pub use toolbar::{ActionEvent, ActionHandler, Toolbar, ToolbarButton, Trigger};
use tracing::{debug, info};

use crate::{error::Result, options::PanelOptions};

pub struct Panel {
    options: PanelOptions,
    hidden: bool,
    on_hold: bool,
    toolbar: Toolbar,
    panes: Panes,
    goals: GoalRegion,
    log: MessageLog,
    packages: Vec<String>,
}

impl Panel {
    /// Build the panel. Buttons start disabled; the log filter starts at
    /// `Info`.
    #[must_use]
    pub fn new(options: PanelOptions) -> Self {
        info!(container = %options.wrapper_id, theme = ?options.theme, "building panel");
        for url in options.preload_urls() {
            debug!(%url, "preload");
        }

        Self {
            options,
            hidden: false,
            on_hold: false,
            toolbar: Toolbar::default(),
            panes: Panes::default(),
            goals: GoalRegion::default(),
            log: MessageLog::default(),
            packages: Vec::new(),
        }
    }

    #[must_use]
    pub const fn options(&self) -> &PanelOptions {
        &self.options
    }

    pub const fn show(&mut self) {
        self.hidden = false;
    }

    pub const fn hide(&mut self) {
        self.hidden = true;
    }

    /// True while the panel is hidden.
    #[must_use]
    pub const fn toggled(&self) -> bool {
        self.hidden
    }

    pub const fn toggle(&mut self) {
        if self.toggled() {
            self.show();
        } else {
            self.hide();
        }
    }

    pub const fn toolbar_on(&mut self) {
        self.toolbar.set_enabled(true);
        self.on_hold = false;
    }

    pub const fn toolbar_off(&mut self) {
        self.toolbar.set_enabled(false);
        self.on_hold = true;
    }

    #[must_use]
    pub const fn toolbar_enabled(&self) -> bool {
        self.toolbar.is_enabled()
    }

    #[must_use]
    pub const fn on_hold(&self) -> bool {
        self.on_hold
    }

    /// Replace the action handler. Only the most recent one is kept.
    pub fn set_action_handler(&mut self, handler: impl FnMut(&ActionEvent) + 'static) {
        self.toolbar.set_handler(Box::new(handler));
    }

    /// Forward a button press to the action handler.
    pub fn press_button(&mut self, event: &ActionEvent) -> bool {
        self.toolbar.press(event)
    }

    pub fn on_pane_caption_click(&mut self, pane: PaneId) -> bool {
        self.panes.toggle(pane)
    }

    #[must_use]
    pub const fn panes(&self) -> &Panes {
        &self.panes
    }

    // This is still not optimal: the whole region is replaced every time.
    pub fn render_goals(&mut self, markup: impl Into<String>) {
        self.goals.replace(markup.into());
    }

    pub fn notify_system(&mut self, message: impl Into<String>) {
        self.goals.push_system(message.into());
    }

    pub fn splash(&mut self, version_info: Option<&str>, message: Option<&str>, mode: SplashMode) {
        let image_url = self.options.asset_url(mode.asset());
        self.goals.splash(version_info, message, mode, image_url);
    }

    #[must_use]
    pub const fn goals(&self) -> &GoalRegion {
        &self.goals
    }

    pub fn render_packages(&mut self, lines: Vec<String>) {
        self.packages = lines;
    }

    #[must_use]
    pub fn packages(&self) -> &[String] {
        &self.packages
    }

    pub fn append_log(
        &mut self,
        body: impl Into<String>,
        severity: Severity,
        session_id: Option<String>,
    ) -> EntryId {
        self.log.append(body, severity, session_id)
    }

    pub fn set_severity_threshold(&mut self, severity: Severity) {
        self.log.set_severity_threshold(severity);
    }

    /// Set the threshold from a rank or a name.
    ///
    /// # Errors
    ///
    /// Fails on an unknown name or rank; the threshold is kept.
    pub fn select_severity_threshold(&mut self, level: &LevelSelect) -> Result<Severity> {
        self.log.select_threshold(level)
    }

    #[must_use]
    pub fn is_visible(&self, severity: Severity) -> bool {
        self.log.is_visible(severity)
    }

    #[must_use]
    pub const fn log(&self) -> &MessageLog {
        &self.log
    }

    pub const fn log_mut(&mut self) -> &mut MessageLog {
        &mut self.log
    }

    /// Call before drawing each frame.
    pub fn on_frame(&mut self, now: Instant) {
        self.log.on_frame(now);
    }

    /// Presentation flags of the container, in the order they apply.
    #[must_use]
    pub fn style_classes(&self) -> Vec<String> {
        let mut classes = Vec::new();
        if let Some(theme) = self.options.theme {
            classes.push(theme.style_class());
        }
        if self.hidden {
            classes.push("toggled".to_string());
        }
        if self.on_hold {
            classes.push("on-hold".to_string());
        }
        classes
    }
}
