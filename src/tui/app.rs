//! Application state for the TUI.

use std::{cell::RefCell, mem, rc::Rc, time::Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use tracing::{debug, warn};

use super::components::{
    render_caption, render_filter, render_goal_pane, render_message_pane, render_packages_pane,
    ClickRegion, ClickTarget, Component, HelpMenu, StatusBar, StatusInput, Theme, ToolbarInput,
    ToolbarView,
};
use crate::{
    options::PanelOptions,
    panel::{ActionEvent, LevelSelect, PaneId, Panel, Severity, ToolbarButton, Trigger},
    tui_ipc::{Command, Message},
};

const PAGE: usize = 10;
const WHEEL: usize = 3;

/// Application state.
pub struct App {
    panel: Panel,
    theme: &'static Theme,
    toolbar: ToolbarView,
    help: HelpMenu,
    status: StatusBar,
    /// Click regions computed during the last render.
    click_regions: Vec<ClickRegion>,
    /// Outgoing commands queue, filled by the panel's action handler.
    outgoing_commands: Rc<RefCell<Vec<Command>>>,
    /// Whether the engine socket is currently connected.
    pub connected: bool,
    /// Whether app should exit.
    pub should_exit: bool,
}

impl App {
    #[must_use]
    pub fn new(options: PanelOptions) -> Self {
        let theme = Theme::of(options.theme);
        let mut panel = Panel::new(options);

        let outgoing_commands = Rc::new(RefCell::new(Vec::new()));
        let queue = Rc::clone(&outgoing_commands);
        panel.set_action_handler(move |event: &ActionEvent| {
            queue.borrow_mut().push(Command::Action {
                button: event.button,
            });
        });

        Self {
            panel,
            theme,
            toolbar: ToolbarView::default(),
            help: HelpMenu::default(),
            status: StatusBar::default(),
            click_regions: Vec::new(),
            outgoing_commands,
            connected: false,
            should_exit: false,
        }
    }

    #[must_use]
    pub const fn panel(&self) -> &Panel {
        &self.panel
    }

    #[must_use]
    pub fn click_regions(&self) -> &[ClickRegion] {
        &self.click_regions
    }

    /// Take all queued commands.
    pub fn take_commands(&mut self) -> Vec<Command> {
        mem::take(&mut *self.outgoing_commands.borrow_mut())
    }

    /// Per-frame housekeeping; call right before drawing.
    pub fn update(&mut self) {
        self.panel.on_frame(Instant::now());
    }

    /// Handle incoming message from the proof engine.
    pub fn handle_message(&mut self, msg: Message) {
        match msg {
            Message::Goals { content } => self.panel.render_goals(content),
            Message::SystemNotification { message } => self.panel.notify_system(message),
            Message::Splash {
                version_info,
                message,
                mode,
            } => self
                .panel
                .splash(version_info.as_deref(), message.as_deref(), mode),
            Message::Log { text, level, sid } => {
                self.panel.append_log(text, level, sid);
            }
            Message::Packages { lines } => self.panel.render_packages(lines),
            Message::ToolbarOn => self.panel.toolbar_on(),
            Message::ToolbarOff => self.panel.toolbar_off(),
            Message::Show => self.panel.show(),
            Message::Hide => self.panel.hide(),
            Message::Toggle => self.panel.toggle(),
            Message::Filter { level } => self.select_threshold(&level),
        }
    }

    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(*key),
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.help.handle_event(key) {
            return;
        }

        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match (key.code, alt) {
            (KeyCode::Char('q'), false) => self.should_exit = true,
            (KeyCode::F(8), _) => self.panel.toggle(),
            _ if self.panel.toggled() => {}
            (KeyCode::Char('p'), true) => self.press(ToolbarButton::Up, Trigger::Key),
            (KeyCode::Char('n'), true) => self.press(ToolbarButton::Down, Trigger::Key),
            (KeyCode::Enter, true) => self.press(ToolbarButton::ToCursor, Trigger::Key),
            (KeyCode::Char('g'), false) => self.toggle_pane(PaneId::Goal),
            (KeyCode::Char('m'), false) => self.toggle_pane(PaneId::Message),
            (KeyCode::Char('k'), false) => self.toggle_pane(PaneId::Packages),
            (KeyCode::Char(c @ '0'..='4'), false) => {
                if let Some(rank) = c.to_digit(10).and_then(|d| u8::try_from(d).ok()) {
                    self.select_threshold(&LevelSelect::Rank(rank));
                }
            }
            (KeyCode::Char('['), false) => {
                let threshold = self.panel.log().threshold().more_severe();
                self.panel.set_severity_threshold(threshold);
            }
            (KeyCode::Char(']'), false) => {
                let threshold = self.panel.log().threshold().less_severe();
                self.panel.set_severity_threshold(threshold);
            }
            (KeyCode::PageUp, _) => self.panel.log_mut().scroll_mut().scroll_up(PAGE),
            (KeyCode::PageDown, _) => self.panel.log_mut().scroll_mut().scroll_down(PAGE),
            (KeyCode::Up, false) => self.panel.log_mut().scroll_mut().scroll_up(1),
            (KeyCode::Down, false) => self.panel.log_mut().scroll_mut().scroll_down(1),
            (KeyCode::Char('?'), false) => self.help.toggle(),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            MouseEventKind::ScrollUp if !self.panel.toggled() => {
                self.panel.log_mut().scroll_mut().scroll_up(WHEEL);
            }
            MouseEventKind::ScrollDown if !self.panel.toggled() => {
                self.panel.log_mut().scroll_mut().scroll_down(WHEEL);
            }
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        // Later regions are drawn on top of earlier ones.
        let Some(target) = self
            .click_regions
            .iter()
            .rev()
            .find(|r| r.contains(column, row))
            .map(|r| r.target)
        else {
            return;
        };

        match target {
            ClickTarget::PowerButton => self.panel.toggle(),
            ClickTarget::Button(button) => self.press(button, Trigger::Mouse { column, row }),
            ClickTarget::Caption(pane) => self.toggle_pane(pane),
            ClickTarget::SeverityFilter => {
                let next = match self.panel.log().threshold() {
                    Severity::Debug => Severity::Error,
                    other => other.less_severe(),
                };
                self.panel.set_severity_threshold(next);
            }
        }
    }

    fn press(&mut self, button: ToolbarButton, trigger: Trigger) {
        self.panel.press_button(&ActionEvent { button, trigger });
    }

    fn toggle_pane(&mut self, pane: PaneId) {
        if !self.panel.on_pane_caption_click(pane) {
            debug!(pane = pane.caption(), "pane toggle rejected");
        }
    }

    fn select_threshold(&mut self, level: &LevelSelect) {
        if let Err(e) = self.panel.select_severity_threshold(level) {
            warn!(error = %e, "ignoring filter request");
        }
    }

    /// Render the UI and record click regions.
    pub fn render(&mut self, frame: &mut Frame) {
        self.click_regions.clear();
        let area = frame.area();
        let theme = self.theme;

        if self.panel.toggled() {
            self.render_power_button(frame, area);
            self.help.render(frame, area);
            return;
        }

        let on_hold = self.panel.on_hold();
        let mut title = vec![Span::styled(
            format!(" {} ", self.panel.options().wrapper_id),
            Style::new().fg(theme.title).add_modifier(Modifier::BOLD),
        )];
        if on_hold {
            title.push(Span::styled("on hold ", theme.dim));
        }
        let border = if on_hold { theme.border } else { theme.title };
        let block = Block::bordered()
            .title(Line::from(title))
            .border_style(Style::new().fg(border));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [toolbar_area, panes_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        self.toolbar.update(ToolbarInput {
            enabled: self.panel.toolbar_enabled(),
            theme,
        });
        self.toolbar.render(frame, toolbar_area);
        self.click_regions
            .extend_from_slice(self.toolbar.click_regions());

        let constraints = PaneId::ALL.map(|pane| {
            if self.panel.panes().is_collapsed(pane) {
                Constraint::Length(1)
            } else {
                Constraint::Fill(1)
            }
        });
        let pane_areas: [Rect; 3] = Layout::vertical(constraints).areas(panes_area);
        for (pane, pane_area) in PaneId::ALL.into_iter().zip(pane_areas) {
            self.render_pane(frame, pane, pane_area);
        }

        let log = self.panel.log();
        self.status.update(StatusInput {
            threshold: log.threshold(),
            hidden_entries: log.len() - log.visible_entries().count(),
            connected: self.connected,
            theme,
        });
        self.status.render(frame, status_area);

        self.render_power_button(frame, area);
        self.help.render(frame, area);
    }

    fn render_pane(&mut self, frame: &mut Frame, pane: PaneId, area: Rect) {
        let theme = self.theme;
        let collapsed = self.panel.panes().is_collapsed(pane);
        let [caption_area, content_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(area);

        render_caption(
            frame,
            caption_area,
            pane,
            collapsed,
            theme,
            &mut self.click_regions,
        );
        if pane == PaneId::Message {
            render_filter(
                frame,
                caption_area,
                self.panel.log().threshold(),
                theme,
                &mut self.click_regions,
            );
        }
        if collapsed {
            return;
        }

        match pane {
            PaneId::Goal => render_goal_pane(frame, content_area, self.panel.goals(), theme),
            PaneId::Message => {
                render_message_pane(frame, content_area, self.panel.log_mut(), theme);
            }
            PaneId::Packages => {
                render_packages_pane(frame, content_area, self.panel.packages(), theme);
            }
        }
    }

    /// Top-right power button; the only thing drawn while hidden.
    fn render_power_button(&mut self, frame: &mut Frame, area: Rect) {
        let width = 3.min(area.width);
        let button = Rect::new(area.right().saturating_sub(width + 1), area.y, width, 1);
        frame.render_widget(
            Paragraph::new("[⏻]").style(Style::new().fg(self.theme.title)),
            button,
        );
        self.click_regions.push(ClickRegion {
            area: button,
            target: ClickTarget::PowerButton,
        });
    }
}
