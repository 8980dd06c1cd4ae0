//! Goal pane - engine goal text, system notices and the startup splash.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::Theme;
use crate::panel::{GoalBlock, GoalRegion, Splash};

pub fn render_goal_pane(frame: &mut Frame, area: Rect, goals: &GoalRegion, theme: &Theme) {
    if goals.is_empty() {
        frame.render_widget(Paragraph::new("No goals").style(theme.dim), area);
        return;
    }

    let lines: Vec<Line> = goals
        .blocks()
        .iter()
        .flat_map(|block| block_lines(block, theme))
        .collect();

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn block_lines<'a>(block: &'a GoalBlock, theme: &Theme) -> Vec<Line<'a>> {
    match block {
        GoalBlock::Markup(markup) => markup
            .lines()
            .map(|line| Line::styled(line, theme.normal))
            .collect(),
        GoalBlock::System(message) => vec![Line::styled(message.as_str(), theme.system)],
        GoalBlock::Splash(splash) => splash_lines(splash, theme),
    }
}

fn splash_lines<'a>(splash: &'a Splash, theme: &Theme) -> Vec<Line<'a>> {
    vec![
        Line::from(""),
        Line::styled(splash.version_info.as_str(), theme.splash).centered(),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ ", theme.dim),
            Span::styled(splash.mode.as_str(), theme.splash),
            Span::styled(" ]", theme.dim),
        ])
        .centered(),
        Line::styled(splash.image_url.as_str(), theme.dim).centered(),
        Line::from(""),
        Line::styled(splash.message.as_str(), theme.normal).centered(),
    ]
}
