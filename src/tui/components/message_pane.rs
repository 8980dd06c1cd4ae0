//! Message pane: filtered log lines with session separators.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{ClickRegion, ClickTarget, Theme};
use crate::panel::{LogEntry, MessageLog, Severity};

/// Draw the log below the caption, following the pane's scroll state.
pub fn render_message_pane(frame: &mut Frame, area: Rect, log: &mut MessageLog, theme: &Theme) {
    if area.height == 0 {
        return;
    }

    let lines = log_lines(log, area.width, theme);
    if lines.is_empty() {
        frame.render_widget(Paragraph::new("No messages").style(theme.dim), area);
        return;
    }

    let offset = log
        .scroll_mut()
        .resolve(lines.len(), usize::from(area.height));
    let offset = u16::try_from(offset).unwrap_or(u16::MAX);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), area);
}

/// Right-aligned filter selector inside the message caption. Clicking it
/// cycles through the severities.
pub fn render_filter(
    frame: &mut Frame,
    caption_area: Rect,
    threshold: Severity,
    theme: &Theme,
    regions: &mut Vec<ClickRegion>,
) {
    let line = Line::from(vec![
        Span::styled("Filter: ", theme.dim),
        Span::styled(format!("◂ {threshold} ▸"), theme.severity(threshold)),
    ]);
    let width = u16::try_from(line.width())
        .unwrap_or(u16::MAX)
        .min(caption_area.width);
    let area = Rect::new(
        caption_area.right().saturating_sub(width),
        caption_area.y,
        width,
        1,
    );

    frame.render_widget(Paragraph::new(line), area);
    regions.push(ClickRegion {
        area,
        target: ClickTarget::SeverityFilter,
    });
}

/// Visible entries as terminal lines, with a rule above every group that
/// directly follows another group.
pub fn log_lines(log: &MessageLog, width: u16, theme: &Theme) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for entry in log.visible_entries() {
        if entry.group_start && entry.prev_end_adjacent {
            lines.push(Line::styled(
                "╌".repeat(usize::from(width)),
                theme.separator,
            ));
        }

        let style = theme.severity(entry.severity);
        let mut body = entry.body.lines();
        let first = body.next().unwrap_or_default();
        lines.push(Line::from(vec![
            Span::styled(gutter(entry), theme.dim),
            Span::styled(first.to_string(), style),
        ]));

        let continuation = if entry.session_id.is_some() { "│ " } else { "  " };
        for rest in body {
            lines.push(Line::from(vec![
                Span::styled(continuation, theme.dim),
                Span::styled(rest.to_string(), style),
            ]));
        }
    }

    lines
}

const fn gutter(entry: &LogEntry) -> &'static str {
    match (entry.session_id.is_some(), entry.group_start, entry.group_end) {
        (false, _, _) => "  ",
        (true, true, true) => "╶ ",
        (true, true, false) => "┌ ",
        (true, false, true) => "└ ",
        (true, false, false) => "│ ",
    }
}
