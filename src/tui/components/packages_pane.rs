use ratatui::{layout::Rect, text::Line, widgets::Paragraph, Frame};

use super::Theme;

pub fn render_packages_pane(frame: &mut Frame, area: Rect, packages: &[String], theme: &Theme) {
    if packages.is_empty() {
        frame.render_widget(Paragraph::new("No packages").style(theme.dim), area);
        return;
    }

    let lines: Vec<Line> = packages
        .iter()
        .map(|name| Line::styled(name.as_str(), theme.normal))
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}
