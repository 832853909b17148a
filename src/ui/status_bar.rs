use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" emojiform v{} ", env!("CARGO_PKG_VERSION")),
        Style::default().fg(Color::Green).bg(Color::DarkGray),
    ));
    parts.push(Span::styled(
        " Enter submit | Ctrl+C quit ",
        Theme::status_bar(),
    ));

    let clock = format!(
        " {} ",
        chrono::Local::now().format(&state.timestamp_format)
    );

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.len()).sum();
    let remaining = (area.width as usize).saturating_sub(used + clock.len());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        clock,
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    frame.render_widget(Paragraph::new(line), area);
}
