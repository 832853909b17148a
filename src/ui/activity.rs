use crate::app::state::{ActivityKind, AppState};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// On-screen diagnostic panel; newest entries win when space runs out.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Activity ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible = inner.height as usize;
    let start = state.activity.len().saturating_sub(visible);
    let lines: Vec<Line> = state.activity[start..]
        .iter()
        .map(|entry| {
            let style = match entry.kind {
                ActivityKind::System => Theme::system_message(),
                ActivityKind::Submit => Theme::submit_message(),
                ActivityKind::Error => Theme::error_message(),
            };
            Line::from(vec![
                Span::styled(entry.timestamp.clone(), Theme::timestamp()),
                Span::raw(" "),
                Span::styled(entry.text.clone(), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
