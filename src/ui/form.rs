use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

/// The URL form: a labelled text field and a submit row. The field text is
/// always drawn from `FormState`, never from terminal echo.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .spacing(1)
        .constraints([
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Submit row
        ])
        .split(area);

    render_field(frame, chunks[0], state);
    render_submit_row(frame, chunks[1]);
}

fn render_field(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" Image URL ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let value = state.form.value();
    let text_span = if value.is_empty() {
        Span::styled(state.config.ui.placeholder.as_str(), Theme::placeholder())
    } else {
        Span::styled(value, Theme::input_text())
    };
    let line = Line::from(vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT)),
        text_span,
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    // Cursor offset: chevron "❯ " (2 columns) plus the display width of the
    // text before the cursor (not its byte length)
    let prefix_width = state.form.url_input[..state.form.cursor].width() as u16;
    let cursor_x = inner.x + 2 + prefix_width;
    let cursor_y = inner.y;
    frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), cursor_y));
}

fn render_submit_row(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(" Submit ", Theme::button()),
        Span::styled("  Enter to submit, Esc to quit", Theme::hint()),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
