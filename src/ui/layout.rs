use crate::ui::banner;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub banner: Rect,
    pub form: Rect,
    pub activity: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(banner::HEIGHT), // Header banner
            Constraint::Length(5),              // URL form
            Constraint::Min(4),                 // Activity log
            Constraint::Length(1),              // Status bar
        ])
        .split(area);

    AppLayout {
        banner: chunks[0],
        form: chunks[1],
        activity: chunks[2],
        status_bar: chunks[3],
    }
}
