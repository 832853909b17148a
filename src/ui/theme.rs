use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const ACCENT: Color = Color::Cyan;

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn banner() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn tagline() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn button() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    }

    pub fn hint() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn system_message() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn submit_message() -> Style {
        Style::default().fg(Color::Green)
    }

    pub fn error_message() -> Style {
        Style::default().fg(Color::Red)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
