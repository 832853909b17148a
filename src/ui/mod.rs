mod activity;
mod banner;
mod form;
mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    banner::render(frame, app_layout.banner);
    form::render(frame, app_layout.form, state);
    activity::render(frame, app_layout.activity, state);
    status_bar::render(frame, app_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::event::AppEvent;
    use crate::app::handler;
    use crate::config::AppConfig;
    use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, state)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            text.push('\n');
        }
        text
    }

    fn press(state: &mut AppState, code: KeyCode) {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handler::handle_event(state, AppEvent::Terminal(CEvent::Key(key)));
    }

    #[test]
    fn initial_render_shows_empty_field_with_placeholder() {
        let state = AppState::new(AppConfig::default());
        let text = draw(&state);
        assert!(text.contains("Image URL"));
        assert!(text.contains("http://image.com"));
        assert!(text.contains("Submit"));
    }

    #[test]
    fn banner_and_panels_are_present() {
        let state = AppState::new(AppConfig::default());
        let text = draw(&state);
        assert!(text.contains("_____"));
        assert!(text.contains("swap the faces in any image for emoji"));
        assert!(text.contains("Activity"));
        assert!(text.contains("emojiform v"));
    }

    #[test]
    fn displayed_value_tracks_every_edit() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::Char('a'));
        assert!(draw(&state).contains("❯ a"));
        press(&mut state, KeyCode::Char('b'));
        assert!(draw(&state).contains("❯ ab"));
        press(&mut state, KeyCode::Backspace);
        let text = draw(&state);
        assert!(text.contains("❯ a"));
        assert!(!text.contains("❯ ab"));
    }

    #[test]
    fn placeholder_disappears_once_text_is_typed() {
        let mut state = AppState::new(AppConfig::default());
        press(&mut state, KeyCode::Char('x'));
        assert!(!draw(&state).contains("http://image.com"));
    }

    #[test]
    fn end_to_end_type_submit_and_observe() {
        let mut state = AppState::new(AppConfig::default());
        for c in "http://image.com/cat.png".chars() {
            press(&mut state, KeyCode::Char(c));
        }
        assert!(draw(&state).contains("http://image.com/cat.png"));

        press(&mut state, KeyCode::Enter);
        let text = draw(&state);
        // Value survives the submit and the observation line shows up
        assert!(text.contains("❯ http://image.com/cat.png"));
        assert!(text.contains("Submit: http://image.com/cat.png"));
        assert!(!state.should_quit);
    }
}
