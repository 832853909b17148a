use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => {
            // Clock in the status bar advances between input events.
            state.dirty = true;
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Windows terminals report both press and release
    if key.kind == KeyEventKind::Release {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => vec![Action::Quit],
            KeyCode::Char('w') => {
                state.form.delete_word_back();
                vec![]
            }
            KeyCode::Char('u') => {
                state.form.clear();
                vec![]
            }
            _ => vec![],
        };
    }

    match key.code {
        // Enter is consumed here: no newline reaches the field and the
        // tracked value is left exactly as it is. The form stays editable.
        KeyCode::Enter => {
            let url = state.form.value().to_string();
            state.submit_message(&url);
            vec![Action::Submit { url }]
        }
        KeyCode::Esc => vec![Action::Quit],
        KeyCode::Char(c) => {
            state.form.insert_char(c);
            vec![]
        }
        KeyCode::Backspace => {
            state.form.delete_back();
            vec![]
        }
        KeyCode::Delete => {
            state.form.delete_forward();
            vec![]
        }
        KeyCode::Left => {
            state.form.move_left();
            vec![]
        }
        KeyCode::Right => {
            state.form.move_right();
            vec![]
        }
        KeyCode::Home => {
            state.form.move_home();
            vec![]
        }
        KeyCode::End => {
            state.form.move_end();
            vec![]
        }
        _ => vec![],
    }
}
