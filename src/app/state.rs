use crate::config::AppConfig;
use chrono::Local;

/// Local state of the URL form: the live text plus the cursor position the
/// terminal host needs to draw an editable field.
///
/// The text starts empty and is only changed through the edit methods below.
/// Submission reads it but never mutates it.
#[derive(Debug, Default)]
pub struct FormState {
    pub url_input: String,
    pub cursor: usize,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            url_input: String::new(),
            cursor: 0,
        }
    }

    pub fn value(&self) -> &str {
        &self.url_input
    }

    pub fn insert_char(&mut self, c: char) {
        self.url_input.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.url_input[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.url_input.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.url_input.len() {
            let next = self.url_input[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.url_input.len());
            self.url_input.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.url_input[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.url_input.len() {
            self.cursor = self.url_input[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.url_input.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.url_input.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.url_input.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.url_input.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        self.url_input.drain(pos..self.cursor);
        self.cursor = pos;
    }

    pub fn clear(&mut self) {
        self.url_input.clear();
        self.cursor = 0;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ActivityKind {
    System,
    Submit,
    Error,
}

/// One timestamped line in the activity panel.
#[derive(Debug, Clone)]
pub struct ActivityEntry {
    pub timestamp: String,
    pub text: String,
    pub kind: ActivityKind,
}

pub struct AppState {
    pub config: AppConfig,
    pub form: FormState,
    pub activity: Vec<ActivityEntry>,
    pub should_quit: bool,
    pub dirty: bool,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        Self {
            config,
            form: FormState::new(),
            activity: Vec::new(),
            should_quit: false,
            dirty: true,
            timestamp_format,
        }
    }

    pub fn push_activity(&mut self, kind: ActivityKind, text: String) {
        let entry = ActivityEntry {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            text,
            kind,
        };
        self.activity.push(entry);
        let max = self.config.ui.max_activity;
        if self.activity.len() > max {
            self.activity.remove(0);
        }
        self.dirty = true;
    }

    pub fn system_message(&mut self, text: String) {
        self.push_activity(ActivityKind::System, text);
    }

    /// Record a submission in the activity panel. One entry per submit, even
    /// when the value repeats.
    pub fn submit_message(&mut self, url: &str) {
        self.push_activity(ActivityKind::Submit, format!("Submit: {}", url));
    }

    pub fn error_message(&mut self, text: String) {
        self.push_activity(ActivityKind::Error, text);
    }
}
