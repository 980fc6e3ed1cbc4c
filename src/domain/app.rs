//! Application state management.

use chrono::{DateTime, Utc};
use serde_json::Value;

use super::VisualTree;

/// Which input field has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The question text box.
    #[default]
    Question,
    /// The CSV file path box.
    UploadPath,
}

/// A request the user has asked for, handed to the network layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Question(String),
    Upload(String),
}

/// Main application model.
///
/// Requests run on background tasks; whichever finishes last writes its
/// outcome here. Overlapping requests are not ordered: each completed
/// request unconditionally replaces the displayed result.
pub struct App {
    /// Focused input field.
    pub focus: Focus,
    /// Question input buffer.
    pub question: String,
    /// CSV path input buffer.
    pub upload_path: String,
    /// A question is in flight.
    pub asking: bool,
    /// An upload is in flight.
    pub uploading: bool,
    /// Last rendered result, replaced wholesale on every completion.
    pub result: Option<VisualTree>,
    /// Opaque query plan from the last answer, display-only.
    pub dsl: Option<Value>,
    /// Query plan overlay visible.
    pub show_dsl: bool,
    /// Help overlay visible.
    pub show_help: bool,
    /// Status line for the query flow (transport errors, progress).
    pub status: Option<String>,
    /// Status line for the upload flow.
    pub upload_status: Option<String>,
    /// When the last answer arrived.
    pub last_answered: Option<DateTime<Utc>>,
    /// Query service reachable (from the periodic health probe).
    pub connected: bool,
    /// Result panel scroll offset.
    pub scroll: u16,
    quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance.
    pub fn new() -> Self {
        Self {
            focus: Focus::Question,
            question: String::new(),
            upload_path: String::new(),
            asking: false,
            uploading: false,
            result: None,
            dsl: None,
            show_dsl: false,
            show_help: false,
            status: None,
            upload_status: None,
            last_answered: None,
            connected: false,
            scroll: 0,
            quit: false,
        }
    }

    /// Type a character into the focused field.
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            Focus::Question => self.question.push(c),
            Focus::UploadPath => self.upload_path.push(c),
        }
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        match self.focus {
            Focus::Question => {
                self.question.pop();
            }
            Focus::UploadPath => {
                self.upload_path.pop();
            }
        }
    }

    /// Move focus to the other input field.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Question => Focus::UploadPath,
            Focus::UploadPath => Focus::Question,
        };
    }

    /// Submit the focused field.
    ///
    /// A new question discards the currently displayed result immediately;
    /// the answer replaces it when it arrives. Submitting while an earlier
    /// request is still in flight is allowed; whichever response completes
    /// last ends up on screen.
    pub fn submit(&mut self) -> Option<Submission> {
        match self.focus {
            Focus::Question => {
                let trimmed = self.question.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let question = trimmed.to_string();
                self.asking = true;
                self.result = None;
                self.dsl = None;
                self.show_dsl = false;
                self.scroll = 0;
                self.status = Some("asking...".to_string());
                Some(Submission::Question(question))
            }
            Focus::UploadPath => {
                let trimmed = self.upload_path.trim();
                if trimmed.is_empty() {
                    return None;
                }
                let path = trimmed.to_string();
                self.uploading = true;
                self.upload_status = Some("uploading...".to_string());
                Some(Submission::Upload(path))
            }
        }
    }

    /// Record a completed answer. Unconditional replace.
    pub fn apply_answer(&mut self, tree: VisualTree, dsl: Option<Value>) {
        self.result = Some(tree);
        self.dsl = dsl;
        self.asking = false;
        self.status = None;
        self.scroll = 0;
        self.last_answered = Some(Utc::now());
    }

    /// Record a failed question.
    pub fn apply_query_error(&mut self, message: String) {
        self.asking = false;
        self.status = Some(message);
    }

    /// Record a completed upload. The confirmation body is shown in the
    /// result panel like any other answer.
    pub fn apply_upload_confirmation(&mut self, tree: VisualTree) {
        self.uploading = false;
        self.upload_status = Some("indexing complete".to_string());
        self.result = Some(tree);
        self.dsl = None;
        self.scroll = 0;
    }

    /// Record a failed upload.
    pub fn apply_upload_error(&mut self, message: String) {
        self.uploading = false;
        self.upload_status = Some(message);
    }

    /// Update the connection indicator from the health probe.
    pub fn set_connected(&mut self, connected: bool) {
        self.connected = connected;
    }

    /// Toggle the query plan overlay. No-op when there is no plan.
    pub fn toggle_dsl(&mut self) {
        if self.dsl.is_some() {
            self.show_dsl = !self.show_dsl;
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Scroll the result panel up.
    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    /// Scroll the result panel down.
    pub fn scroll_down(&mut self) {
        self.scroll = self.scroll.saturating_add(1);
    }

    /// Ask the main loop to exit.
    pub fn request_quit(&mut self) {
        self.quit = true;
    }

    /// Check if the app should quit.
    pub fn should_quit(&self) -> bool {
        self.quit
    }
}
