//! # UI State Module
//!
//! General feedback state that is not tied to a single panel: the status
//! line at the bottom of the window.

/// One line of feedback for the user
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

#[derive(Debug, Default)]
pub struct UIState {
    /// Latest success or error message, replaced by the next one
    pub status: Option<StatusMessage>,
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_error(&mut self, message: String) {
        self.status = Some(StatusMessage { text: message, is_error: true });
    }

    pub fn set_success(&mut self, message: String) {
        self.status = Some(StatusMessage { text: message, is_error: false });
    }

    pub fn error_message(&self) -> Option<&str> {
        self.status
            .as_ref()
            .filter(|status| status.is_error)
            .map(|status| status.text.as_str())
    }
}
