//! # UI State Module
//!
//! General UI state that affects the overall user experience but is not
//! specific to any particular panel.

use std::time::{Duration, Instant};

/// How long feedback messages stay on screen
pub const MESSAGE_TIMEOUT: Duration = Duration::from_secs(5);

/// General UI state for user feedback
#[derive(Debug, Default)]
pub struct UIState {
    /// Error message to display to the user
    pub error_message: Option<String>,

    /// Success message to display to the user
    pub success_message: Option<String>,

    /// When the current message was set
    message_set_at: Option<Instant>,
}

impl UIState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear any messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
        self.message_set_at = None;
    }

    /// Set an error message, replacing any success message
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.success_message = None;
        self.message_set_at = Some(Instant::now());
    }

    /// Set a success message, replacing any error message
    pub fn set_success(&mut self, message: String) {
        self.success_message = Some(message);
        self.error_message = None;
        self.message_set_at = Some(Instant::now());
    }

    pub fn has_message(&self) -> bool {
        self.error_message.is_some() || self.success_message.is_some()
    }

    /// Drop messages older than `MESSAGE_TIMEOUT`
    pub fn expire_messages(&mut self, now: Instant) {
        if let Some(set_at) = self.message_set_at {
            if now.duration_since(set_at) >= MESSAGE_TIMEOUT {
                self.clear_messages();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_replace_each_other() {
        let mut state = UIState::new();
        assert!(!state.has_message());

        state.set_error("boom".to_string());
        assert_eq!(state.error_message.as_deref(), Some("boom"));

        state.set_success("saved".to_string());
        assert!(state.error_message.is_none());
        assert_eq!(state.success_message.as_deref(), Some("saved"));
    }

    #[test]
    fn test_messages_expire() {
        let mut state = UIState::new();
        state.set_success("saved".to_string());

        state.expire_messages(Instant::now());
        assert!(state.has_message());

        state.expire_messages(Instant::now() + MESSAGE_TIMEOUT);
        assert!(!state.has_message());
    }
}
