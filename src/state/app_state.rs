//! Application state definitions

use super::forms::FieldName;
use std::collections::VecDeque;

/// Number of focus slots: one per field plus the send button
const FOCUS_SLOTS: usize = FieldName::ALL.len() + 1;

/// Focusable slots on the contact form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(FieldName),
    SendButton,
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(FieldName::Name)
    }
}

impl Focus {
    fn position(self) -> usize {
        match self {
            Focus::Field(field) => field.index(),
            Focus::SendButton => FieldName::ALL.len(),
        }
    }

    fn at(position: usize) -> Self {
        FieldName::from_index(position)
            .map(Focus::Field)
            .unwrap_or(Focus::SendButton)
    }

    pub fn next(self) -> Self {
        Self::at((self.position() + 1) % FOCUS_SLOTS)
    }

    pub fn prev(self) -> Self {
        Self::at((self.position() + FOCUS_SLOTS - 1) % FOCUS_SLOTS)
    }

    /// The field under focus, `None` on the button
    pub fn field(self) -> Option<FieldName> {
        match self {
            Focus::Field(field) => Some(field),
            Focus::SendButton => None,
        }
    }
}

/// A modal dialog waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    Success(String),
    Error(String),
}

/// UI state that is not owned by the form controller
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Focused input slot
    pub focus: Focus,
    /// Modal dialogs, oldest first
    pub dialogs: VecDeque<Dialog>,
    /// Transient status bar message
    pub status_message: Option<String>,
}

impl AppState {
    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    /// The field under focus, if any
    pub fn focused_field(&self) -> Option<FieldName> {
        self.focus.field()
    }

    pub fn is_send_focused(&self) -> bool {
        self.focus == Focus::SendButton
    }

    /// Queue an error dialog
    pub fn push_error(&mut self, message: String) {
        self.dialogs.push_back(Dialog::Error(message));
    }

    /// Queue a success dialog
    pub fn push_success(&mut self, message: String) {
        self.dialogs.push_back(Dialog::Success(message));
    }

    pub fn has_dialog(&self) -> bool {
        !self.dialogs.is_empty()
    }

    /// Dialog currently shown
    pub fn current_dialog(&self) -> Option<&Dialog> {
        self.dialogs.front()
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialogs.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod focus {
        use super::*;

        #[test]
        fn test_default_focus_is_first_field() {
            let state = AppState::default();
            assert_eq!(state.focused_field(), Some(FieldName::Name));
            assert!(!state.is_send_focused());
        }

        #[test]
        fn test_next_focus_cycles_through_button() {
            let mut state = AppState::default();
            let mut seen = Vec::new();
            for _ in 0..5 {
                seen.push(state.focused_field());
                state.next_focus();
            }
            assert_eq!(
                seen,
                vec![
                    Some(FieldName::Name),
                    Some(FieldName::Email),
                    Some(FieldName::Subject),
                    Some(FieldName::Message),
                    None,
                ]
            );
            assert_eq!(state.focus, Focus::Field(FieldName::Name)); // Wrapped back
        }

        #[test]
        fn test_prev_focus_wraps_to_button() {
            let mut state = AppState::default();
            state.prev_focus();
            assert!(state.is_send_focused());
            state.prev_focus();
            assert_eq!(state.focused_field(), Some(FieldName::Message));
        }

        #[test]
        fn test_next_then_prev_is_identity() {
            let mut focus = Focus::default();
            for _ in 0..FOCUS_SLOTS {
                assert_eq!(focus.next().prev(), focus);
                focus = focus.next();
            }
        }
    }

    mod dialogs {
        use super::*;

        #[test]
        fn test_dialogs_are_fifo() {
            let mut state = AppState::default();
            state.push_success("Sent".to_string());
            state.push_error("Timed out".to_string());

            assert_eq!(
                state.current_dialog(),
                Some(&Dialog::Success("Sent".to_string()))
            );
            state.dismiss_dialog();
            assert_eq!(
                state.current_dialog(),
                Some(&Dialog::Error("Timed out".to_string()))
            );
            state.dismiss_dialog();
            assert!(!state.has_dialog());
        }

        #[test]
        fn test_dismiss_on_empty_is_noop() {
            let mut state = AppState::default();
            state.dismiss_dialog();
            assert!(state.current_dialog().is_none());
        }
    }
}
