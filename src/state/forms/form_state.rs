//! Form values and per-instance form state

use super::field::FieldName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-field error messages. A field without an entry is valid.
pub type FieldErrors = BTreeMap<FieldName, String>;

/// Values of all four contact form fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
impl FormData {
    /// Build form data from the four values, in field order
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }
}

impl FormData {
    /// Get the value of a field
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Subject => &self.subject,
            FieldName::Message => &self.message,
        }
    }

    /// Replace the value of a field
    pub fn set(&mut self, field: FieldName, value: String) {
        match field {
            FieldName::Name => self.name = value,
            FieldName::Email => self.email = value,
            FieldName::Subject => self.subject = value,
            FieldName::Message => self.message = value,
        }
    }

    /// Build a new record by applying `f` to every value
    pub fn map_values(&self, mut f: impl FnMut(FieldName, &str) -> String) -> Self {
        Self {
            name: f(FieldName::Name, &self.name),
            email: f(FieldName::Email, &self.email),
            subject: f(FieldName::Subject, &self.subject),
            message: f(FieldName::Message, &self.message),
        }
    }
}

/// State owned by a single form instance
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Current field values
    pub values: FormData,
    /// Errors from the last validation or submission attempt
    pub field_errors: FieldErrors,
    /// Error not tied to a field (transport failures)
    pub form_error: Option<String>,
    /// True while a submission attempt is in flight
    pub is_submitting: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error message for a field, if it has one
    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.field_errors.get(&field).map(String::as_str)
    }

    pub fn has_field_errors(&self) -> bool {
        !self.field_errors.is_empty()
    }

    /// Idle with outstanding field errors
    pub fn is_invalid(&self) -> bool {
        !self.is_submitting && self.has_field_errors()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod form_data {
        use super::*;

        #[test]
        fn test_default_is_empty() {
            let data = FormData::default();
            for field in FieldName::ALL {
                assert_eq!(data.get(field), "");
            }
        }

        #[test]
        fn test_set_only_touches_one_field() {
            let mut data = FormData::new("Alice", "alice@example.com", "Hello", "Body");
            data.set(FieldName::Subject, "Changed".to_string());
            assert_eq!(data.name, "Alice");
            assert_eq!(data.email, "alice@example.com");
            assert_eq!(data.subject, "Changed");
            assert_eq!(data.message, "Body");
        }

        #[test]
        fn test_map_values_visits_every_field() {
            let data = FormData::new(" a ", " b ", " c ", " d ");
            let mut seen = Vec::new();
            let mapped = data.map_values(|field, value| {
                seen.push(field);
                value.trim().to_string()
            });
            assert_eq!(seen, FieldName::ALL.to_vec());
            assert_eq!(mapped, FormData::new("a", "b", "c", "d"));
        }

        #[test]
        fn test_serializes_all_keys() {
            let json = serde_json::to_value(FormData::default()).unwrap();
            let obj = json.as_object().unwrap();
            assert_eq!(obj.len(), 4);
            for field in FieldName::ALL {
                assert!(obj.contains_key(field.key()));
            }
        }
    }

    mod form_state {
        use super::*;

        #[test]
        fn test_new_is_idle_and_clean() {
            let state = FormState::new();
            assert!(!state.is_submitting);
            assert!(!state.has_field_errors());
            assert!(state.form_error.is_none());
            assert_eq!(state.values, FormData::default());
        }

        #[test]
        fn test_error_for_returns_message() {
            let mut state = FormState::new();
            state
                .field_errors
                .insert(FieldName::Email, "Invalid email address".to_string());
            assert_eq!(state.error_for(FieldName::Email), Some("Invalid email address"));
            assert_eq!(state.error_for(FieldName::Name), None);
            assert!(state.is_invalid());
        }

        #[test]
        fn test_not_invalid_while_submitting() {
            let mut state = FormState::new();
            state
                .field_errors
                .insert(FieldName::Name, "Name is required".to_string());
            state.is_submitting = true;
            assert!(!state.is_invalid());
        }
    }
}
