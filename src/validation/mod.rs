//! Validation engine
//!
//! Pure, synchronous evaluation of the rule table over a [`FormData`] record.
//! Every field is checked independently; within a field the first failing
//! rule's message is the only one reported.

mod rules;

use rules::rules_for;

use crate::state::{FieldErrors, FieldName, FormData};

/// Outcome of one validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// All fields passed; carries the normalized data
    Valid(FormData),
    /// One message per failing field
    Invalid(FieldErrors),
}

#[cfg(test)]
impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// Field errors, empty when valid
    pub fn errors(&self) -> FieldErrors {
        match self {
            ValidationResult::Valid(_) => FieldErrors::new(),
            ValidationResult::Invalid(errors) => errors.clone(),
        }
    }
}

/// Normalize raw input: surrounding whitespace is dropped from every field
pub fn normalize(data: &FormData) -> FormData {
    data.map_values(|_, value| value.trim().to_string())
}

/// Check a single (already normalized) value against its field's rules.
/// Returns the first failing rule's message.
pub fn validate_field(field: FieldName, value: &str) -> Option<&'static str> {
    rules_for(field)
        .iter()
        .find(|rule| !rule.check.passes(value))
        .map(|rule| rule.message)
}

/// Validate a full form record
pub fn validate(data: &FormData) -> ValidationResult {
    let normalized = normalize(data);

    let errors: FieldErrors = FieldName::ALL
        .iter()
        .filter_map(|&field| {
            validate_field(field, normalized.get(field)).map(|msg| (field, msg.to_string()))
        })
        .collect();

    if errors.is_empty() {
        ValidationResult::Valid(normalized)
    } else {
        ValidationResult::Invalid(errors)
    }
}
