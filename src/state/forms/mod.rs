//! Form domain layer
//!
//! Field identifiers, field values and the state owned by one form instance.

mod field;
mod form_state;

pub use field::FieldName;
pub use form_state::{FieldErrors, FormData, FormState};
