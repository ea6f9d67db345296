//! Validation module - field-level gates in front of the store.
//!
//! Each validator maps raw user text to a [`FieldValidation`]: unset,
//! accepted, accepted with a warning, or rejected.

mod field_validation;
mod validators;

pub use field_validation::FieldValidation;
pub use validators::*;
