//! Validation utilities.

use crate::{ExpressError, FieldError};
use validator::{Validate, ValidationErrors};

/// Extension trait for validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns an `ExpressError` on failure.
    fn validate_request(&self) -> Result<(), ExpressError> {
        self.validate().map_err(validation_errors_to_express_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Flattens `validator::ValidationErrors` into field errors.
#[must_use]
pub fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut fields: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                field: (*field).to_string(),
                message: error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), ToString::to_string),
                code: error.code.to_string(),
            })
        })
        .collect();
    // field_errors() is backed by a HashMap
    fields.sort_by(|a, b| a.field.cmp(&b.field));
    fields
}

/// Converts `validator::ValidationErrors` to `ExpressError`.
#[must_use]
pub fn validation_errors_to_express_error(errors: ValidationErrors) -> ExpressError {
    let message = field_errors(&errors)
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ");

    ExpressError::Validation(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Longest property path accepted in a sort clause.
    pub const MAX_SORT_PROPERTY_LENGTH: usize = 64;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }

    /// Validates a sort property such as `createdDate` or `owner.name`.
    pub fn valid_sort_property(property: &str) -> Result<(), ValidationError> {
        if property.is_empty() {
            return Err(ValidationError::new("sort_property_empty"));
        }
        if property.len() > MAX_SORT_PROPERTY_LENGTH {
            return Err(ValidationError::new("sort_property_too_long"));
        }
        if !property
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
        {
            return Err(ValidationError::new("sort_property_invalid_characters"));
        }
        if !property.chars().next().map_or(false, |c| c.is_ascii_alphabetic() || c == '_') {
            return Err(ValidationError::new("sort_property_must_start_with_letter"));
        }
        if property.split('.').any(str::is_empty) {
            return Err(ValidationError::new("sort_property_empty_segment"));
        }
        Ok(())
    }
}
