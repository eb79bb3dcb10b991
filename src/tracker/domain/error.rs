//! Error types for tracker field validation.

use super::TextField;
use thiserror::Error;

/// Errors returned while validating user-supplied text fields.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FieldValidationError {
    /// The text holds more whitespace-delimited words than allowed.
    #[error(
        "خطای اعتبارسنجی {friendly}: {label} exceeds the {max_words}-word limit.",
        friendly = .field.friendly_label(),
        label = .field.label()
    )]
    ExceedsWordLimit {
        /// Field that failed validation.
        field: TextField,
        /// Configured word ceiling for the field.
        max_words: usize,
    },

    /// A required field is empty or whitespace-only.
    #[error(
        "خطای اعتبارسنجی {friendly}: {label} must not be empty.",
        friendly = .field.friendly_label(),
        label = .field.label()
    )]
    Empty {
        /// Field that failed validation.
        field: TextField,
    },
}

impl FieldValidationError {
    /// Returns the field that failed validation.
    #[must_use]
    pub const fn field(&self) -> TextField {
        match self {
            Self::ExceedsWordLimit { field, .. } | Self::Empty { field } => *field,
        }
    }
}
