//! Word-count rules for project and task text fields.

use super::FieldValidationError;
use serde::{Deserialize, Serialize};

/// Word ceiling for names and titles.
pub const MAX_NAME_WORDS: usize = 30;

/// Word ceiling for descriptions.
pub const MAX_DESCRIPTION_WORDS: usize = 150;

/// Text fields subject to validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextField {
    /// Name of a project.
    ProjectName,
    /// Description of a project.
    ProjectDescription,
    /// Title of a task.
    TaskTitle,
    /// Description of a task.
    TaskDescription,
}

impl TextField {
    /// Returns the field name used in validation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ProjectName => "Project name",
            Self::ProjectDescription => "Project description",
            Self::TaskTitle => "Task title",
            Self::TaskDescription => "Task description",
        }
    }

    /// Returns the localized label shown to end users.
    #[must_use]
    pub const fn friendly_label(self) -> &'static str {
        match self {
            Self::ProjectName => "نام",
            Self::TaskTitle => "عنوان",
            Self::ProjectDescription | Self::TaskDescription => "توضیحات",
        }
    }

    /// Returns the word ceiling that applies to this field.
    #[must_use]
    pub const fn word_limit(self) -> usize {
        match self {
            Self::ProjectName | Self::TaskTitle => MAX_NAME_WORDS,
            Self::ProjectDescription | Self::TaskDescription => MAX_DESCRIPTION_WORDS,
        }
    }

    /// Validates `text` against [`TextField::word_limit`].
    ///
    /// # Errors
    ///
    /// See [`validate_word_limit`].
    pub fn validate(self, text: Option<&str>) -> Result<(), FieldValidationError> {
        validate_word_limit(text, self.word_limit(), self)
    }
}

/// Counts whitespace-delimited, non-empty tokens.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Checks that `text` holds at most `max_words` words.
///
/// Absent and empty text always passes.
///
/// # Errors
///
/// Returns [`FieldValidationError::ExceedsWordLimit`] naming `field` and
/// `max_words` when the word count is above the ceiling.
pub fn validate_word_limit(
    text: Option<&str>,
    max_words: usize,
    field: TextField,
) -> Result<(), FieldValidationError> {
    let Some(value) = text else {
        return Ok(());
    };
    if count_words(value) > max_words {
        return Err(FieldValidationError::ExceedsWordLimit { field, max_words });
    }
    Ok(())
}

/// Rejects empty or whitespace-only values for required fields.
///
/// # Errors
///
/// Returns [`FieldValidationError::Empty`] when `text` has no words.
pub fn require_non_empty(text: &str, field: TextField) -> Result<(), FieldValidationError> {
    if text.trim().is_empty() {
        return Err(FieldValidationError::Empty { field });
    }
    Ok(())
}
