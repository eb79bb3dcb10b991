//! Request payloads and the task edit patch.

use chrono::NaiveDate;

use crate::tracker::domain::{FieldValidationError, Task, TextField, require_non_empty};

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    pub(crate) name: String,
    pub(crate) description: Option<String>,
}

impl CreateProjectRequest {
    /// Creates a request with the required project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    /// Sets the project description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Request payload for adding a task to a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    pub(crate) title: String,
    pub(crate) description: Option<String>,
    pub(crate) due_date: Option<NaiveDate>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            due_date: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the task due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

/// Task field reported as changed by an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditableField {
    /// The task title.
    Title,
    /// The task description.
    Description,
    /// The task due date.
    DueDate,
}

impl EditableField {
    /// Returns the label shown to end users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "عنوان",
            Self::Description => "توضیحات",
            Self::DueDate => "تاریخ سررسید",
        }
    }
}

/// Partial update for a task; absent fields are left untouched.
///
/// Fields are applied one at a time in the order title, description, due
/// date. A field that fails validation stops the edit, but fields applied
/// before it in the same edit are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    title: Option<String>,
    description: Option<String>,
    due_date: Option<NaiveDate>,
}

impl TaskPatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns `true` when no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.due_date.is_none()
    }

    /// Splits the patch into per-field edits in processing order.
    pub(crate) fn into_edits(self) -> impl Iterator<Item = FieldEdit> {
        [
            self.title.map(FieldEdit::Title),
            self.description.map(FieldEdit::Description),
            self.due_date.map(FieldEdit::DueDate),
        ]
        .into_iter()
        .flatten()
    }
}

/// A single pending field change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FieldEdit {
    Title(String),
    Description(String),
    DueDate(NaiveDate),
}

impl FieldEdit {
    /// Validates and applies the change when it differs from the current
    /// value, returning the changed field.
    pub(crate) fn apply(
        self,
        task: &mut Task,
    ) -> Result<Option<EditableField>, FieldValidationError> {
        match self {
            Self::Title(title) => {
                if task.title() == title {
                    return Ok(None);
                }
                require_non_empty(&title, TextField::TaskTitle)?;
                TextField::TaskTitle.validate(Some(title.as_str()))?;
                task.set_title(title);
                Ok(Some(EditableField::Title))
            }
            Self::Description(description) => {
                if task.description() == Some(description.as_str()) {
                    return Ok(None);
                }
                TextField::TaskDescription.validate(Some(description.as_str()))?;
                task.set_description(description);
                Ok(Some(EditableField::Description))
            }
            Self::DueDate(due_date) => {
                if task.due_date() == Some(due_date) {
                    return Ok(None);
                }
                task.set_due_date(due_date);
                Ok(Some(EditableField::DueDate))
            }
        }
    }
}
