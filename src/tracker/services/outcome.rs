//! Success and failure payloads returned by tracker operations.
//!
//! Both sides render the user-facing message through `Display`, so callers
//! can branch on the variant and still show the exact text.

use std::fmt;

use crate::tracker::domain::{CompletionState, FieldValidationError, ProjectId, TaskId};
use thiserror::Error;

use super::EditableField;

/// Result type for tracker operations.
pub type TrackerResult<T> = Result<T, TrackerError>;

/// Confirmation of a successful tracker mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Confirmation {
    /// A project was created.
    ProjectAdded {
        /// Identifier assigned to the project.
        project_id: ProjectId,
        /// Name of the project.
        name: String,
    },
    /// A project and all of its tasks were removed.
    ProjectRemoved {
        /// Identifier of the removed project.
        project_id: ProjectId,
        /// Number of tasks removed along with the project.
        removed_tasks: usize,
    },
    /// A task was added to a project.
    TaskAdded {
        /// Identifier assigned to the task.
        task_id: TaskId,
        /// Title of the task.
        title: String,
        /// Name of the owning project.
        project_name: String,
    },
    /// A task was removed from a project.
    TaskRemoved {
        /// Identifier of the removed task.
        task_id: TaskId,
        /// Name of the project the task belonged to.
        project_name: String,
    },
    /// A task's completion state was flipped.
    TaskToggled {
        /// Identifier of the task.
        task_id: TaskId,
        /// State after the toggle.
        state: CompletionState,
    },
    /// An edit was processed; `changes` is empty when nothing differed.
    TaskEdited {
        /// Identifier of the task.
        task_id: TaskId,
        /// Fields that changed, in processing order.
        changes: Vec<EditableField>,
    },
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ProjectAdded { project_id, name } => {
                write!(f, "پروژه '{name}' با شناسه {project_id} با موفقیت اضافه شد.")
            }
            Self::ProjectRemoved { project_id, .. } => {
                write!(f, "پروژه با شناسه {project_id} با موفقیت حذف شد.")
            }
            Self::TaskAdded {
                task_id,
                title,
                project_name,
            } => write!(
                f,
                "تسک '{title}' با شناسه {task_id} به پروژه '{project_name}' اضافه شد."
            ),
            Self::TaskRemoved {
                task_id,
                project_name,
            } => write!(
                f,
                "تسک با شناسه {task_id} از پروژه '{project_name}' با موفقیت حذف شد."
            ),
            Self::TaskToggled { task_id, state } => write!(
                f,
                "وضعیت تسک با شناسه {task_id} به '{}' تغییر یافت.",
                state.label()
            ),
            Self::TaskEdited { task_id, changes } if changes.is_empty() => {
                write!(f, "تسک با شناسه {task_id}: هیچ تغییری اعمال نشد.")
            }
            Self::TaskEdited { task_id, changes } => {
                let labels: Vec<&str> = changes.iter().map(|field| field.label()).collect();
                write!(
                    f,
                    "تسک با شناسه {task_id} با موفقیت ویرایش شد: {}",
                    labels.join(", ")
                )
            }
        }
    }
}

/// Broad category of a tracker failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A project or task ceiling has been reached.
    Capacity,
    /// The request conflicts with existing state.
    Conflict,
    /// A referenced project or task does not exist.
    NotFound,
    /// A text field failed validation.
    Validation,
}

/// Errors returned by tracker operations.
///
/// Every variant is an expected, recoverable condition; none leaves the
/// tracker in an inconsistent state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerError {
    /// The total task ceiling has been reached.
    #[error("خطا: سقف کل تسک‌ها ({max}) رسیده است.")]
    TaskCapacityReached {
        /// Configured total task ceiling.
        max: usize,
    },

    /// The project ceiling has been reached.
    #[error("خطا: سقف تعداد پروژه ({max}) رسیده است.")]
    ProjectCapacityReached {
        /// Configured project ceiling.
        max: usize,
    },

    /// Another project already uses the requested name.
    #[error("خطا: پروژه‌ای با نام '{0}' از قبل موجود است.")]
    DuplicateProjectName(String),

    /// No project has the given identifier.
    #[error("خطا: پروژه‌ای با شناسه {0} یافت نشد.")]
    ProjectNotFound(ProjectId),

    /// The project holds no task with the given identifier.
    #[error("خطا: تسکی با شناسه {task_id} در پروژه '{project_name}' یافت نشد.")]
    TaskNotFound {
        /// Identifier that was looked up.
        task_id: TaskId,
        /// Name of the project that was searched.
        project_name: String,
    },

    /// A text field failed validation.
    #[error(transparent)]
    Validation(#[from] FieldValidationError),
}

impl TrackerError {
    /// Returns the failure category.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::TaskCapacityReached { .. } | Self::ProjectCapacityReached { .. } => {
                ErrorKind::Capacity
            }
            Self::DuplicateProjectName(_) => ErrorKind::Conflict,
            Self::ProjectNotFound(_) | Self::TaskNotFound { .. } => ErrorKind::NotFound,
            Self::Validation(_) => ErrorKind::Validation,
        }
    }
}

/// Flattens an operation result into a `(success, message)` pair.
pub trait OutcomeExt {
    /// Returns `true` with the confirmation text, or `false` with the error
    /// text.
    fn into_reply(self) -> (bool, String);
}

impl OutcomeExt for TrackerResult<Confirmation> {
    fn into_reply(self) -> (bool, String) {
        match self {
            Ok(confirmation) => (true, confirmation.to_string()),
            Err(err) => (false, err.to_string()),
        }
    }
}
