//! Task record and its completion state.

use super::TaskId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Completion state of a task.
///
/// The only transition is [`CompletionState::toggled`], which flips between
/// the two states in either direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionState {
    /// Work on the task is outstanding.
    #[default]
    Incomplete,
    /// The task has been completed.
    Completed,
}

impl CompletionState {
    /// Returns the opposite state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Incomplete => Self::Completed,
            Self::Completed => Self::Incomplete,
        }
    }

    /// Returns `true` for [`CompletionState::Completed`].
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Returns the label shown to end users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Incomplete => "ناتمام",
            Self::Completed => "تکمیل شده",
        }
    }
}

/// A titled unit of work owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    due_date: Option<NaiveDate>,
    completion: CompletionState,
    created_at: DateTime<Utc>,
}

impl Task {
    /// Creates an incomplete task stamped with the clock's current time.
    pub(crate) fn new(
        id: TaskId,
        title: String,
        description: Option<String>,
        due_date: Option<NaiveDate>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            title,
            description,
            due_date,
            completion: CompletionState::Incomplete,
            created_at: clock.utc(),
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the completion state.
    #[must_use]
    pub const fn completion(&self) -> CompletionState {
        self.completion
    }

    /// Returns `true` when the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completion.is_completed()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_description(&mut self, description: String) {
        self.description = Some(description);
    }

    pub(crate) const fn set_due_date(&mut self, due_date: NaiveDate) {
        self.due_date = Some(due_date);
    }

    /// Flips the completion state and returns the new one.
    pub(crate) const fn toggle_completion(&mut self) -> CompletionState {
        self.completion = self.completion.toggled();
        self.completion
    }
}
