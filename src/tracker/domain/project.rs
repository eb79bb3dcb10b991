//! Project record owning an ordered list of tasks.

use super::{ProjectId, Task, TaskId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A named container of tasks.
///
/// Tasks keep their insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: Option<String>,
    tasks: Vec<Task>,
    created_at: DateTime<Utc>,
}

impl Project {
    /// Creates an empty project stamped with the clock's current time.
    pub(crate) fn new(
        id: ProjectId,
        name: String,
        description: Option<String>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id,
            name,
            description,
            tasks: Vec::new(),
            created_at: clock.utc(),
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the project's tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks held by the project.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Finds a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == task_id)
    }

    /// Finds a task for mutation, handing the project name to `missing` on
    /// a miss.
    pub(crate) fn task_mut_or_else<E>(
        &mut self,
        task_id: TaskId,
        missing: impl FnOnce(&str) -> E,
    ) -> Result<&mut Task, E> {
        let name = self.name.as_str();
        self.tasks
            .iter_mut()
            .find(|task| task.id() == task_id)
            .ok_or_else(|| missing(name))
    }

    pub(crate) fn push_task(&mut self, task: Task) {
        self.tasks.push(task);
    }

    /// Removes a task by identifier, returning it when present.
    pub(crate) fn remove_task(&mut self, task_id: TaskId) -> Option<Task> {
        let index = self.tasks.iter().position(|task| task.id() == task_id)?;
        Some(self.tasks.remove(index))
    }
}

/// Lightweight read-only view of a project used for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// Project identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Project description, if any.
    pub description: Option<String>,
    /// Number of tasks held by the project.
    pub task_count: usize,
}

impl From<&Project> for ProjectSummary {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id,
            name: project.name.clone(),
            description: project.description.clone(),
            task_count: project.task_count(),
        }
    }
}
