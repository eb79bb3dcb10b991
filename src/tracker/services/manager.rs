//! Tracker service owning all projects and enforcing capacity ceilings.

use crate::tracker::domain::{
    IdSequence, Project, ProjectId, ProjectSummary, Task, TaskId, TextField, require_non_empty,
};
use log::{debug, info};
use mockable::{Clock, DefaultClock};

use super::{
    Confirmation, CreateProjectRequest, CreateTaskRequest, TaskPatch, TrackerError, TrackerLimits,
    TrackerResult,
};

/// In-memory project and task tracker.
///
/// Projects and their tasks keep insertion order. The manager maintains the
/// running total of tasks across all projects and checks it, together with
/// the project count, against [`TrackerLimits`] before creating anything.
///
/// Every mutating operation takes `&mut self`; callers that share a manager
/// across threads wrap it in a single `Mutex` so each operation stays one
/// atomic unit.
///
/// # Examples
///
/// ```
/// use todolist::tracker::services::{
///     CreateProjectRequest, CreateTaskRequest, TrackerLimits, TrackerManager,
/// };
/// use mockable::DefaultClock;
///
/// let mut manager = TrackerManager::new(TrackerLimits::new(3, 10), DefaultClock);
/// let added = manager
///     .add_project(CreateProjectRequest::new("Project Alpha"))
///     .expect("project should be added");
/// assert_eq!(
///     added.to_string(),
///     "پروژه 'Project Alpha' با شناسه 1 با موفقیت اضافه شد."
/// );
///
/// let project_id = manager.projects()[0].id();
/// manager
///     .add_task(project_id, CreateTaskRequest::new("Buy groceries"))
///     .expect("task should be added");
/// assert_eq!(manager.total_tasks_count(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TrackerManager<C = DefaultClock>
where
    C: Clock,
{
    projects: Vec<Project>,
    total_tasks_count: usize,
    limits: TrackerLimits,
    project_ids: IdSequence,
    task_ids: IdSequence,
    clock: C,
}

impl<C> TrackerManager<C>
where
    C: Clock,
{
    /// Creates an empty tracker with the given ceilings.
    #[must_use]
    pub fn new(limits: TrackerLimits, clock: C) -> Self {
        info!(
            "tracker initialized: max projects {}, max total tasks {}",
            limits.max_projects, limits.max_tasks
        );
        Self {
            projects: Vec::new(),
            total_tasks_count: 0,
            limits,
            project_ids: IdSequence::new(),
            task_ids: IdSequence::new(),
            clock,
        }
    }

    /// Creates an empty tracker with ceilings read once from the process
    /// environment.
    #[must_use]
    pub fn from_env(clock: C) -> Self {
        Self::new(TrackerLimits::from_env(), clock)
    }

    /// Replaces the identifier sequences used for new projects and tasks.
    #[must_use]
    pub fn with_id_sequences(mut self, project_ids: IdSequence, task_ids: IdSequence) -> Self {
        self.project_ids = project_ids;
        self.task_ids = task_ids;
        self
    }

    /// Returns the configured ceilings.
    #[must_use]
    pub const fn limits(&self) -> TrackerLimits {
        self.limits
    }

    /// Returns the number of tasks held across all projects.
    #[must_use]
    pub const fn total_tasks_count(&self) -> usize {
        self.total_tasks_count
    }

    /// Returns all projects in insertion order.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Finds a project by identifier.
    #[must_use]
    pub fn project(&self, project_id: ProjectId) -> Option<&Project> {
        self.projects
            .iter()
            .find(|project| project.id() == project_id)
    }

    /// Returns the tasks of a project in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`] when no project has
    /// `project_id`.
    pub fn tasks(&self, project_id: ProjectId) -> TrackerResult<&[Task]> {
        self.existing_project(project_id).map(Project::tasks)
    }

    /// Finds a task inside a project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`] or
    /// [`TrackerError::TaskNotFound`] when either lookup misses.
    pub fn task(&self, project_id: ProjectId, task_id: TaskId) -> TrackerResult<&Task> {
        let project = self.existing_project(project_id)?;
        project
            .task(task_id)
            .ok_or_else(|| task_not_found(task_id, project.name()))
    }

    /// Lists summaries of all projects in insertion order.
    #[must_use]
    pub fn list_projects(&self) -> Vec<ProjectSummary> {
        self.projects.iter().map(ProjectSummary::from).collect()
    }

    /// Creates a project.
    ///
    /// Checks run in order and the first failure wins: total task ceiling,
    /// project ceiling, duplicate name, name validation, description
    /// validation. Nothing changes on failure.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TaskCapacityReached`],
    /// [`TrackerError::ProjectCapacityReached`],
    /// [`TrackerError::DuplicateProjectName`] or
    /// [`TrackerError::Validation`].
    pub fn add_project(&mut self, request: CreateProjectRequest) -> TrackerResult<Confirmation> {
        logged("add_project", self.try_add_project(request))
    }

    /// Removes a project together with all of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`] when no project has
    /// `project_id`.
    pub fn remove_project(&mut self, project_id: ProjectId) -> TrackerResult<Confirmation> {
        logged("remove_project", self.try_remove_project(project_id))
    }

    /// Adds a task to a project.
    ///
    /// The total task ceiling is checked before the project lookup, then the
    /// title and description are validated.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::TaskCapacityReached`],
    /// [`TrackerError::ProjectNotFound`] or [`TrackerError::Validation`].
    pub fn add_task(
        &mut self,
        project_id: ProjectId,
        request: CreateTaskRequest,
    ) -> TrackerResult<Confirmation> {
        logged("add_task", self.try_add_task(project_id, request))
    }

    /// Removes a task from a project.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`] or
    /// [`TrackerError::TaskNotFound`].
    pub fn remove_task(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> TrackerResult<Confirmation> {
        logged("remove_task", self.try_remove_task(project_id, task_id))
    }

    /// Flips a task between incomplete and completed.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`] or
    /// [`TrackerError::TaskNotFound`].
    pub fn toggle_task_completion(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> TrackerResult<Confirmation> {
        logged(
            "toggle_task_completion",
            self.task_mut(project_id, task_id).map(|task| {
                let state = task.toggle_completion();
                Confirmation::TaskToggled { task_id, state }
            }),
        )
    }

    /// Applies a partial update to a task.
    ///
    /// Fields are processed in the order title, description, due date. A
    /// field is applied only when present and different from the current
    /// value. When a field fails validation the edit stops with that error,
    /// and any field applied earlier in the same call stays applied.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::ProjectNotFound`],
    /// [`TrackerError::TaskNotFound`] or [`TrackerError::Validation`].
    pub fn edit_task(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
        patch: TaskPatch,
    ) -> TrackerResult<Confirmation> {
        logged("edit_task", self.try_edit_task(project_id, task_id, patch))
    }

    fn try_add_project(&mut self, request: CreateProjectRequest) -> TrackerResult<Confirmation> {
        self.ensure_task_capacity()?;
        if self.projects.len() >= self.limits.max_projects {
            return Err(TrackerError::ProjectCapacityReached {
                max: self.limits.max_projects,
            });
        }
        if self
            .projects
            .iter()
            .any(|project| project.name() == request.name)
        {
            return Err(TrackerError::DuplicateProjectName(request.name));
        }
        require_non_empty(&request.name, TextField::ProjectName)?;
        TextField::ProjectName.validate(Some(request.name.as_str()))?;
        TextField::ProjectDescription.validate(request.description.as_deref())?;

        let project_id = ProjectId::new(self.project_ids.next_id());
        let project = Project::new(project_id, request.name, request.description, &self.clock);
        let confirmation = Confirmation::ProjectAdded {
            project_id,
            name: project.name().to_owned(),
        };
        self.projects.push(project);
        Ok(confirmation)
    }

    fn try_remove_project(&mut self, project_id: ProjectId) -> TrackerResult<Confirmation> {
        let index = self
            .projects
            .iter()
            .position(|project| project.id() == project_id)
            .ok_or(TrackerError::ProjectNotFound(project_id))?;
        let removed = self.projects.remove(index);
        let removed_tasks = removed.task_count();
        self.total_tasks_count = self.total_tasks_count.saturating_sub(removed_tasks);
        Ok(Confirmation::ProjectRemoved {
            project_id,
            removed_tasks,
        })
    }

    fn try_add_task(
        &mut self,
        project_id: ProjectId,
        request: CreateTaskRequest,
    ) -> TrackerResult<Confirmation> {
        self.ensure_task_capacity()?;
        let project = find_project_mut(&mut self.projects, project_id)?;
        require_non_empty(&request.title, TextField::TaskTitle)?;
        TextField::TaskTitle.validate(Some(request.title.as_str()))?;
        TextField::TaskDescription.validate(request.description.as_deref())?;

        let task_id = TaskId::new(self.task_ids.next_id());
        let task = Task::new(
            task_id,
            request.title,
            request.description,
            request.due_date,
            &self.clock,
        );
        let confirmation = Confirmation::TaskAdded {
            task_id,
            title: task.title().to_owned(),
            project_name: project.name().to_owned(),
        };
        project.push_task(task);
        self.total_tasks_count += 1;
        Ok(confirmation)
    }

    fn try_remove_task(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
    ) -> TrackerResult<Confirmation> {
        let project = find_project_mut(&mut self.projects, project_id)?;
        let project_name = project.name().to_owned();
        if project.remove_task(task_id).is_none() {
            return Err(task_not_found(task_id, &project_name));
        }
        self.total_tasks_count = self.total_tasks_count.saturating_sub(1);
        Ok(Confirmation::TaskRemoved {
            task_id,
            project_name,
        })
    }

    fn try_edit_task(
        &mut self,
        project_id: ProjectId,
        task_id: TaskId,
        patch: TaskPatch,
    ) -> TrackerResult<Confirmation> {
        let task = self.task_mut(project_id, task_id)?;
        let mut changes = Vec::new();
        for edit in patch.into_edits() {
            if let Some(field) = edit.apply(task)? {
                changes.push(field);
            }
        }
        Ok(Confirmation::TaskEdited { task_id, changes })
    }

    fn ensure_task_capacity(&self) -> TrackerResult<()> {
        if self.total_tasks_count >= self.limits.max_tasks {
            return Err(TrackerError::TaskCapacityReached {
                max: self.limits.max_tasks,
            });
        }
        Ok(())
    }

    fn existing_project(&self, project_id: ProjectId) -> TrackerResult<&Project> {
        self.project(project_id)
            .ok_or(TrackerError::ProjectNotFound(project_id))
    }

    fn task_mut(&mut self, project_id: ProjectId, task_id: TaskId) -> TrackerResult<&mut Task> {
        find_project_mut(&mut self.projects, project_id)?
            .task_mut_or_else(task_id, |project_name| task_not_found(task_id, project_name))
    }
}

fn find_project_mut(projects: &mut [Project], project_id: ProjectId) -> TrackerResult<&mut Project> {
    projects
        .iter_mut()
        .find(|project| project.id() == project_id)
        .ok_or(TrackerError::ProjectNotFound(project_id))
}

fn task_not_found(task_id: TaskId, project_name: &str) -> TrackerError {
    TrackerError::TaskNotFound {
        task_id,
        project_name: project_name.to_owned(),
    }
}

/// Records the outcome of an operation at debug level and passes it through.
fn logged(operation: &str, result: TrackerResult<Confirmation>) -> TrackerResult<Confirmation> {
    match &result {
        Ok(confirmation) => debug!("{operation} succeeded: {confirmation}"),
        Err(err) => debug!("{operation} rejected: {err}"),
    }
    result
}
