//! Application services for project and task tracking.

mod limits;
mod manager;
mod outcome;
mod requests;

pub use limits::{
    DEFAULT_MAX_PROJECTS, DEFAULT_MAX_TASKS, MAX_PROJECTS_VAR, MAX_TASKS_VAR, TrackerLimits,
};
pub use manager::TrackerManager;
pub use outcome::{Confirmation, ErrorKind, OutcomeExt, TrackerError, TrackerResult};
pub use requests::{CreateProjectRequest, CreateTaskRequest, EditableField, TaskPatch};
