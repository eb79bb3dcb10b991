//! Domain model for project and task tracking.
//!
//! Records in this module are created and mutated only through the tracker
//! service; callers get read-only access.

mod error;
mod ids;
mod project;
mod task;
mod text;

pub use error::FieldValidationError;
pub use ids::{IdSequence, ProjectId, TaskId};
pub use project::{Project, ProjectSummary};
pub use task::{CompletionState, Task};
pub use text::{
    MAX_DESCRIPTION_WORDS, MAX_NAME_WORDS, TextField, count_words, require_non_empty,
    validate_word_limit,
};
