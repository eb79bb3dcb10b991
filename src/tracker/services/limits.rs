//! Capacity ceilings for a tracker instance.

use crate::tracker::{adapters::ProcessEnvironment, ports::EnvironmentSource};
use log::debug;
use std::num::ParseIntError;

/// Environment variable holding the project ceiling.
pub const MAX_PROJECTS_VAR: &str = "MAX_NUMBER_OF_PROJECT";

/// Environment variable holding the total task ceiling.
pub const MAX_TASKS_VAR: &str = "MAX_NUMBER_OF_TASK";

/// Project ceiling used when none is configured.
pub const DEFAULT_MAX_PROJECTS: usize = 5;

/// Total task ceiling used when none is configured.
pub const DEFAULT_MAX_TASKS: usize = 20;

/// Ceilings enforced before any project or task is created.
///
/// # Examples
///
/// ```
/// use todolist::tracker::adapters::StaticEnvironment;
/// use todolist::tracker::services::TrackerLimits;
///
/// let env = StaticEnvironment::new()
///     .with_var("MAX_NUMBER_OF_PROJECT", "3")
///     .with_var("MAX_NUMBER_OF_TASK", "12");
/// assert_eq!(TrackerLimits::from_source(&env), TrackerLimits::new(3, 12));
///
/// let broken = env.with_var("MAX_NUMBER_OF_TASK", "not-a-number");
/// assert_eq!(TrackerLimits::from_source(&broken), TrackerLimits::default());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackerLimits {
    /// Maximum number of projects held at once.
    pub max_projects: usize,
    /// Maximum number of tasks held across all projects.
    pub max_tasks: usize,
}

impl Default for TrackerLimits {
    fn default() -> Self {
        Self {
            max_projects: DEFAULT_MAX_PROJECTS,
            max_tasks: DEFAULT_MAX_TASKS,
        }
    }
}

impl TrackerLimits {
    /// Creates limits with explicit ceilings.
    #[must_use]
    pub const fn new(max_projects: usize, max_tasks: usize) -> Self {
        Self {
            max_projects,
            max_tasks,
        }
    }

    /// Reads limits from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_source(&ProcessEnvironment)
    }

    /// Reads limits from `source`.
    ///
    /// An unset variable leaves its ceiling at the default. When either
    /// variable is set but is not a non-negative integer, both ceilings fall
    /// back to their defaults.
    #[must_use]
    pub fn from_source(source: &impl EnvironmentSource) -> Self {
        let parsed = read_limit(source, MAX_PROJECTS_VAR).and_then(|projects| {
            read_limit(source, MAX_TASKS_VAR).map(|tasks| (projects, tasks))
        });
        match parsed {
            Ok((max_projects, max_tasks)) => Self::new(
                max_projects.unwrap_or(DEFAULT_MAX_PROJECTS),
                max_tasks.unwrap_or(DEFAULT_MAX_TASKS),
            ),
            Err(InvalidLimit { key, raw, error }) => {
                debug!("ignoring {key}={raw:?} ({error}); using default limits");
                Self::default()
            }
        }
    }
}

struct InvalidLimit {
    key: &'static str,
    raw: String,
    error: ParseIntError,
}

fn read_limit(
    source: &impl EnvironmentSource,
    key: &'static str,
) -> Result<Option<usize>, InvalidLimit> {
    source
        .var(key)
        .map(|raw| {
            raw.trim()
                .parse()
                .map_err(|error| InvalidLimit { key, raw, error })
        })
        .transpose()
}
