//! Shared test helpers for in-memory tracker integration tests.

use mockable::DefaultClock;
use rstest::fixture;
use todolist::tracker::{
    adapters::StaticEnvironment,
    services::{MAX_PROJECTS_VAR, MAX_TASKS_VAR, TrackerLimits, TrackerManager},
};

/// Tracker type used across integration tests.
pub type TestTracker = TrackerManager<DefaultClock>;

/// Installs a test logger so tracker log records are captured per test.
pub fn init_logging() {
    if env_logger::builder().is_test(true).try_init().is_err() {
        // Already installed by an earlier test in this binary.
    }
}

/// Provides a tracker configured the way the reference scenario expects:
/// three projects and ten tasks, read from an environment source.
#[fixture]
pub fn tracker() -> TestTracker {
    init_logging();
    let env = StaticEnvironment::new()
        .with_var(MAX_PROJECTS_VAR, "3")
        .with_var(MAX_TASKS_VAR, "10");
    TrackerManager::new(TrackerLimits::from_source(&env), DefaultClock)
}

/// Returns the sum of per-project task counts.
#[must_use]
pub fn sum_of_task_counts(tracker: &TestTracker) -> usize {
    tracker
        .projects()
        .iter()
        .map(|project| project.task_count())
        .sum()
}
