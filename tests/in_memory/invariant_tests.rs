//! Integration tests for the running task total.

use super::helpers::{TestTracker, sum_of_task_counts, tracker};
use rstest::rstest;
use todolist::tracker::{
    domain::{ProjectId, TaskId},
    services::{CreateProjectRequest, CreateTaskRequest},
};

#[rstest]
fn total_matches_per_project_counts_after_mixed_operations(
    mut tracker: TestTracker,
) -> eyre::Result<()> {
    tracker.add_project(CreateProjectRequest::new("Home"))?;
    tracker.add_project(CreateProjectRequest::new("Work"))?;
    let home = ProjectId::new(1);
    let work = ProjectId::new(2);

    for title in ["Dishes", "Laundry", "Groceries"] {
        tracker.add_task(home, CreateTaskRequest::new(title))?;
        eyre::ensure!(tracker.total_tasks_count() == sum_of_task_counts(&tracker));
    }
    for title in ["Report", "Review"] {
        tracker.add_task(work, CreateTaskRequest::new(title))?;
        eyre::ensure!(tracker.total_tasks_count() == sum_of_task_counts(&tracker));
    }

    tracker.remove_task(home, TaskId::new(2))?;
    eyre::ensure!(tracker.total_tasks_count() == sum_of_task_counts(&tracker));

    let rejected = tracker.remove_task(work, TaskId::new(1));
    eyre::ensure!(rejected.is_err(), "task 1 belongs to another project");
    eyre::ensure!(tracker.total_tasks_count() == 4);

    tracker.remove_project(home)?;
    eyre::ensure!(tracker.total_tasks_count() == 2);
    eyre::ensure!(tracker.tasks(work)?.len() == 2);
    eyre::ensure!(tracker.total_tasks_count() == sum_of_task_counts(&tracker));
    Ok(())
}

#[rstest]
fn task_identifiers_are_unique_across_projects(mut tracker: TestTracker) -> eyre::Result<()> {
    tracker.add_project(CreateProjectRequest::new("A"))?;
    tracker.add_project(CreateProjectRequest::new("B"))?;
    tracker.add_task(ProjectId::new(1), CreateTaskRequest::new("first"))?;
    tracker.add_task(ProjectId::new(2), CreateTaskRequest::new("second"))?;
    tracker.remove_task(ProjectId::new(2), TaskId::new(2))?;
    tracker.add_task(ProjectId::new(2), CreateTaskRequest::new("third"))?;

    let mut ids: Vec<u64> = tracker
        .projects()
        .iter()
        .flat_map(|project| project.tasks().iter().map(|task| task.id().value()))
        .collect();
    ids.sort_unstable();

    eyre::ensure!(ids == [1, 3], "got {ids:?}");
    Ok(())
}
