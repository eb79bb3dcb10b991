//! Then steps for project tracking BDD scenarios.

use super::world::TrackerWorld;
use rstest_bdd_macros::then;
use todolist::tracker::{
    domain::{ProjectId, TaskId},
    services::OutcomeExt,
};

fn last_reply(world: &TrackerWorld) -> Result<(bool, String), eyre::Report> {
    world
        .last_result
        .clone()
        .map(OutcomeExt::into_reply)
        .ok_or_else(|| eyre::eyre!("missing operation result"))
}

#[then(r#"the operation fails with message "{message}""#)]
fn operation_fails_with(world: &TrackerWorld, message: String) -> Result<(), eyre::Report> {
    let (ok, actual) = last_reply(world)?;
    eyre::ensure!(!ok, "expected failure, got success: {actual}");
    eyre::ensure!(actual == message, "expected {message:?}, got {actual:?}");
    Ok(())
}

#[then(r#"the operation succeeds with message "{message}""#)]
fn operation_succeeds_with(world: &TrackerWorld, message: String) -> Result<(), eyre::Report> {
    let (ok, actual) = last_reply(world)?;
    eyre::ensure!(ok, "expected success, got failure: {actual}");
    eyre::ensure!(actual == message, "expected {message:?}, got {actual:?}");
    Ok(())
}

#[then("the tracker holds {count:usize} projects")]
fn tracker_holds_projects(world: &TrackerWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.tracker()?.projects().len();
    eyre::ensure!(held == count, "expected {count} projects, found {held}");
    Ok(())
}

#[then("the tracker holds {count:usize} tasks in total")]
fn tracker_holds_tasks(world: &TrackerWorld, count: usize) -> Result<(), eyre::Report> {
    let held = world.tracker()?.total_tasks_count();
    eyre::ensure!(held == count, "expected {count} tasks, found {held}");
    Ok(())
}

fn task_is_completed(world: &TrackerWorld, task_id: u64, project_id: u64) -> Result<bool, eyre::Report> {
    let task = world
        .tracker()?
        .task(ProjectId::new(project_id), TaskId::new(task_id))?;
    Ok(task.is_completed())
}

#[then("task {task_id:u64} in project {project_id:u64} is completed")]
fn task_completed(world: &TrackerWorld, task_id: u64, project_id: u64) -> Result<(), eyre::Report> {
    eyre::ensure!(
        task_is_completed(world, task_id, project_id)?,
        "task {task_id} should be completed"
    );
    Ok(())
}

#[then("task {task_id:u64} in project {project_id:u64} is incomplete")]
fn task_incomplete(world: &TrackerWorld, task_id: u64, project_id: u64) -> Result<(), eyre::Report> {
    eyre::ensure!(
        !task_is_completed(world, task_id, project_id)?,
        "task {task_id} should be incomplete"
    );
    Ok(())
}
