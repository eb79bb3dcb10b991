//! When steps for project tracking BDD scenarios.

use super::world::TrackerWorld;
use rstest_bdd_macros::when;
use todolist::tracker::{
    domain::{ProjectId, TaskId},
    services::{CreateProjectRequest, CreateTaskRequest},
};

#[when(r#"a project named "{name}" is added"#)]
fn add_project(world: &mut TrackerWorld, name: String) -> Result<(), eyre::Report> {
    let result = world
        .tracker_mut()?
        .add_project(CreateProjectRequest::new(name));
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"a task titled "{title}" is added to project {project_id:u64}"#)]
fn add_task(world: &mut TrackerWorld, title: String, project_id: u64) -> Result<(), eyre::Report> {
    let result = world
        .tracker_mut()?
        .add_task(ProjectId::new(project_id), CreateTaskRequest::new(title));
    world.last_result = Some(result);
    Ok(())
}

#[when("task {task_id:u64} in project {project_id:u64} is toggled")]
fn toggle_task(world: &mut TrackerWorld, task_id: u64, project_id: u64) -> Result<(), eyre::Report> {
    let result = world
        .tracker_mut()?
        .toggle_task_completion(ProjectId::new(project_id), TaskId::new(task_id));
    world.last_result = Some(result);
    Ok(())
}
