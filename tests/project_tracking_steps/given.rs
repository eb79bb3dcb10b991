//! Given steps for project tracking BDD scenarios.

use super::world::TrackerWorld;
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use todolist::tracker::{
    domain::ProjectId,
    services::{CreateProjectRequest, CreateTaskRequest, TrackerLimits, TrackerManager},
};

#[given("a tracker allowing {max_projects:usize} projects and {max_tasks:usize} tasks")]
fn tracker_with_limits(world: &mut TrackerWorld, max_projects: usize, max_tasks: usize) {
    world.tracker = Some(TrackerManager::new(
        TrackerLimits::new(max_projects, max_tasks),
        DefaultClock,
    ));
    world.last_result = None;
}

#[given(r#"a project named "{name}""#)]
fn project_named(world: &mut TrackerWorld, name: String) -> Result<(), eyre::Report> {
    world
        .tracker_mut()?
        .add_project(CreateProjectRequest::new(name))
        .wrap_err("add project in scenario setup")?;
    Ok(())
}

#[given("project {project_id:u64} holds {count:usize} tasks")]
fn project_holds_tasks(
    world: &mut TrackerWorld,
    project_id: u64,
    count: usize,
) -> Result<(), eyre::Report> {
    let tracker = world.tracker_mut()?;
    for index in 1..=count {
        tracker
            .add_task(
                ProjectId::new(project_id),
                CreateTaskRequest::new(format!("Task {index}")),
            )
            .wrap_err("add task in scenario setup")?;
    }
    Ok(())
}
