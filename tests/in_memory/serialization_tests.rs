//! Integration tests for exporting tracker records.

use super::helpers::{TestTracker, tracker};
use chrono::NaiveDate;
use eyre::eyre;
use rstest::rstest;
use serde_json::json;
use todolist::tracker::{
    domain::{Project, ProjectId},
    services::{CreateProjectRequest, CreateTaskRequest},
};

#[rstest]
fn project_summaries_serialize_as_plain_records(mut tracker: TestTracker) -> eyre::Result<()> {
    tracker.add_project(CreateProjectRequest::new("Alpha").with_description("First"))?;
    tracker.add_task(ProjectId::new(1), CreateTaskRequest::new("Write tests"))?;

    let value = serde_json::to_value(tracker.list_projects())?;

    eyre::ensure!(
        value
            == json!([{
                "id": 1,
                "name": "Alpha",
                "description": "First",
                "task_count": 1
            }]),
        "got {value}"
    );
    Ok(())
}

#[rstest]
fn projects_round_trip_through_json(mut tracker: TestTracker) -> eyre::Result<()> {
    let due = NaiveDate::from_ymd_opt(2026, 12, 31).ok_or_else(|| eyre!("valid date"))?;
    tracker.add_project(CreateProjectRequest::new("Alpha"))?;
    tracker.add_task(
        ProjectId::new(1),
        CreateTaskRequest::new("Ship").with_due_date(due),
    )?;
    let project = tracker
        .project(ProjectId::new(1))
        .ok_or_else(|| eyre!("project should exist"))?;

    let encoded = serde_json::to_string(project)?;
    let decoded: Project = serde_json::from_str(&encoded)?;

    eyre::ensure!(&decoded == project);
    let task_json = serde_json::to_value(project.tasks())?;
    eyre::ensure!(task_json[0]["completion"] == "incomplete", "got {task_json}");
    eyre::ensure!(task_json[0]["due_date"] == "2026-12-31", "got {task_json}");
    Ok(())
}
